//! Error types for reclaim.
//!
//! This module defines the error types used by the command layer, using a
//! combination of `thiserror` for ergonomic error definitions and `miette`
//! for rich diagnostic output.
//!
//! # Error Handling Strategy
//!
//! - The scanner never fails: unreadable entries are skipped where they are
//!   encountered and never reach this type
//! - A structurally invalid scan root is the only fatal scan-level error
//! - Deletion failures are collected per directory and surfaced once, after
//!   every selected directory has been attempted
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use reclaim::error::{ReclaimError, Result};
//!
//! fn require_root(path: &Path) -> Result<()> {
//!     if !path.exists() {
//!         return Err(ReclaimError::RootNotFound(path.to_path_buf()));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur in reclaim operations
#[derive(Error, Debug, Diagnostic)]
pub enum ReclaimError {
    /// The scan root does not exist or cannot be inspected.
    ///
    /// Detected before scanning begins. The scanner itself assumes a valid
    /// root and never re-validates it.
    #[error("Path does not exist or is not accessible: '{0}'")]
    #[diagnostic(
        code(reclaim::root::not_found),
        help("Pass an existing directory to scan, or run reclaim from inside one.")
    )]
    RootNotFound(
        /// The root path that was requested
        PathBuf,
    ),

    /// The scan root exists but is not a directory.
    #[error("Path is not a directory: '{0}'")]
    #[diagnostic(
        code(reclaim::root::not_a_directory),
        help("reclaim scans directory trees; pass the directory containing your projects.")
    )]
    NotADirectory(
        /// The root path that was requested
        PathBuf,
    ),

    /// File system I/O error outside of the permissive scan.
    ///
    /// Used when the working directory cannot be determined or when the root
    /// metadata lookup fails for a reason other than the path being absent.
    #[error("I/O error accessing '{path}'")]
    #[diagnostic(code(reclaim::io_error))]
    IoError {
        /// The path that caused the I/O error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// One or more selected cache directories could not be removed.
    ///
    /// Raised only after every selected directory has been attempted; the
    /// individual failures are logged as they happen.
    #[error("Failed to remove {failed} of {total} selected directories")]
    #[diagnostic(
        code(reclaim::removal::failed),
        help("Check permissions on the listed directories and run reclaim again.")
    )]
    RemovalFailed {
        /// Number of directories that could not be removed
        failed: usize,
        /// Number of directories that were attempted
        total: usize,
    },

    /// Invalid invocation or programmatic configuration.
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(reclaim::config::error),
        help("Check the required configuration parameters.")
    )]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ReclaimError>;
