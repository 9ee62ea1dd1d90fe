//! Command-line interface definitions for reclaim.
//!
//! This module defines the CLI structure using clap, including all subcommands
//! and their arguments. The main entry point is the [`Cli`] struct.
//!
//! # Example
//!
//! ```no_run
//! use reclaim::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//!
//! match cli.command() {
//!     Commands::Scan { root } => println!("Scanning {:?}", root),
//!     Commands::Clean { select, .. } => println!("Cleaning {} selections", select.len()),
//! }
//! ```

use std::path::{Path, PathBuf};

use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand};

use crate::classify::Classifier;
use crate::error::{ReclaimError, Result};
use crate::scanner::{DEFAULT_MAX_DEPTH, Scanner};

#[cfg(test)]
mod tests;

/// Main command-line interface for reclaim.
///
/// This struct represents the top-level CLI configuration, containing both
/// global options that apply to all commands and the specific subcommand
/// to execute.
#[derive(Parser)]
#[command(
    name = "reclaim",
    bin_name = "reclaim",
    author,
    version,
    about = "Find build and dependency cache directories and reclaim their disk space",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

/// Global options that apply to all reclaim commands.
///
/// These control how deep the scan goes, which extra directory names count
/// as caches, and output verbosity.
#[derive(Parser)]
pub struct GlobalOpts {
    /// Deepest level below the root at which cache directories are found
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from),
        env = "RECLAIM_MAX_DEPTH"
    )]
    max_depth: usize,

    /// Additional directory names to treat as caches (comma-separated)
    #[arg(
        long = "cache-name",
        global = true,
        value_delimiter = ',',
        env = "RECLAIM_CACHE_NAMES"
    )]
    cache_names: Vec<String>,

    /// Enable verbose output (use multiple times for more verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, env = "RECLAIM_VERBOSE")]
    verbose: u8,

    /// Silence all output except for errors and results
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        env = "RECLAIM_QUIET"
    )]
    quiet: bool,
}

impl GlobalOpts {
    /// Create a new builder for constructing `GlobalOpts` programmatically.
    pub fn builder() -> GlobalOptsBuilder {
        GlobalOptsBuilder::default()
    }

    /// Get the maximum discovery depth
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Get the extra cache directory names
    pub fn cache_names(&self) -> &[String] {
        &self.cache_names
    }

    /// Get the verbose level
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Check if quiet mode is enabled
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Build the scanner these options describe
    pub fn scanner(&self) -> Scanner {
        Scanner::builder()
            .classifier(Classifier::new().with_cache_names(self.cache_names.iter().cloned()))
            .max_depth(self.max_depth)
            .build()
    }
}

/// Builder for constructing `GlobalOpts` programmatically.
///
/// Useful for testing and for embedding reclaim without going through
/// command-line parsing.
#[derive(Default)]
pub struct GlobalOptsBuilder {
    max_depth: Option<usize>,
    cache_names: Vec<String>,
    verbose: u8,
    quiet: bool,
}

impl GlobalOptsBuilder {
    /// Set the maximum discovery depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set extra cache directory names.
    pub fn cache_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cache_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the verbosity level (0 = normal, 1+ = verbose).
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable or disable quiet mode.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Build the `GlobalOpts` instance with the configured values.
    pub fn build(self) -> GlobalOpts {
        GlobalOpts {
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            cache_names: self.cache_names,
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

impl Cli {
    /// Get the global options
    pub fn global_opts(&self) -> &GlobalOpts {
        &self.global_opts
    }

    /// Get the command
    pub fn command(&self) -> &Commands {
        &self.command
    }

    /// Create a builder for programmatic construction
    pub fn builder() -> CliBuilder {
        CliBuilder::default()
    }

    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Builder for [`Cli`]
#[derive(Debug, Default)]
pub struct CliBuilder {
    max_depth: Option<usize>,
    cache_names: Vec<String>,
    verbose: u8,
    quiet: bool,
    command: Option<Commands>,
}

impl CliBuilder {
    /// Set the maximum discovery depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Add an extra cache directory name
    pub fn cache_name(mut self, name: impl Into<String>) -> Self {
        self.cache_names.push(name.into());
        self
    }

    /// Set the verbose level
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable quiet mode
    pub fn quiet(mut self, enabled: bool) -> Self {
        self.quiet = enabled;
        self
    }

    /// Set the command
    pub fn command(mut self, command: Commands) -> Self {
        self.command = Some(command);
        self
    }

    /// Build the Cli instance
    pub fn build(self) -> Result<Cli> {
        let command = self.command.ok_or(ReclaimError::ConfigError {
            message: "Command is required".to_string(),
        })?;

        if self.max_depth == Some(0) {
            return Err(ReclaimError::ConfigError {
                message: "max depth must be at least 1".to_string(),
            });
        }

        let mut global_opts = GlobalOpts::builder()
            .cache_names(self.cache_names)
            .verbose(self.verbose)
            .quiet(self.quiet);
        if let Some(depth) = self.max_depth {
            global_opts = global_opts.max_depth(depth);
        }

        Ok(Cli {
            global_opts: global_opts.build(),
            command,
        })
    }
}

/// Normalize a path to be absolute and clean, without requiring it to exist.
///
/// This function:
/// - Resolves relative paths against `base`
/// - Removes `.` and `..` components where possible
/// - Does NOT resolve symlinks (the reported paths are the ones the operator
///   typed, not their targets)
pub(crate) fn normalize_path(path: impl AsRef<Path>, base: &Path) -> PathBuf {
    let path = path.as_ref();

    let absolute = if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    };

    let mut components = Vec::new();
    for component in absolute.components() {
        use std::path::Component;
        match component {
            Component::ParentDir => {
                match components.last() {
                    Some(Component::Normal(_)) => {
                        components.pop();
                    }
                    // `..` above the filesystem root stays at the root
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => components.push(component),
                }
            }
            Component::CurDir => continue,
            _ => components.push(component),
        }
    }

    let mut result = PathBuf::new();
    for component in components {
        result.push(component);
    }

    result
}

/// Available reclaim subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List cache directories beneath a root
    ///
    /// Walks the tree below ROOT (default: the current directory), skipping
    /// version-control metadata, and prints every cache directory found
    /// together with the ancestor directories that can be used to select
    /// several caches at once.
    Scan {
        /// Directory to scan (defaults to the current directory)
        root: Option<PathBuf>,
    },

    /// Delete selected cache directories
    ///
    /// Scans ROOT, then removes the selected cache directories. A selection
    /// may name a cache directory directly or any ancestor directory, which
    /// selects every cache directory beneath it. Relative selections are
    /// resolved against ROOT.
    Clean {
        /// Directory to scan (defaults to the current directory)
        root: Option<PathBuf>,

        /// Cache directory or ancestor directory to delete (repeatable)
        #[arg(short, long, value_name = "PATH")]
        select: Vec<PathBuf>,

        /// Select every cache directory found beneath ROOT
        #[arg(long, env = "RECLAIM_ALL")]
        all: bool,

        /// Show what would be deleted without actually deleting
        #[arg(long, env = "RECLAIM_DRY_RUN")]
        dry_run: bool,
    },
}
