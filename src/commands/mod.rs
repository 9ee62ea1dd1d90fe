//! Implementation of reclaim subcommands.
//!
//! `mod.rs` is a thin dispatcher and re-export hub; command logic lives in
//! dedicated modules (`scan`, `clean`).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Commands, normalize_path};
use crate::error::{ReclaimError, Result};

pub(crate) mod clean;
pub(crate) mod scan;

pub use clean::{Clean, CleanBuilder};
pub use scan::{Scan, ScanBuilder, ScanOutcome};


/// Execute commands based on the parsed CLI arguments.
pub fn execute(cli: &Cli) -> Result<()> {
    execute_with_dir(cli, None)
}

/// Execute commands with an explicit working directory.
///
/// Relative roots are resolved against `working_dir` (or the process working
/// directory when `None`).
pub fn execute_with_dir(cli: &Cli, working_dir: Option<&Path>) -> Result<()> {
    let quiet = cli.global_opts().quiet();
    let verbose = if quiet {
        0
    } else {
        cli.global_opts().verbose()
    };

    let current_dir = if let Some(dir) = working_dir {
        dir.to_path_buf()
    } else {
        std::env::current_dir().map_err(|source| ReclaimError::IoError {
            path: PathBuf::from("."),
            source,
        })?
    };

    let scanner = cli.global_opts().scanner();

    match cli.command() {
        Commands::Scan { root } => {
            let root = resolve_root(root.as_deref(), &current_dir);
            Scan::builder()
                .root(&root)
                .scanner(scanner)
                .verbose(verbose)
                .quiet(quiet)
                .build()?
                .run()
                .map(|_| ())
        }
        Commands::Clean {
            root,
            select,
            all,
            dry_run,
        } => {
            let root = resolve_root(root.as_deref(), &current_dir);
            Clean::builder()
                .root(&root)
                .scanner(scanner)
                .select(select)
                .all(*all)
                .dry_run(*dry_run)
                .verbose(verbose)
                .quiet(quiet)
                .build()?
                .run()
                .map(|_| ())
        }
    }
}

/// Absolute, normalized scan root; the working directory when none is given.
fn resolve_root(root: Option<&Path>, current_dir: &Path) -> PathBuf {
    match root {
        Some(root) => normalize_path(root, current_dir),
        None => normalize_path(current_dir, current_dir),
    }
}

/// Check that `root` exists and is a directory before any scanning starts.
pub fn validate_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(ReclaimError::NotADirectory(root.to_path_buf())),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(ReclaimError::RootNotFound(root.to_path_buf()))
        }
        Err(source) => Err(ReclaimError::IoError {
            path: root.to_path_buf(),
            source,
        }),
    }
}
