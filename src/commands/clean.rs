//! Clean command: scan, resolve the selection, delete.

use std::path::{Path, PathBuf};

use super::scan::scan_root;
use crate::cli::normalize_path;
use crate::error::{ReclaimError, Result};
use crate::logging::Logger;
use crate::removal::{RemovalReport, remove_directories};
use crate::scanner::Scanner;
use crate::selection::resolve_selection;
use crate::size::{format_file_count, format_size};

pub struct Clean<'a> {
    root: &'a Path,
    scanner: Scanner,
    select: &'a [PathBuf],
    all: bool,
    dry_run: bool,
    verbose: u8,
    quiet: bool,
}

#[derive(Default)]
pub struct CleanBuilder<'a> {
    root: Option<&'a Path>,
    scanner: Option<Scanner>,
    select: &'a [PathBuf],
    all: bool,
    dry_run: bool,
    verbose: u8,
    quiet: bool,
}

impl<'a> CleanBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, root: &'a Path) -> Self {
        self.root = Some(root);
        self
    }

    pub fn scanner(mut self, scanner: Scanner) -> Self {
        self.scanner = Some(scanner);
        self
    }

    /// Cache directories or ancestor handles; relative paths are taken from
    /// the root
    pub fn select(mut self, paths: &'a [PathBuf]) -> Self {
        self.select = paths;
        self
    }

    pub fn all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn build(self) -> Result<Clean<'a>> {
        Ok(Clean {
            root: self.root.ok_or_else(|| ReclaimError::ConfigError {
                message: "root is required".to_string(),
            })?,
            scanner: self.scanner.unwrap_or_default(),
            select: self.select,
            all: self.all,
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
        })
    }
}

impl<'a> Clean<'a> {
    pub fn builder<'b>() -> CleanBuilder<'b> {
        CleanBuilder::new()
    }

    /// Scan the root and remove the selected cache directories.
    ///
    /// Every selected directory is attempted. If any removal fails, the
    /// failures are logged and [`ReclaimError::RemovalFailed`] is returned
    /// once all attempts are done.
    pub fn run(self) -> Result<RemovalReport> {
        let log = Logger::new(self.verbose, self.quiet);
        let outcome = scan_root(self.root, &self.scanner, log)?;

        if outcome.records.is_empty() {
            log.info("No cache directories found. All clean!");
            return Ok(RemovalReport::default());
        }

        log.info(format!(
            "Found {} cache directories ({})",
            outcome.records.len(),
            format_size(outcome.total_bytes())
        ));

        let selected: Vec<PathBuf> = if self.all {
            vec![self.root.to_path_buf()]
        } else {
            self.select
                .iter()
                .map(|path| normalize_path(path, self.root))
                .collect()
        };

        if selected.is_empty() {
            log.info("No directories selected for deletion. Use --select or --all.");
            return Ok(RemovalReport::default());
        }

        let deletion_set = resolve_selection(selected.as_slice(), &outcome.records);
        if deletion_set.is_empty() {
            log.info("Selection matched no cache directories. Nothing to clean.");
            return Ok(RemovalReport::default());
        }

        log.verbose(
            1,
            format!(
                "{} {} directories",
                if self.dry_run { "Would delete" } else { "Deleting" },
                deletion_set.len()
            ),
        );

        let report = remove_directories(
            deletion_set.iter().map(PathBuf::as_path),
            &outcome.records,
            self.dry_run,
            log,
        );

        if report.removed > 0 {
            log.result(format!(
                "{} {} from {} directories ({})",
                if self.dry_run { "Would reclaim" } else { "Reclaimed" },
                format_size(report.bytes_freed),
                report.removed,
                format_file_count(report.files_removed)
            ));
        }

        if !report.is_complete() {
            return Err(ReclaimError::RemovalFailed {
                failed: report.failures.len(),
                total: report.attempted(),
            });
        }

        Ok(report)
    }
}
