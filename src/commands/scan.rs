//! Scan command: list cache directories and their selection handles.

use std::path::Path;

use super::validate_root;
use crate::error::{ReclaimError, Result};
use crate::logging::Logger;
use crate::scanner::{CacheDirectoryRecord, Scanner};
use crate::size::{format_file_count, format_size};
use crate::tree::{SelectionTree, build_tree};

/// Records and selection tree produced by one scan.
#[derive(Debug)]
pub struct ScanOutcome {
    pub records: Vec<CacheDirectoryRecord>,
    pub tree: SelectionTree,
}

impl ScanOutcome {
    pub fn total_bytes(&self) -> u64 {
        self.records.iter().map(|r| r.size_bytes).sum()
    }

    pub fn total_files(&self) -> u64 {
        self.records.iter().map(|r| r.file_count).sum()
    }
}

pub struct Scan<'a> {
    root: &'a Path,
    scanner: Scanner,
    verbose: u8,
    quiet: bool,
}

#[derive(Default)]
pub struct ScanBuilder<'a> {
    root: Option<&'a Path>,
    scanner: Option<Scanner>,
    verbose: u8,
    quiet: bool,
}

impl<'a> ScanBuilder<'a> {
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

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn build(self) -> Result<Scan<'a>> {
        Ok(Scan {
            root: self.root.ok_or_else(|| ReclaimError::ConfigError {
                message: "root is required".to_string(),
            })?,
            scanner: self.scanner.unwrap_or_default(),
            verbose: self.verbose,
            quiet: self.quiet,
        })
    }
}

impl<'a> Scan<'a> {
    pub fn builder<'b>() -> ScanBuilder<'b> {
        ScanBuilder::new()
    }

    /// Validate the root, scan it, and print the selection tree to stdout.
    pub fn run(self) -> Result<ScanOutcome> {
        let log = Logger::new(self.verbose, self.quiet);
        let outcome = scan_root(self.root, &self.scanner, log)?;

        if outcome.records.is_empty() {
            log.info("No cache directories found. All clean!");
            return Ok(outcome);
        }

        log.result(self.root.display());
        for item in outcome.tree.selection_items() {
            log.result(&item.label);
        }
        log.result(format!(
            "Found {} cache directories: {} in {}",
            outcome.records.len(),
            format_size(outcome.total_bytes()),
            format_file_count(outcome.total_files())
        ));

        Ok(outcome)
    }
}

/// Shared by `scan` and `clean`: validate, scan, and build the tree.
pub(crate) fn scan_root(root: &Path, scanner: &Scanner, log: Logger) -> Result<ScanOutcome> {
    validate_root(root)?;

    log.info(format!("Scanning: {}", root.display()));
    log.verbose(
        1,
        format!(
            "Searching up to {} levels deep (extra cache names: {})",
            scanner.max_depth(),
            if scanner.classifier().extra_cache_names().is_empty() {
                "none".to_string()
            } else {
                scanner.classifier().extra_cache_names().join(", ")
            }
        ),
    );

    let records = scanner.scan(root);

    for record in &records {
        log.verbose(
            2,
            format!(
                "  {} ({}, {})",
                record.path.display(),
                format_size(record.size_bytes),
                format_file_count(record.file_count)
            ),
        );
    }

    let tree = build_tree(&records, root);
    Ok(ScanOutcome { records, tree })
}
