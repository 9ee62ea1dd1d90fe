//! Removal of the resolved deletion set.
//!
//! Directories are removed one at a time. A failure is recorded and the
//! remaining directories are still attempted.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging::Logger;
use crate::scanner::CacheDirectoryRecord;
use crate::size::{format_file_count, format_size};

/// A directory that could not be removed.
#[derive(Debug)]
pub struct RemovalFailure {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// Outcome of removing a deletion set.
#[derive(Debug, Default)]
pub struct RemovalReport {
    /// Directories removed (or that would be removed in a dry run)
    pub removed: usize,
    /// Bytes reclaimed, from the scan-time measurements
    pub bytes_freed: u64,
    /// Files removed, from the scan-time measurements
    pub files_removed: u64,
    pub failures: Vec<RemovalFailure>,
}

impl RemovalReport {
    /// Number of directories attempted
    pub fn attempted(&self) -> usize {
        self.removed + self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Remove every path in `paths`, crediting sizes from the matching records.
///
/// Paths without a record are still removed but reclaim nothing in the
/// report. With `dry_run` nothing is touched and every path counts as
/// removed.
pub fn remove_directories<'a, I>(
    paths: I,
    records: &[CacheDirectoryRecord],
    dry_run: bool,
    log: Logger,
) -> RemovalReport
where
    I: IntoIterator<Item = &'a Path>,
{
    let by_path: HashMap<&Path, &CacheDirectoryRecord> =
        records.iter().map(|r| (r.path.as_path(), r)).collect();
    let mut report = RemovalReport::default();

    for path in paths {
        let (size_bytes, file_count) = by_path
            .get(path)
            .map(|r| (r.size_bytes, r.file_count))
            .unwrap_or((0, 0));

        if dry_run {
            log.verbose(
                1,
                format!(
                    "Would remove {} ({}, {})",
                    path.display(),
                    format_size(size_bytes),
                    format_file_count(file_count)
                ),
            );
        } else if let Err(source) = fs::remove_dir_all(path) {
            log.warn(format!("Failed to remove {}: {source}", path.display()));
            report.failures.push(RemovalFailure {
                path: path.to_path_buf(),
                source,
            });
            continue;
        } else {
            log.verbose(
                1,
                format!("Removed {} ({})", path.display(), format_size(size_bytes)),
            );
        }

        report.removed += 1;
        report.bytes_freed += size_bytes;
        report.files_removed += file_count;
    }

    report
}
