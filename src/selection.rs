//! Expansion of an operator's selection into the deletion set.
//!
//! The operator may pick cache directories directly or pick an ancestor
//! directory as a handle for every cache directory beneath it. The resolver
//! turns that mix into the exact, duplicate-free set of cache directory
//! paths to remove.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::scanner::CacheDirectoryRecord;

/// Whether `path` lies strictly beneath `ancestor`.
///
/// Compares whole path components, so `/foo1` is not beneath `/foo`.
pub fn is_proper_descendant(path: &Path, ancestor: &Path) -> bool {
    path != ancestor && path.starts_with(ancestor)
}

/// Expand `selected` into the set of record paths to delete.
///
/// A selected path equal to a record's path selects that record. Any other
/// selected path selects every record strictly beneath it, and selects
/// nothing if there are none. Resolving the result against the same records
/// returns it unchanged.
pub fn resolve_selection<P: AsRef<Path>>(
    selected: &[P],
    records: &[CacheDirectoryRecord],
) -> BTreeSet<PathBuf> {
    let known: HashSet<&Path> = records.iter().map(|r| r.path.as_path()).collect();
    let mut resolved = BTreeSet::new();

    for path in selected {
        let path = path.as_ref();
        if known.contains(path) {
            resolved.insert(path.to_path_buf());
            continue;
        }

        resolved.extend(
            records
                .iter()
                .filter(|record| is_proper_descendant(&record.path, path))
                .map(|record| record.path.clone()),
        );
    }

    resolved
}
