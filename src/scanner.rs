//! Depth-bounded discovery of cache directories.
//!
//! The scanner walks a directory tree looking for directories whose names
//! the [`Classifier`] recognizes as caches. Each cache directory is measured
//! (total regular-file size and count) and reported once; the scanner never
//! looks for further cache directories inside it.
//!
//! # Failure policy
//!
//! Scanning is permissive. Any entry that cannot be read (permission denied,
//! removed while scanning, dangling symlink) is skipped where it is
//! encountered and the scan continues with its siblings. An unreadable root
//! yields an empty result. Validating the root is the caller's job.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use reclaim::scanner::Scanner;
//!
//! let records = Scanner::builder().max_depth(3).build().scan(Path::new("/home/me/code"));
//! for record in &records {
//!     println!("{} {} bytes", record.path.display(), record.size_bytes);
//! }
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::classify::{Classification, Classifier};


/// Deepest level below the root at which a cache directory is discovered.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// One discovered cache directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheDirectoryRecord {
    /// Absolute path of the cache directory, unique within a scan
    pub path: PathBuf,
    /// Final path segment
    pub name: String,
    /// Total size of all regular files beneath `path`
    pub size_bytes: u64,
    /// Number of regular files beneath `path`
    pub file_count: u64,
}

/// Aggregate size and file count of a directory's contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    pub size_bytes: u64,
    pub file_count: u64,
}

impl DirectoryStats {
    fn add_file(&mut self, len: u64) {
        self.size_bytes += len;
        self.file_count += 1;
    }
}

/// Measure every regular file beneath `path`, at any depth.
///
/// Symbolic links are neither followed nor counted. Entries that cannot be
/// read are skipped; an unreadable or missing directory measures as empty.
pub fn measure_directory(path: &Path) -> DirectoryStats {
    let mut stats = DirectoryStats::default();

    for entry in WalkDir::new(path)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(metadata) = entry.metadata() {
            stats.add_file(metadata.len());
        }
    }

    stats
}

/// Scan `root` with the built-in classifier and depth bound.
pub fn scan(root: &Path) -> Vec<CacheDirectoryRecord> {
    Scanner::default().scan(root)
}

/// Cache directory scanner.
///
/// Holds no state between scans; every call to [`Scanner::scan`] produces a
/// fresh set of records.
#[derive(Debug, Clone)]
pub struct Scanner {
    classifier: Classifier,
    max_depth: usize,
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            classifier: Classifier::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Work items for the traversal. Children are pushed in reverse so that
/// popping yields them in file-name order, which keeps the output pre-order.
enum Visit {
    Expand { dir: PathBuf, depth: usize },
    Emit { path: PathBuf, name: String },
}

impl Scanner {
    /// Creates a new builder for [`Scanner`]
    pub fn builder() -> ScannerBuilder {
        ScannerBuilder::default()
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Find and measure every cache directory beneath `root`.
    ///
    /// Records come back in pre-order discovery order, visiting the entries
    /// of each directory by file name. Discovery is sequential; the cache
    /// directories are then measured in parallel and reassembled in
    /// discovery order.
    pub fn scan(&self, root: &Path) -> Vec<CacheDirectoryRecord> {
        self.discover(root)
            .into_par_iter()
            .map(|(path, name)| {
                let stats = measure_directory(&path);
                CacheDirectoryRecord {
                    path,
                    name,
                    size_bytes: stats.size_bytes,
                    file_count: stats.file_count,
                }
            })
            .collect()
    }

    /// Locate cache directories without measuring them.
    fn discover(&self, root: &Path) -> Vec<(PathBuf, String)> {
        let mut found = Vec::new();
        let mut worklist = vec![Visit::Expand {
            dir: root.to_path_buf(),
            depth: 0,
        }];

        while let Some(visit) = worklist.pop() {
            match visit {
                Visit::Emit { path, name } => found.push((path, name)),
                Visit::Expand { dir, depth } => {
                    let child_depth = depth + 1;
                    let mut children = Vec::new();

                    for (path, file_name) in list_subdirectories(&dir) {
                        // Non UTF-8 names can never match a known name.
                        let Some(name) = file_name.to_str() else {
                            if child_depth < self.max_depth {
                                children.push(Visit::Expand {
                                    dir: path,
                                    depth: child_depth,
                                });
                            }
                            continue;
                        };

                        match self.classifier.classify(name) {
                            Classification::Ignored => {}
                            Classification::Cache => children.push(Visit::Emit {
                                path,
                                name: name.to_string(),
                            }),
                            Classification::Ordinary => {
                                if child_depth < self.max_depth {
                                    children.push(Visit::Expand {
                                        dir: path,
                                        depth: child_depth,
                                    });
                                }
                            }
                        }
                    }

                    worklist.extend(children.into_iter().rev());
                }
            }
        }

        found
    }
}

/// List the immediate subdirectories of `dir`, sorted by file name.
///
/// Uses the entry's own file type, so symlinks to directories are not
/// treated as directories. Returns nothing if `dir` cannot be read.
fn list_subdirectories(dir: &Path) -> Vec<(PathBuf, OsString)> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut subdirs: Vec<(PathBuf, OsString)> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_type()
                .map(|file_type| file_type.is_dir())
                .unwrap_or(false)
        })
        .map(|entry| (entry.path(), entry.file_name()))
        .collect();

    subdirs.sort_by(|a, b| a.1.cmp(&b.1));
    subdirs
}

/// Builder for [`Scanner`]
#[derive(Debug, Default)]
pub struct ScannerBuilder {
    classifier: Option<Classifier>,
    max_depth: Option<usize>,
}

impl ScannerBuilder {
    /// Use a classifier with extra cache names
    pub fn classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Deepest level below the root at which cache directories are found
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn build(self) -> Scanner {
        Scanner {
            classifier: self.classifier.unwrap_or_default(),
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
        }
    }
}
