#![allow(dead_code)]

use std::path::Path;

use assert_fs::TempDir;
use assert_fs::prelude::*;

/// Write `len` bytes to `relative` beneath `root`, creating parents.
pub fn write_bytes(root: &TempDir, relative: &str, len: usize) {
    root.child(relative)
        .write_binary(&vec![b'x'; len])
        .expect("failed to write fixture file");
}

/// Create an empty directory chain beneath `root`.
pub fn make_dirs(root: &TempDir, relative: &str) {
    root.child(relative)
        .create_dir_all()
        .expect("failed to create fixture directory");
}

/// A workspace with two projects:
///
/// ```text
/// proj/node_modules   2 files, 10 bytes
/// proj/sub/dist       1 file, 5 bytes
/// proj/src/index.js   source, never touched
/// web/.next           1 file, 7 bytes
/// .git/node_modules   inside VCS metadata, never reported
/// ```
pub fn workspace() -> TempDir {
    let temp = TempDir::new().expect("failed to create temp dir");
    write_bytes(&temp, "proj/node_modules/a.js", 4);
    write_bytes(&temp, "proj/node_modules/pkg/b.js", 6);
    write_bytes(&temp, "proj/sub/dist/bundle.js", 5);
    write_bytes(&temp, "proj/src/index.js", 100);
    write_bytes(&temp, "web/.next/cache.bin", 7);
    write_bytes(&temp, ".git/node_modules/x", 1);
    temp
}

/// Relative path of `path` beneath `root`, using `/` separators.
pub fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .expect("path should be under root")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
