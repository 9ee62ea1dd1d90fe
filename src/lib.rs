//! # reclaim
//!
//! Finds build and dependency cache directories (`node_modules`, `target`,
//! `dist`, `.cache`, ...) beneath a root directory and removes the ones an
//! operator selects, reporting the space and files reclaimed.
//!
//! ## Overview
//!
//! A run flows through four stages:
//!
//! 1. [`classify`]: decide from a directory name whether it is a cache, a
//!    version-control directory to skip, or an ordinary directory
//! 2. [`scanner`]: walk the tree (depth-bounded, permissive about unreadable
//!    entries) and measure each cache directory found
//! 3. [`tree`]: connect every cache directory back to the root through its
//!    ancestors, so ancestors can be offered as bulk-selection handles
//! 4. [`selection`]: expand the chosen paths (caches or handles) into the
//!    exact set of cache directories to delete
//!
//! ## Usage
//!
//! ```bash
//! # List cache directories below the current directory
//! reclaim scan
//!
//! # Remove every cache directory under ./app, and one specific target dir
//! reclaim clean ~/code --select app --select tools/cli/target
//!
//! # See what removing everything would reclaim
//! reclaim clean ~/code --all --dry-run
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use reclaim::scanner::scan;
//! use reclaim::selection::resolve_selection;
//! use reclaim::tree::build_tree;
//!
//! let root = Path::new("/home/me/code");
//! let records = scan(root);
//! let tree = build_tree(&records, root);
//! for item in tree.selection_items() {
//!     println!("{}", item.label);
//! }
//!
//! let deletion_set = resolve_selection(&[root.join("app")], &records);
//! # let _ = deletion_set;
//! ```
//!
//! ## Error Handling
//!
//! The crate uses a combination of:
//! - `thiserror` for strongly-typed errors
//! - `miette` for rich diagnostic output in CLI
//!
//! Scanning itself never fails; only an invalid root or failed deletions are
//! reported as errors.

pub mod classify;
pub mod cli;
pub mod commands;
pub mod error;
pub mod removal;
pub mod scanner;
pub mod selection;
pub mod size;
pub mod tree;

// Internal modules
mod logging;

pub use logging::Logger;
