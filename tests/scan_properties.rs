mod common;

use std::collections::BTreeSet;
use std::path::PathBuf;

use proptest::prelude::*;
use reclaim::classify::{Classification, classify};
use reclaim::scanner::{DEFAULT_MAX_DEPTH, scan};
use reclaim::selection::{is_proper_descendant, resolve_selection};
use reclaim::tree::build_tree;

use crate::common::{make_dirs, write_bytes};

// Property test strategies

/// A directory chain mixing ordinary, cache and ignored names
fn chain_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(
        prop::sample::select(vec!["a", "b", "src", "node_modules", "dist", ".git", "CVS"]),
        1..8,
    )
}

/// Cache directories a correct scan must report for `chains`.
fn expected_caches(chains: &[Vec<&'static str>]) -> BTreeSet<String> {
    let mut expected = BTreeSet::new();
    for chain in chains {
        for (idx, name) in chain.iter().enumerate() {
            let depth = idx + 1;
            match classify(name) {
                Classification::Ignored => break,
                Classification::Cache => {
                    if depth <= DEFAULT_MAX_DEPTH {
                        expected.insert(chain[..=idx].join("/"));
                    }
                    break;
                }
                Classification::Ordinary => {
                    if depth >= DEFAULT_MAX_DEPTH {
                        break;
                    }
                }
            }
        }
    }
    expected
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_scan_matches_reference(chains in prop::collection::vec(chain_strategy(), 1..6)) {
        let temp = assert_fs::TempDir::new().unwrap();
        for chain in &chains {
            let relative = chain.join("/");
            make_dirs(&temp, &relative);
            write_bytes(&temp, &format!("{relative}/leaf.txt"), 3);
        }

        let root = temp.path();
        let records = scan(root);

        let found: BTreeSet<String> = records
            .iter()
            .map(|r| common::relative(root, &r.path))
            .collect();
        prop_assert_eq!(found.len(), records.len(), "records must be unique");
        prop_assert_eq!(&found, &expected_caches(&chains));

        for record in &records {
            prop_assert!(is_proper_descendant(&record.path, root));
            prop_assert_eq!(classify(&record.name), Classification::Cache);
            prop_assert_eq!(record.path.file_name().unwrap().to_str(), Some(record.name.as_str()));
            prop_assert!(record.path.components().all(|c| c.as_os_str() != ".git"));
            for other in &records {
                prop_assert!(!is_proper_descendant(&other.path, &record.path));
            }
        }

        let tree = build_tree(&records, root);
        prop_assert_eq!(tree.cache_nodes().count(), records.len());

        let everything = resolve_selection(&[root.to_path_buf()], &records);
        let all_paths: BTreeSet<PathBuf> = records.iter().map(|r| r.path.clone()).collect();
        prop_assert_eq!(everything, all_paths);
    }
}
