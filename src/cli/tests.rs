use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cli::{Cli, Commands, normalize_path};
use crate::scanner::DEFAULT_MAX_DEPTH;

#[test]
fn test_cli_parsing() {
    let cli = Cli::parse_from(["reclaim", "scan"]);
    assert!(matches!(cli.command(), Commands::Scan { root: None }));
    assert_eq!(cli.global_opts().max_depth(), DEFAULT_MAX_DEPTH);
    assert!(cli.global_opts().cache_names().is_empty());
    assert_eq!(cli.global_opts().verbose(), 0);
    assert!(!cli.global_opts().quiet());
}

#[test]
fn test_scan_with_root() {
    let cli = Cli::parse_from(["reclaim", "scan", "projects"]);
    match cli.command() {
        Commands::Scan { root } => assert_eq!(root.as_deref(), Some(Path::new("projects"))),
        _ => panic!("expected scan"),
    }
}

#[test]
fn test_verbose_flag() {
    let cli = Cli::parse_from(["reclaim", "-vv", "scan"]);
    assert_eq!(cli.global_opts().verbose(), 2);
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["reclaim", "-q", "-v", "scan"]).is_err());
}

#[test]
fn test_clean_arguments() {
    let cli = Cli::parse_from([
        "reclaim",
        "clean",
        "work",
        "--select",
        "app",
        "-s",
        "lib/node_modules",
        "--dry-run",
    ]);
    match cli.command() {
        Commands::Clean {
            root,
            select,
            all,
            dry_run,
        } => {
            assert_eq!(root.as_deref(), Some(Path::new("work")));
            assert_eq!(
                select,
                &[PathBuf::from("app"), PathBuf::from("lib/node_modules")]
            );
            assert!(!*all);
            assert!(*dry_run);
        }
        _ => panic!("expected clean"),
    }
}

#[test]
fn test_global_flag_positioning() {
    let cli = Cli::parse_from(["reclaim", "clean", "--all", "--max-depth", "3"]);
    assert_eq!(cli.global_opts().max_depth(), 3);
    assert!(matches!(cli.command(), Commands::Clean { all: true, .. }));
}

#[test]
fn test_max_depth_must_be_positive() {
    assert!(Cli::try_parse_from(["reclaim", "--max-depth", "0", "scan"]).is_err());
}

#[test]
fn test_cache_names_are_comma_separated() {
    let cli = Cli::parse_from(["reclaim", "--cache-name", "__pycache__,.venv", "scan"]);
    assert_eq!(cli.global_opts().cache_names(), ["__pycache__", ".venv"]);

    let scanner = cli.global_opts().scanner();
    assert_eq!(
        scanner.classifier().extra_cache_names(),
        ["__pycache__", ".venv"]
    );
    assert_eq!(scanner.max_depth(), DEFAULT_MAX_DEPTH);
}

#[test]
fn test_cli_builder() {
    let cli = Cli::builder()
        .max_depth(2)
        .cache_name(".venv")
        .verbose(2)
        .quiet(false)
        .command(Commands::Scan { root: None })
        .build()
        .expect("Failed to build CLI");

    assert_eq!(cli.global_opts().max_depth(), 2);
    assert_eq!(cli.global_opts().cache_names(), [".venv"]);
    assert_eq!(cli.global_opts().verbose(), 2);
    assert!(!cli.global_opts().quiet());
    assert!(matches!(cli.command(), Commands::Scan { .. }));
}

#[test]
fn test_cli_builder_requires_command() {
    assert!(Cli::builder().build().is_err());
    assert!(
        Cli::builder()
            .max_depth(0)
            .command(Commands::Scan { root: None })
            .build()
            .is_err()
    );
}

#[test]
fn test_normalize_path() {
    let base = if cfg!(windows) {
        PathBuf::from("C:\\work")
    } else {
        PathBuf::from("/work")
    };

    let normalized = normalize_path("./target/./debug", &base);
    assert!(normalized.is_absolute());
    assert_eq!(normalized, base.join("target").join("debug"));

    let normalized = normalize_path("target/../other/target", &base);
    assert_eq!(normalized, base.join("other").join("target"));

    let normalized = normalize_path("./a/b/../c/./d/../e", &base);
    assert!(normalized.ends_with("a/c/e"));

    let abs_path = base.join("elsewhere");
    assert_eq!(normalize_path(&abs_path, Path::new("/ignored")), abs_path);
}

#[cfg(unix)]
#[test]
fn test_normalize_path_stays_at_root() {
    assert_eq!(normalize_path("/../../a", Path::new("/")), PathBuf::from("/a"));
    assert_eq!(normalize_path("..", Path::new("/")), PathBuf::from("/"));
}
