//! # reclaim CLI
//!
//! Finds build and dependency cache directories beneath a root and deletes
//! the ones you select.
//!
//! ## Commands
//!
//! - **scan**: List cache directories and the ancestor directories that
//!   select them in bulk
//! - **clean**: Delete selected cache directories and report reclaimed space
//!
//! ## Environment Variables
//!
//! - `RECLAIM_MAX_DEPTH`: Deepest level at which cache directories are found
//!   (default: 5)
//! - `RECLAIM_CACHE_NAMES`: Extra cache directory names, comma-separated
//! - `RECLAIM_VERBOSE`: Enable verbose output
//! - `RECLAIM_QUIET`: Silence all output except errors and results
//! - `RECLAIM_ALL`, `RECLAIM_DRY_RUN`: Defaults for `clean --all` and
//!   `clean --dry-run`

use std::io::IsTerminal;

use reclaim::cli::Cli;

fn main() -> miette::Result<()> {
    miette::set_panic_hook();

    // Plain output when stderr is piped or captured
    if std::io::stderr().is_terminal() {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::unicode_nocolor())
                    .with_context_lines(3),
            )
        }))?;
    } else {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::none())
                    .with_context_lines(0),
            )
        }))?;
    }

    let cli = Cli::parse_args();

    reclaim::commands::execute(&cli).map_err(Into::into)
}
