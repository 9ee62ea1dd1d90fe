use std::fmt::Display;

/// Verbosity-gated console output.
///
/// Progress and diagnostics go to stderr and are silenced by `--quiet`.
/// Results (the cache listing, the reclaimed-space summary) go to stdout and
/// are always printed, so `reclaim scan -q > caches.txt` still captures them.
#[derive(Clone, Copy, Debug)]
pub struct Logger {
    verbose: u8,
    quiet: bool,
}

impl Logger {
    pub fn new(verbose: u8, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    pub fn info(&self, message: impl Display) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    pub fn verbose(&self, level: u8, message: impl Display) {
        if !self.quiet && self.verbose >= level {
            eprintln!("{message}");
        }
    }

    /// Printed even in quiet mode: these report operations that failed.
    pub fn warn(&self, message: impl Display) {
        eprintln!("Warning: {message}");
    }

    pub fn result(&self, message: impl Display) {
        println!("{message}");
    }
}
