//! Directory name classification.
//!
//! Decides, from a directory's name alone, whether it is a cache directory
//! (reported and measured as an opaque unit), a version-control metadata
//! directory (never entered), or an ordinary directory (searched further).

/// Directory names treated as deletable build and dependency caches.
pub const CACHE_DIRECTORIES: &[&str] = &[
    // Dependency managers
    "node_modules",
    // Build output
    "dist",
    "build",
    ".next",
    ".nuxt",
    "target",
    "out",
    // Bundler and test caches
    ".cache",
    ".parcel-cache",
    ".webpack",
    "coverage",
    ".nyc_output",
    ".jest",
    // Temp and logs
    "tmp",
    "temp",
    ".tmp",
    ".temp",
    "logs",
];

/// Version-control metadata directories. Never entered, never reported.
pub const IGNORED_DIRECTORIES: &[&str] = &[".git", ".svn", ".hg", "CVS", ".bzr"];

/// What the scanner should do with a directory of a given name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// A cache directory: measure it and report it, but never descend into it
    Cache,
    /// Version-control metadata: skip entirely
    Ignored,
    /// Anything else: keep searching below it (depth permitting)
    Ordinary,
}

/// Classify a directory name against the built-in lists.
///
/// Matching is exact and case-sensitive: `Node_Modules` is ordinary.
pub fn classify(name: &str) -> Classification {
    if IGNORED_DIRECTORIES.contains(&name) {
        Classification::Ignored
    } else if CACHE_DIRECTORIES.contains(&name) {
        Classification::Cache
    } else {
        Classification::Ordinary
    }
}

/// Classifier with the built-in lists plus extra cache names supplied for a
/// single invocation.
///
/// Ignored names always win: `--cache-name .git` cannot make the scanner
/// enter or report version-control metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classifier {
    extra_cache_names: Vec<String>,
}

impl Classifier {
    /// Classifier that only knows the built-in lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add extra cache directory names. Empty names are dropped.
    pub fn with_cache_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !name.is_empty() && !self.extra_cache_names.contains(&name) {
                self.extra_cache_names.push(name);
            }
        }
        self
    }

    /// Extra cache names on top of [`CACHE_DIRECTORIES`].
    pub fn extra_cache_names(&self) -> &[String] {
        &self.extra_cache_names
    }

    pub fn classify(&self, name: &str) -> Classification {
        match classify(name) {
            Classification::Ordinary if self.extra_cache_names.iter().any(|n| n == name) => {
                Classification::Cache
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_cache_names() {
        for name in CACHE_DIRECTORIES {
            assert_eq!(classify(name), Classification::Cache, "{name}");
        }
    }

    #[test]
    fn test_builtin_ignored_names() {
        for name in IGNORED_DIRECTORIES {
            assert_eq!(classify(name), Classification::Ignored, "{name}");
        }
    }

    #[test]
    fn test_ordinary_names() {
        for name in ["src", "proj", "node_modules2", "targets", "", ".github"] {
            assert_eq!(classify(name), Classification::Ordinary, "{name}");
        }
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(classify("Node_Modules"), Classification::Ordinary);
        assert_eq!(classify("DIST"), Classification::Ordinary);
        assert_eq!(classify("cvs"), Classification::Ordinary);
        assert_eq!(classify("CVS"), Classification::Ignored);
    }

    #[test]
    fn test_extra_cache_names() {
        let classifier = Classifier::new().with_cache_names(["__pycache__", "", "__pycache__"]);
        assert_eq!(classifier.extra_cache_names(), ["__pycache__"]);
        assert_eq!(classifier.classify("__pycache__"), Classification::Cache);
        assert_eq!(classifier.classify("node_modules"), Classification::Cache);
        assert_eq!(classifier.classify("src"), Classification::Ordinary);
    }

    #[test]
    fn test_extra_names_cannot_override_ignored() {
        let classifier = Classifier::new().with_cache_names([".git"]);
        assert_eq!(classifier.classify(".git"), Classification::Ignored);
    }
}
