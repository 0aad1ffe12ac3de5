// src/watch/exclude.rs

use std::fmt;
use std::path::{Path, PathBuf};

/// Ordered set of excluded path prefixes.
///
/// Matching is a literal string prefix test on the path, not a glob and
/// not aware of path segments: `/a/b` excludes both `/a/b/c` and `/a/bc`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ExcludeSet {
    prefixes: Vec<String>,
}

impl ExcludeSet {
    pub fn new<I, P>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let prefixes = prefixes
            .into_iter()
            .map(|p| p.as_ref().to_string_lossy().into_owned())
            .collect();
        Self { prefixes }
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }
}

impl From<&[PathBuf]> for ExcludeSet {
    fn from(paths: &[PathBuf]) -> Self {
        ExcludeSet::new(paths)
    }
}

impl fmt::Debug for ExcludeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.prefixes.iter()).finish()
    }
}

impl fmt::Display for ExcludeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefixes.join(", "))
    }
}
