//! Directory names skipped during traversal.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fmt;

/// Folders left out unless `--no-default-excludes` is given.
pub const DEFAULT_EXCLUDES: &[&str] = &[".git", "__pycache__", "node_modules", "venv", "next"];

/// A set of directory base names.
///
/// Matching is exact and case-sensitive against the final path component
/// only; `node_modules` skips `a/node_modules` but not `a/node_modules2`.
/// Names keep the order they were added in so the summary line reads the
/// same way the user wrote them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in exclusion list.
    pub fn defaults() -> Self {
        DEFAULT_EXCLUDES.iter().copied().collect()
    }

    /// Add a name. Returns `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.lookup.contains(&name) {
            return false;
        }
        self.lookup.insert(name.clone());
        self.ordered.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains(name)
    }

    /// Like [`contains`](Self::contains) for raw file names. Names that are
    /// not valid UTF-8 never match.
    pub fn contains_os(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.contains(n))
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ExclusionSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

/// Comma-separated, as printed in the summary line.
impl fmt::Display for ExclusionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.ordered.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_declared_order() {
        let set = ExclusionSet::defaults();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![".git", "__pycache__", "node_modules", "venv", "next"]
        );
    }

    #[test]
    fn duplicates_are_dropped() {
        let set: ExclusionSet = ["venv", "target", "venv"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "venv, target");
    }

    #[test]
    fn matching_is_exact() {
        let set = ExclusionSet::defaults();
        assert!(set.contains("node_modules"));
        assert!(!set.contains("node_modules2"));
        assert!(!set.contains("Node_Modules"));
        assert!(!set.contains("a/node_modules"));
    }

    #[test]
    fn empty_set_displays_nothing() {
        assert_eq!(ExclusionSet::new().to_string(), "");
    }
}
