//! Rendered output and merge policy.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::name;

/// Absolute tree path → file content, produced by a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSet {
    files: BTreeMap<String, String>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file; the path is normalized.
    pub fn insert(&mut self, path: impl AsRef<str>, content: impl Into<String>) {
        self.files
            .insert(name::normalize(path.as_ref()), content.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(&name::normalize(path)).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(&name::normalize(path))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Split paths into those that would be created and those that would
    /// replace an existing entry.
    pub fn classify<F>(&self, exists: F) -> MergeReport
    where
        F: Fn(&str) -> bool,
    {
        let mut report = MergeReport::default();
        for path in self.paths() {
            if exists(path) {
                report.overwritten.push(path.to_string());
            } else {
                report.created.push(path.to_string());
            }
        }
        report
    }
}

impl IntoIterator for ChangeSet {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

/// What to do when a produced path already exists in the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Replace the existing file and report it.
    #[default]
    Overwrite,
    /// Refuse the whole merge.
    Error,
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite => write!(f, "overwrite"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Outcome of a merge, sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub created: Vec<String>,
    pub overwritten: Vec<String>,
}

impl MergeReport {
    pub fn total(&self) -> usize {
        self.created.len() + self.overwritten.len()
    }

    pub fn has_conflicts(&self) -> bool {
        !self.overwritten.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_normalizes_paths() {
        let mut changes = ChangeSet::new();
        changes.insert("src//app/./a.ts", "a");
        assert!(changes.contains("/src/app/a.ts"));
        assert_eq!(changes.get("src/app/a.ts"), Some("a"));
    }

    #[test]
    fn later_insert_replaces_earlier() {
        let mut changes = ChangeSet::new();
        changes.insert("/a", "1");
        changes.insert("/a", "2");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes.get("/a"), Some("2"));
    }

    #[test]
    fn classify_splits_created_and_overwritten() {
        let mut changes = ChangeSet::new();
        changes.insert("/b", "");
        changes.insert("/a", "");
        let report = changes.classify(|p| p == "/b");

        assert_eq!(report.created, vec!["/a"]);
        assert_eq!(report.overwritten, vec!["/b"]);
        assert!(report.has_conflicts());
        assert_eq!(report.total(), 2);
    }

    #[test]
    fn default_strategy_is_overwrite() {
        assert_eq!(MergeStrategy::default(), MergeStrategy::Overwrite);
        assert_eq!(MergeStrategy::Error.to_string(), "error");
    }
}
