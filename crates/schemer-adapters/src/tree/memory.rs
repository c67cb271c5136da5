//! In-memory project tree.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, instrument};
use walkdir::WalkDir;

use schemer_core::{
    application::{ApplicationError, ports::ProjectTree},
    domain::{ChangeSet, name},
    error::SchemerResult,
};

use crate::error::AdapterError;

/// Directories never copied into a snapshot.
pub const IGNORED_DIRS: &[&str] = &[".git", "node_modules", "target", "dist"];

/// Project tree held entirely in memory.
///
/// Keys are normalized absolute paths (`/src/app/a.ts`). Directories are
/// implicit: a directory exists while some file lives under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTree {
    files: BTreeMap<String, String>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: &str, content: impl Into<String>) {
        self.files.insert(name::normalize(path), content.into());
    }

    /// Content at `path`, if any.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(&name::normalize(path)).map(String::as_str)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Snapshot every UTF-8 file under `root`.
    ///
    /// Paths are keyed relative to `root`, so `root/angular.json` becomes
    /// `/angular.json`. Binary files and [`IGNORED_DIRS`] are skipped.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn load_dir(root: &Path) -> SchemerResult<Self> {
        if !root.is_dir() {
            return Err(AdapterError::NotADirectory {
                path: root.to_path_buf(),
            }
            .into_tree_error());
        }

        let mut tree = Self::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !(e.file_type().is_dir()
                        && IGNORED_DIRS.iter().any(|dir| e.file_name() == *dir))
            });

        for entry in walker {
            let entry = entry
                .map_err(|source| {
                    AdapterError::Walk {
                        root: root.to_path_buf(),
                        source,
                    }
                    .into_tree_error()
                })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let content = match fs::read_to_string(entry.path()) {
                Ok(content) => content,
                Err(e) => match AdapterError::io(entry.path(), "read", e) {
                    AdapterError::NotUtf8 { path } => {
                        debug!(path = %path.display(), "Skipping non UTF-8 file");
                        continue;
                    }
                    other => return Err(other.into_tree_error()),
                },
            };

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            tree.insert(&tree_path(relative), content);
        }

        debug!(files = tree.len(), "Workspace snapshot loaded");
        Ok(tree)
    }

    /// First path in `changes` that cannot be written, with the reason.
    fn check(&self, changes: &ChangeSet) -> Option<(String, String)> {
        let is_file = |path: &str| self.files.contains_key(path) || changes.contains(path);

        for path in changes.paths() {
            if path == "/" {
                return Some((path.to_string(), "cannot write to the tree root".into()));
            }
            if self.files.keys().any(|existing| is_under(existing, path)) {
                return Some((path.to_string(), "a directory exists at this path".into()));
            }
            let mut parent = name::dirname(path);
            while parent != "/" && !parent.is_empty() {
                if is_file(parent) {
                    return Some((path.to_string(), format!("parent {parent} is a file")));
                }
                parent = name::dirname(parent);
            }
        }
        None
    }
}

impl ProjectTree for MemoryTree {
    fn read(&self, path: &str) -> SchemerResult<Option<String>> {
        Ok(self.get(path).map(str::to_string))
    }

    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(&name::normalize(path))
    }

    fn apply(&mut self, changes: ChangeSet) -> SchemerResult<()> {
        if let Some((path, reason)) = self.check(&changes) {
            return Err(ApplicationError::TreeError { path, reason }.into());
        }
        self.files.extend(changes);
        Ok(())
    }
}

/// `/`-joined absolute tree path for a relative filesystem path.
fn tree_path(relative: &Path) -> String {
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    name::normalize(&joined)
}

fn is_under(path: &str, dir: &str) -> bool {
    path.strip_prefix(dir)
        .is_some_and(|rest| rest.starts_with(name::SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes(files: &[(&str, &str)]) -> ChangeSet {
        let mut set = ChangeSet::new();
        for (path, content) in files {
            set.insert(path, *content);
        }
        set
    }

    #[test]
    fn paths_are_normalized() {
        let tree = MemoryTree::new().with_file("src//app/./a.ts", "a");
        assert_eq!(tree.paths().collect::<Vec<_>>(), vec!["/src/app/a.ts"]);
        assert!(tree.exists("src/app/a.ts"));
        assert_eq!(tree.read("/src/app/a.ts").unwrap().as_deref(), Some("a"));
        assert_eq!(tree.read("/missing").unwrap(), None);
    }

    #[test]
    fn apply_creates_and_replaces() {
        let mut tree = MemoryTree::new().with_file("/a.ts", "old");
        tree.apply(changes(&[("/a.ts", "new"), ("/b/c.ts", "c")]))
            .unwrap();
        assert_eq!(tree.get("/a.ts"), Some("new"));
        assert_eq!(tree.get("/b/c.ts"), Some("c"));
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let original = MemoryTree::new().with_file("/src/app", "i am a file");
        let mut tree = original.clone();

        let err = tree
            .apply(changes(&[
                ("/ok.ts", "fine"),
                ("/src/app/widget/widget.ts", "blocked"),
            ]))
            .unwrap_err();
        assert!(err.to_string().contains("parent /src/app is a file"));
        assert_eq!(tree, original);
    }

    #[test]
    fn apply_rejects_file_over_directory() {
        let mut tree = MemoryTree::new().with_file("/src/app/a.ts", "a");
        assert!(tree.apply(changes(&[("/src/app", "x")])).is_err());
    }

    #[test]
    fn sibling_prefix_is_not_a_directory() {
        let mut tree = MemoryTree::new().with_file("/src/application.ts", "a");
        tree.apply(changes(&[("/src/app", "x")])).unwrap();
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn load_dir_snapshots_text_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("angular.json"), "{}").unwrap();
        fs::create_dir_all(dir.path().join("src/app")).unwrap();
        fs::write(dir.path().join("src/app/app.ts"), "app").unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        fs::write(dir.path().join("node_modules/pkg/index.js"), "skip").unwrap();
        fs::write(dir.path().join("logo.png"), [0xff, 0xfe, 0x00]).unwrap();

        let tree = MemoryTree::load_dir(dir.path()).unwrap();
        assert_eq!(
            tree.paths().collect::<Vec<_>>(),
            vec!["/angular.json", "/src/app/app.ts"]
        );
    }

    #[test]
    fn load_dir_requires_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MemoryTree::load_dir(&dir.path().join("missing")).is_err());
    }
}
