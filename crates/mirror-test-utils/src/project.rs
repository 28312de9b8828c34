//! [`TestProject`] builder for skill-mirror test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Default canonical source subpath used by the fixtures.
pub const SOURCE: &str = ".agents/skills";

/// A temporary project directory with helpers for building a canonical
/// source, mirror roots and pre-existing entries.
///
/// # Example
///
/// ```rust,no_run
/// use mirror_test_utils::project::TestProject;
///
/// let project = TestProject::with_items(&["a", "b"]);
/// project.assert_real_dir(".agents/skills/a");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

/// Kind of entry captured by [`TestProject::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File(Vec<u8>),
    Symlink(PathBuf),
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project with no canonical source.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a project whose canonical source holds the given items.
    ///
    /// Each item directory gets a `SKILL.md` naming it.
    pub fn with_items(items: &[&str]) -> Self {
        let project = Self::new();
        project.create_dir(SOURCE);
        for item in items {
            project.create_item(item);
        }
        project
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` under the project root.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Add an item to the canonical source.
    pub fn create_item(&self, name: &str) {
        self.write_file(&format!("{SOURCE}/{name}/SKILL.md"), &format!("# {name}\n"));
    }

    /// Create a directory (and parents) at `rel`.
    pub fn create_dir(&self, rel: &str) {
        fs::create_dir_all(self.path(rel)).unwrap();
    }

    /// Write a file at `rel`, creating parent directories.
    pub fn write_file(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Create a symlink at `rel` storing `destination` verbatim.
    #[cfg(unix)]
    pub fn symlink(&self, rel: &str, destination: impl AsRef<Path>) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        std::os::unix::fs::symlink(destination, path).unwrap();
    }

    /// Literal destination stored by the symlink at `rel`.
    pub fn read_link(&self, rel: &str) -> PathBuf {
        fs::read_link(self.path(rel))
            .unwrap_or_else(|e| panic!("Expected a symlink at {}: {}", rel, e))
    }

    /// Whether anything (including a dangling symlink) exists at `rel`.
    pub fn entry_exists(&self, rel: &str) -> bool {
        fs::symlink_metadata(self.path(rel)).is_ok()
    }

    /// Assert that `rel` is a symlink storing exactly `destination`.
    pub fn assert_symlink(&self, rel: &str, destination: &str) {
        let stored = self.read_link(rel);
        assert_eq!(
            stored,
            PathBuf::from(destination),
            "Symlink {} stores {}, expected {}",
            rel,
            stored.display(),
            destination
        );
    }

    /// Assert that `rel` is a real directory, not a symlink.
    pub fn assert_real_dir(&self, rel: &str) {
        let metadata = fs::symlink_metadata(self.path(rel))
            .unwrap_or_else(|e| panic!("Expected a directory at {}: {}", rel, e));
        assert!(
            metadata.is_dir() && !metadata.file_type().is_symlink(),
            "Expected a real directory at {}",
            rel
        );
    }

    /// Assert that nothing exists at `rel`, not even a dangling symlink.
    pub fn assert_missing(&self, rel: &str) {
        assert!(!self.entry_exists(rel), "Expected nothing at {}", rel);
    }

    /// Assert that the file at `rel` contains `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let file_content = fs::read_to_string(self.path(rel))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", rel, e));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            rel,
            content,
            file_content
        );
    }

    /// Capture every entry under the project root without following links.
    ///
    /// Two equal snapshots mean the tree is byte-identical: same entries,
    /// same file contents, same stored link text.
    pub fn snapshot(&self) -> Vec<(PathBuf, EntryKind)> {
        WalkDir::new(self.root())
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| {
                let entry = entry.unwrap();
                let rel = entry.path().strip_prefix(self.root()).unwrap().to_path_buf();
                let file_type = entry.file_type();
                let kind = if file_type.is_symlink() {
                    EntryKind::Symlink(fs::read_link(entry.path()).unwrap())
                } else if file_type.is_dir() {
                    EntryKind::Dir
                } else {
                    EntryKind::File(fs::read(entry.path()).unwrap())
                };
                (rel, kind)
            })
            .collect()
    }
}
