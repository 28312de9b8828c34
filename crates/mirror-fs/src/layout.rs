//! Project layout: where canonical items live and where mirrors go
//!
//! A [`MirrorLayout`] pins down a project root and the canonical source
//! subpath beneath it. Given a target's mirror subpath it answers the three
//! questions a reconciliation needs for every item: where the source is,
//! where the link goes, and what text the link must store.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::path::{normalize, relative_path};
use crate::{Error, Result};

/// Resolved paths for a project's canonical source and its mirrors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorLayout {
    root: PathBuf,
    source_root: PathBuf,
}

impl MirrorLayout {
    /// Create a layout from a project root and the canonical source subpath.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] if either input is empty.
    pub fn new(root: impl AsRef<Path>, source: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let source = source.as_ref();
        if root.as_os_str().is_empty() {
            return Err(Error::EmptyPath {
                what: "Project root",
            });
        }
        if source.as_os_str().is_empty() {
            return Err(Error::EmptyPath {
                what: "Source path",
            });
        }

        let root = normalize(root);
        let source_root = normalize(root.join(source));
        Ok(Self { root, source_root })
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The canonical source root holding one directory per item.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Absolute path of a target's mirror root.
    pub fn mirror_root(&self, mirror: impl AsRef<Path>) -> Result<PathBuf> {
        let mirror = mirror.as_ref();
        if mirror.as_os_str().is_empty() {
            return Err(Error::EmptyPath {
                what: "Mirror path",
            });
        }
        Ok(normalize(self.root.join(mirror)))
    }

    /// Absolute path of an item under the canonical source root.
    pub fn source_path(&self, item: &str) -> Result<PathBuf> {
        validate_item_name(item)?;
        Ok(self.source_root.join(item))
    }

    /// Absolute path where the link for `item` is expected under a mirror.
    pub fn link_path(&self, mirror: impl AsRef<Path>, item: &str) -> Result<PathBuf> {
        validate_item_name(item)?;
        Ok(self.mirror_root(mirror)?.join(item))
    }

    /// The relative text a symlink at [`Self::link_path`] must store to
    /// reach [`Self::source_path`].
    pub fn link_destination(&self, mirror: impl AsRef<Path>, item: &str) -> Result<PathBuf> {
        let source = self.source_path(item)?;
        let mirror_root = self.mirror_root(mirror)?;
        Ok(relative_path(mirror_root, source))
    }
}

/// Item names are directory basenames: one normal path component.
fn validate_item_name(item: &str) -> Result<()> {
    if item.is_empty() {
        return Err(Error::EmptyPath { what: "Item name" });
    }
    let mut components = Path::new(item).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == OsStr::new(item) => Ok(()),
        _ => Err(Error::InvalidItemName {
            name: item.to_string(),
        }),
    }
}
