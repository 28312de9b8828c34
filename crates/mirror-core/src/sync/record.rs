//! Items and link records
//!
//! A [`LinkRecord`] is derived fresh from the filesystem every time it is
//! needed. Sync and status both classify pairs through [`LinkRecord::inspect`]
//! so the two can never disagree about a pair's state.

use std::path::PathBuf;

use mirror_fs::{LinkState, MirrorLayout};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::config::Target;

/// A named unit discovered as a subdirectory of the canonical source root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Discover the items under the layout's source root, in name order.
pub fn discover_items(layout: &MirrorLayout) -> Result<Vec<Item>> {
    let names = mirror_fs::list_subdirectories(layout.source_root())?;
    Ok(names.into_iter().map(Item::new).collect())
}

/// The observed state of one (item, target) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub item: String,
    pub target: String,
    /// Absolute path of the item under the source root
    pub source_path: PathBuf,
    /// Where the link for this item is expected
    pub link_path: PathBuf,
    /// The text a correct link stores
    pub expected_destination: PathBuf,
    pub state: LinkState,
    /// Text stored by an existing symlink
    pub observed_destination: Option<PathBuf>,
}

/// Paths for a pair, before anything is read from disk.
#[derive(Debug, Clone)]
pub(crate) struct PairPaths {
    pub source_path: PathBuf,
    pub link_path: PathBuf,
    pub expected_destination: PathBuf,
}

impl PairPaths {
    pub(crate) fn resolve(layout: &MirrorLayout, item: &Item, target: &Target) -> Result<Self> {
        Ok(Self {
            source_path: layout.source_path(&item.name)?,
            link_path: layout.link_path(&target.mirror, &item.name)?,
            expected_destination: layout.link_destination(&target.mirror, &item.name)?,
        })
    }
}

impl LinkRecord {
    /// Classify one (item, target) pair.
    ///
    /// # Errors
    ///
    /// Fails when the link location's metadata cannot be read; callers turn
    /// this into a pair-local failure.
    pub fn inspect(layout: &MirrorLayout, item: &Item, target: &Target) -> Result<Self> {
        let paths = PairPaths::resolve(layout, item, target)?;
        Self::from_paths(item, target, paths)
    }

    pub(crate) fn from_paths(item: &Item, target: &Target, paths: PairPaths) -> Result<Self> {
        let inspection = mirror_fs::inspect_link(&paths.link_path, &paths.expected_destination)?;
        Ok(Self {
            item: item.name.clone(),
            target: target.name.clone(),
            source_path: paths.source_path,
            link_path: paths.link_path,
            expected_destination: paths.expected_destination,
            state: inspection.state,
            observed_destination: inspection.observed,
        })
    }
}
