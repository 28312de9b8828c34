//! Status report types
//!
//! Provides the per-target view of which items are linked, unlinked or
//! wrong, as seen by the same classification sync acts on.

use std::path::PathBuf;

use mirror_fs::LinkState;
use serde::{Deserialize, Serialize};

/// Status of one target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetStatus {
    pub target: String,
    /// Absolute mirror root of the target
    pub mirror_root: PathBuf,
    /// Items with a correct link or a real entry
    pub linked: Vec<String>,
    /// Items with nothing at the link location
    pub unlinked: Vec<String>,
    /// Items with a symlink storing the wrong destination
    pub wrong: Vec<String>,
    /// Items whose link location could not be inspected
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl TargetStatus {
    pub fn new(target: impl Into<String>, mirror_root: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            mirror_root: mirror_root.into(),
            ..Self::default()
        }
    }

    /// Put an item in the bucket its state belongs to
    pub fn bucket(&mut self, item: impl Into<String>, state: LinkState) {
        let item = item.into();
        match state {
            LinkState::Correct | LinkState::RealEntry => self.linked.push(item),
            LinkState::Absent => self.unlinked.push(item),
            LinkState::Incorrect => self.wrong.push(item),
        }
    }

    /// True when every item is linked
    pub fn is_complete(&self) -> bool {
        self.unlinked.is_empty() && self.wrong.is_empty() && self.errors.is_empty()
    }
}

/// Status across all selected targets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Absolute canonical source root
    pub source_root: PathBuf,
    /// Discovered items in discovery order
    pub items: Vec<String>,
    pub targets: Vec<TargetStatus>,
}

impl StatusReport {
    /// True when every target has every item linked
    pub fn is_in_sync(&self) -> bool {
        self.targets.iter().all(TargetStatus::is_complete)
    }

    /// Look up the status of one target
    pub fn target(&self, name: &str) -> Option<&TargetStatus> {
        self.targets.iter().find(|t| t.target == name)
    }
}
