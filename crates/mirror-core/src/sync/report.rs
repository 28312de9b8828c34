//! Report types for sync and clean
//!
//! Both operations produce the same [`SyncReport`]; the [`Action`] tag on
//! each [`Outcome`] says whether an entry was created, removed, skipped or
//! failed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Skip reason: the link already stores the expected destination
pub const ALREADY_LINKED: &str = "already linked";
/// Skip reason: sync found a real file or directory at the link location
pub const REAL_ENTRY_PRESERVED: &str = "real entry exists, preserving";
/// Skip reason: clean found an entry that is not a symlink
pub const NOT_A_SYMLINK: &str = "not a symlink, preserving";
/// Skip reason: clean found a symlink resolving outside the canonical source
pub const POINTS_ELSEWHERE: &str = "points elsewhere, preserving";

/// Which engine operation produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Sync,
    Clean,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync => f.write_str("sync"),
            Self::Clean => f.write_str("clean"),
        }
    }
}

/// What happened to one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Created,
    Removed,
    Skipped,
    Failed,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "created",
            Self::Removed => "removed",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Result of acting on one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub item: String,
    pub target: String,
    pub action: Action,
    /// Present for skipped and failed outcomes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Outcome {
    pub fn created(item: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(item, target, Action::Created, None)
    }

    pub fn removed(item: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(item, target, Action::Removed, None)
    }

    pub fn skipped(
        item: impl Into<String>,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(item, target, Action::Skipped, Some(reason.into()))
    }

    pub fn failed(
        item: impl Into<String>,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::new(item, target, Action::Failed, Some(reason.into()))
    }

    fn new(
        item: impl Into<String>,
        target: impl Into<String>,
        action: Action,
        reason: Option<String>,
    ) -> Self {
        Self {
            item: item.into(),
            target: target.into(),
            action,
            reason,
        }
    }
}

/// Report from a sync or clean operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub operation: Operation,
    /// Whether mutations were suppressed
    pub dry_run: bool,
    /// Created (sync) or removed (clean) entries
    pub changed: Vec<Outcome>,
    pub skipped: Vec<Outcome>,
    pub failed: Vec<Outcome>,
}

impl SyncReport {
    /// Create an empty report
    pub fn new(operation: Operation, dry_run: bool) -> Self {
        Self {
            operation,
            dry_run,
            changed: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// File an outcome under the list its action belongs to
    pub fn record(&mut self, outcome: Outcome) {
        match outcome.action {
            Action::Created | Action::Removed => self.changed.push(outcome),
            Action::Skipped => self.skipped.push(outcome),
            Action::Failed => self.failed.push(outcome),
        }
    }

    /// True when no entry failed
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// True when nothing was (or would be) changed and nothing failed
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty() && self.failed.is_empty()
    }

    /// Every outcome, changed first, then skipped, then failed
    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.changed
            .iter()
            .chain(self.skipped.iter())
            .chain(self.failed.iter())
    }

    /// Item names of changed outcomes for one target, in report order
    pub fn changed_items(&self, target: &str) -> Vec<&str> {
        self.changed
            .iter()
            .filter(|o| o.target == target)
            .map(|o| o.item.as_str())
            .collect()
    }

    /// Item names of skipped outcomes for one target, in report order
    pub fn skipped_items(&self, target: &str) -> Vec<&str> {
        self.skipped
            .iter()
            .filter(|o| o.target == target)
            .map(|o| o.item.as_str())
            .collect()
    }
}
