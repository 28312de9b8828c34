//! Reconciliation between the canonical source and target mirrors
//!
//! This module provides:
//! - **sync**: create missing links and replace wrong ones
//! - **clean**: remove links that point into the canonical source
//! - **status**: classify every (item, target) pair without side effects
//! - **record**: item discovery and per-pair link records
//! - **report**: outcome and report types shared by sync and clean

mod engine;
mod record;
mod report;
mod status;

pub use engine::{SyncEngine, SyncOptions};
pub use record::{Item, LinkRecord, discover_items};
pub use report::{
    ALREADY_LINKED, Action, NOT_A_SYMLINK, Operation, Outcome, POINTS_ELSEWHERE,
    REAL_ENTRY_PRESERVED, SyncReport,
};
pub use status::{StatusReport, TargetStatus};
