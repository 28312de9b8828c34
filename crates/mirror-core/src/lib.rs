//! Reconciliation engine for skill-mirror
//!
//! This crate links a canonical directory of named items into any number of
//! target mirror roots, implementing:
//!
//! - **Configuration**: built-in targets layered with `skill-mirror.toml`
//! - **SyncEngine**: sync, clean and status over explicit inputs
//! - **Reports**: structured per-pair outcomes for the presentation layer
//!
//! # Architecture
//!
//! ```text
//!        mirror-cli
//!            |
//!       mirror-core
//!            |
//!        mirror-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use mirror_core::{ProjectConfig, SyncEngine, SyncOptions};
//! use std::path::Path;
//!
//! fn example() -> mirror_core::Result<()> {
//!     let root = Path::new("/path/to/project");
//!     let config = ProjectConfig::load(root)?;
//!     let engine = SyncEngine::from_config(root, &config, &[])?;
//!     let report = engine.sync(&SyncOptions::dry_run())?;
//!     println!("{} links would be created", report.changed.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod sync;

pub use config::{CONFIG_FILE, DEFAULT_SOURCE, Manifest, ProjectConfig, Target};
pub use error::{Error, Result};
pub use sync::{
    Action, Item, LinkRecord, Operation, Outcome, StatusReport, SyncEngine, SyncOptions,
    SyncReport, TargetStatus,
};
