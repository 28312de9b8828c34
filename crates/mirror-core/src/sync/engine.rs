//! SyncEngine implementation
//!
//! The SyncEngine reconciles the canonical source directory against each
//! target's mirror root. Every invocation re-reads the filesystem; nothing
//! is cached between calls.

use std::path::Path;

use mirror_fs::{DirEntry, LinkState, MirrorLayout};

use crate::config::{ProjectConfig, Target};
use crate::{Error, Result};

use super::record::{Item, LinkRecord, PairPaths, discover_items};
use super::report::{
    ALREADY_LINKED, NOT_A_SYMLINK, Operation, Outcome, POINTS_ELSEWHERE, REAL_ENTRY_PRESERVED,
    SyncReport,
};
use super::status::{StatusReport, TargetStatus};

/// Options for sync and clean operations
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// If true, compute the full report without modifying the filesystem.
    pub dry_run: bool,
}

impl SyncOptions {
    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }
}

/// Engine for reconciling mirrors against the canonical source
///
/// The SyncEngine provides three operations:
/// - **sync**: link every item into every target
/// - **clean**: remove links in the targets that point into the source
/// - **status**: report per-target link state without side effects
///
/// Failures of a single (item, target) pair never abort an operation; they
/// are recorded as failed outcomes. Only configuration problems, such as a
/// missing source directory, are returned as errors.
#[derive(Debug, Clone)]
pub struct SyncEngine {
    layout: MirrorLayout,
    targets: Vec<Target>,
}

impl SyncEngine {
    /// Create a new SyncEngine over an explicit layout and target list.
    pub fn new(layout: MirrorLayout, targets: Vec<Target>) -> Self {
        Self { layout, targets }
    }

    /// Create a SyncEngine for the project at `root` from its configuration.
    ///
    /// `selection` restricts the participating targets; empty means all.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown target name or an empty root.
    pub fn from_config(root: &Path, config: &ProjectConfig, selection: &[String]) -> Result<Self> {
        let layout = MirrorLayout::new(root, &config.source)?;
        let targets = config.select_targets(selection)?;
        Ok(Self::new(layout, targets))
    }

    /// The resolved project layout
    pub fn layout(&self) -> &MirrorLayout {
        &self.layout
    }

    /// The participating targets, in order
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Discover the canonical items.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceNotFound`] when the source root is missing.
    pub fn items(&self) -> Result<Vec<Item>> {
        self.require_source()?;
        discover_items(&self.layout)
    }

    /// Link every item into every target.
    ///
    /// For each pair: a correct link or a real entry is left alone, a wrong
    /// link is replaced, and a missing link is created. With
    /// `options.dry_run` the report describes what would happen.
    pub fn sync(&self, options: &SyncOptions) -> Result<SyncReport> {
        let items = self.items()?;
        let mut report = SyncReport::new(Operation::Sync, options.dry_run);

        tracing::info!(
            source = %self.layout.source_root().display(),
            items = items.len(),
            targets = self.targets.len(),
            dry_run = options.dry_run,
            "Starting sync"
        );

        for target in &self.targets {
            for item in &items {
                report.record(self.sync_pair(item, target, options.dry_run));
            }
        }

        Ok(report)
    }

    /// Remove every link inside the targets that resolves into the source.
    ///
    /// Driven by what is in each mirror root, not by the item list, so links
    /// to items deleted from the source are cleaned too. The source root does
    /// not need to exist.
    pub fn clean(&self, options: &SyncOptions) -> Result<SyncReport> {
        let mut report = SyncReport::new(Operation::Clean, options.dry_run);

        tracing::info!(
            source = %self.layout.source_root().display(),
            targets = self.targets.len(),
            dry_run = options.dry_run,
            "Starting clean"
        );

        for target in &self.targets {
            self.clean_target(target, options.dry_run, &mut report);
        }

        Ok(report)
    }

    /// Report which items are linked, unlinked or wrong in each target.
    pub fn status(&self) -> Result<StatusReport> {
        let items = self.items()?;
        let mut report = StatusReport {
            source_root: self.layout.source_root().to_path_buf(),
            items: items.iter().map(|i| i.name.clone()).collect(),
            targets: Vec::with_capacity(self.targets.len()),
        };

        for target in &self.targets {
            let mirror_root = self.layout.mirror_root(&target.mirror)?;
            let mut status = TargetStatus::new(target.name.clone(), mirror_root);

            for item in &items {
                match LinkRecord::inspect(&self.layout, item, target) {
                    Ok(record) => status.bucket(record.item, record.state),
                    Err(e) => {
                        tracing::warn!(item = %item.name, target_name = %target.name, error = %e, "Inspection failed");
                        status.errors.push(format!("{}: {}", item.name, e));
                    }
                }
            }
            report.targets.push(status);
        }

        Ok(report)
    }

    fn require_source(&self) -> Result<()> {
        let source_root = self.layout.source_root();
        match std::fs::metadata(source_root) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(Error::SourceNotDirectory {
                path: source_root.to_path_buf(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::SourceNotFound {
                path: source_root.to_path_buf(),
            }),
            Err(e) => Err(mirror_fs::Error::io(source_root, e).into()),
        }
    }

    fn sync_pair(&self, item: &Item, target: &Target, dry_run: bool) -> Outcome {
        let record = match PairPaths::resolve(&self.layout, item, target)
            .and_then(|paths| LinkRecord::from_paths(item, target, paths))
        {
            Ok(record) => record,
            Err(e) => return self.fail(item, target, e),
        };

        match record.state {
            LinkState::Correct => {
                tracing::debug!(item = %item.name, target_name = %target.name, "Already linked");
                Outcome::skipped(&item.name, &target.name, ALREADY_LINKED)
            }
            LinkState::RealEntry => {
                tracing::debug!(
                    item = %item.name,
                    target_name = %target.name,
                    path = %record.link_path.display(),
                    "Real entry at link location, preserving"
                );
                Outcome::skipped(&item.name, &target.name, REAL_ENTRY_PRESERVED)
            }
            LinkState::Incorrect => {
                if !dry_run {
                    if let Err(e) = mirror_fs::remove_link(&record.link_path) {
                        return self.fail(item, target, e);
                    }
                }
                tracing::info!(
                    item = %item.name,
                    target_name = %target.name,
                    observed = ?record.observed_destination,
                    dry_run,
                    "Replacing stale link"
                );
                self.create_link(&record, dry_run)
            }
            LinkState::Absent => self.create_link(&record, dry_run),
        }
    }

    fn create_link(&self, record: &LinkRecord, dry_run: bool) -> Outcome {
        if !dry_run {
            let created = match record.link_path.parent() {
                Some(mirror_root) => mirror_fs::ensure_dir(mirror_root),
                None => Ok(()),
            }
            .and_then(|()| {
                mirror_fs::create_dir_link(&record.expected_destination, &record.link_path)
            });

            if let Err(e) = created {
                tracing::warn!(item = %record.item, target_name = %record.target, error = %e, "Link creation failed");
                return Outcome::failed(&record.item, &record.target, e.to_string());
            }
        }

        tracing::info!(
            item = %record.item,
            target_name = %record.target,
            destination = %record.expected_destination.display(),
            dry_run,
            "Linked"
        );
        Outcome::created(&record.item, &record.target)
    }

    fn clean_target(&self, target: &Target, dry_run: bool, report: &mut SyncReport) {
        let entries = match self
            .layout
            .mirror_root(&target.mirror)
            .and_then(|root| mirror_fs::list_entries(&root))
        {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(target_name = %target.name, error = %e, "Cannot list mirror root");
                report.record(Outcome::failed(
                    target.mirror.display().to_string(),
                    &target.name,
                    e.to_string(),
                ));
                return;
            }
        };

        for entry in &entries {
            report.record(self.clean_entry(target, entry, dry_run));
        }
    }

    fn clean_entry(&self, target: &Target, entry: &DirEntry, dry_run: bool) -> Outcome {
        let stored = match mirror_fs::read_symlink(&entry.path) {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                tracing::debug!(entry = %entry.name, target_name = %target.name, "Not a symlink, preserving");
                return Outcome::skipped(&entry.name, &target.name, NOT_A_SYMLINK);
            }
            Err(e) => return Outcome::failed(&entry.name, &target.name, e.to_string()),
        };

        let resolved = mirror_fs::resolve_link_destination(&entry.path, &stored);
        if !mirror_fs::is_within(&resolved, self.layout.source_root()) {
            tracing::debug!(
                entry = %entry.name,
                target_name = %target.name,
                resolved = %resolved.display(),
                "Symlink points outside the source, preserving"
            );
            return Outcome::skipped(&entry.name, &target.name, POINTS_ELSEWHERE);
        }

        if !dry_run {
            if let Err(e) = mirror_fs::remove_link(&entry.path) {
                tracing::warn!(entry = %entry.name, target_name = %target.name, error = %e, "Link removal failed");
                return Outcome::failed(&entry.name, &target.name, e.to_string());
            }
        }

        tracing::info!(entry = %entry.name, target_name = %target.name, dry_run, "Unlinked");
        Outcome::removed(&entry.name, &target.name)
    }

    fn fail(&self, item: &Item, target: &Target, error: impl Into<Error>) -> Outcome {
        let error = error.into();
        tracing::warn!(item = %item.name, target_name = %target.name, error = %error, "Pair failed");
        Outcome::failed(&item.name, &target.name, error.to_string())
    }
}
