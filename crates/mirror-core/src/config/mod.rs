//! Project configuration
//!
//! Configuration comes from two layers, later overriding earlier:
//!
//! 1. **Built-in defaults** - source `.agents/skills` and the targets in
//!    [`BUILTIN_TARGETS`]
//! 2. **Project file** - `skill-mirror.toml` at the project root
//!
//! The result is a [`ProjectConfig`]: plain values that are passed into the
//! engine. Nothing here is global.
//!
//! # Example
//!
//! ```ignore
//! use mirror_core::config::ProjectConfig;
//!
//! let config = ProjectConfig::load(project_root)?;
//! let targets = config.select_targets(&["claude".to_string()])?;
//! ```

mod manifest;
mod target;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub use manifest::{Manifest, TargetSection};
pub use target::{BUILTIN_TARGETS, Target, builtin_targets};

use crate::{Error, Result};

/// Name of the project configuration file
pub const CONFIG_FILE: &str = "skill-mirror.toml";

/// Default canonical source subpath
pub const DEFAULT_SOURCE: &str = ".agents/skills";

/// Resolved configuration for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Canonical source subpath relative to the project root
    pub source: PathBuf,
    /// Enabled targets in name order
    pub targets: Vec<Target>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            targets: builtin_targets(),
        }
    }
}

impl ProjectConfig {
    /// Load configuration for the project at `root`.
    ///
    /// A missing config file is not an error; the defaults apply.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        match Manifest::load(&path)? {
            Some(manifest) => {
                tracing::debug!(path = %path.display(), "Loaded project config");
                Self::from_manifest(&manifest)
            }
            None => {
                tracing::debug!(path = %path.display(), "No project config, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Layer a manifest over the built-in defaults.
    pub fn from_manifest(manifest: &Manifest) -> Result<Self> {
        let mut merged = Self::default_manifest();
        merged.merge(manifest);

        let source = PathBuf::from(merged.source.as_deref().unwrap_or(DEFAULT_SOURCE));
        if source.as_os_str().is_empty() || source.is_absolute() || source.has_root() {
            return Err(Error::InvalidSource {
                path: source,
                message: "must be a non-empty path relative to the project root".to_string(),
            });
        }

        let mut targets = Vec::new();
        for (name, section) in &merged.targets {
            if !section.enabled {
                tracing::debug!(target_name = %name, "Target disabled by config");
                continue;
            }
            let path = section.path.as_deref().ok_or_else(|| Error::InvalidTarget {
                name: name.clone(),
                message: "missing 'path'".to_string(),
            })?;
            let target = Target::new(name.clone(), path)?;

            let mirror = mirror_fs::normalize(&target.mirror);
            if mirror.starts_with(mirror_fs::normalize(&source)) {
                return Err(Error::InvalidTarget {
                    name: name.clone(),
                    message: "path must not be inside the canonical source".to_string(),
                });
            }
            targets.push(target);
        }

        Ok(Self { source, targets })
    }

    /// The built-in defaults expressed as a manifest.
    ///
    /// This is also what `init` writes to a fresh skill-mirror.toml.
    pub fn default_manifest() -> Manifest {
        Manifest {
            source: Some(DEFAULT_SOURCE.to_string()),
            targets: BUILTIN_TARGETS
                .iter()
                .map(|(name, path)| ((*name).to_string(), TargetSection::at(*path)))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    /// Names of all configured targets
    pub fn target_names(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.name.as_str()).collect()
    }

    /// Resolve a selection of target names.
    ///
    /// An empty selection means every configured target. Duplicates are
    /// dropped; the order of first mention is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTarget`] for a name that is not configured.
    pub fn select_targets(&self, names: &[String]) -> Result<Vec<Target>> {
        if names.is_empty() {
            return Ok(self.targets.clone());
        }

        let mut selected: Vec<Target> = Vec::new();
        for name in names {
            let target = self
                .targets
                .iter()
                .find(|t| &t.name == name)
                .ok_or_else(|| Error::UnknownTarget {
                    name: name.clone(),
                    available: self.target_names().join(", "),
                })?;
            if !selected.iter().any(|t| t.name == target.name) {
                selected.push(target.clone());
            }
        }
        Ok(selected)
    }
}
