//! Project context detection
//!
//! Finds the project root from any directory, the way git finds its
//! repository, and loads the project configuration once for the command.

use std::path::{Path, PathBuf};

use mirror_core::{CONFIG_FILE, DEFAULT_SOURCE, ProjectConfig};

use crate::error::{CliError, Result};

/// How the project root was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    /// `--root` was given
    Explicit,
    /// `--global`: the home directory
    Home,
    /// Found by walking up from the current directory
    Detected,
    /// Nothing found; the current directory is used as-is
    CurrentDir,
}

/// Resolved project root plus its configuration
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub config: ProjectConfig,
    pub root_source: RootSource,
}

impl ProjectContext {
    /// Resolve the project root from CLI flags and load its configuration.
    pub fn resolve(root: Option<&Path>, global: bool) -> Result<Self> {
        let (path, root_source) = resolve_root(root, global)?;
        Self::load(&path, root_source)
    }

    /// Load the configuration of the project at `root`.
    pub fn load(root: &Path, root_source: RootSource) -> Result<Self> {
        let root = mirror_fs::canonical_root(root)?;
        let config = ProjectConfig::load(&root)?;
        tracing::debug!(root = %root.display(), ?root_source, "Resolved project root");
        Ok(Self {
            root,
            config,
            root_source,
        })
    }
}

/// Pick the project root from CLI flags without reading any configuration.
pub fn resolve_root(root: Option<&Path>, global: bool) -> Result<(PathBuf, RootSource)> {
    match (root, global) {
        (Some(root), _) => Ok((root.to_path_buf(), RootSource::Explicit)),
        (None, true) => dirs::home_dir()
            .map(|home| (home, RootSource::Home))
            .ok_or_else(|| CliError::user("Could not determine the home directory")),
        (None, false) => {
            let cwd = std::env::current_dir()?;
            Ok(match detect_root(&cwd) {
                Some(found) => (found, RootSource::Detected),
                None => (cwd, RootSource::CurrentDir),
            })
        }
    }
}

/// Walk up from `start` looking for a project marker.
///
/// The nearest directory holding `skill-mirror.toml` or the default
/// canonical source directory wins.
pub fn detect_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE).is_file() || dir.join(DEFAULT_SOURCE).is_dir())
        .map(Path::to_path_buf)
}
