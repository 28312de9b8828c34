//! Manifest parsing for skill-mirror.toml
//!
//! The manifest is the raw, optional project configuration. It only records
//! what the user wrote; [`super::ProjectConfig`] layers it over the built-in
//! defaults.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

fn default_enabled() -> bool {
    true
}

fn is_enabled(enabled: &bool) -> bool {
    *enabled
}

/// One `[targets.<name>]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSection {
    /// Mirror root relative to the project root. Built-in targets may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Set to false to drop a target, including a built-in one
    #[serde(default = "default_enabled", skip_serializing_if = "is_enabled")]
    pub enabled: bool,
}

impl TargetSection {
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            enabled: true,
        }
    }
}

/// Project configuration parsed from skill-mirror.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Canonical source subpath relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Target overrides and additions keyed by target name
    #[serde(default)]
    pub targets: BTreeMap<String, TargetSection>,
}

impl Manifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use mirror_core::config::Manifest;
    ///
    /// let manifest = Manifest::parse(r#"
    /// source = "skills"
    ///
    /// [targets.claude]
    /// path = ".claude/skills"
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.source.as_deref(), Some("skills"));
    /// assert!(manifest.targets.contains_key("claude"));
    /// ```
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a manifest from `path`, or `None` if the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(mirror_fs::Error::io(path, e).into()),
        };

        Self::parse(&content)
            .map(Some)
            .map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    /// Render the manifest as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Merge another manifest into this one
    ///
    /// `other` wins for the source path and for every field it sets on a
    /// target. A target section without a `path` keeps the base path.
    pub fn merge(&mut self, other: &Manifest) {
        if other.source.is_some() {
            self.source = other.source.clone();
        }
        for (name, section) in &other.targets {
            match self.targets.get_mut(name) {
                Some(base) => {
                    if section.path.is_some() {
                        base.path = section.path.clone();
                    }
                    base.enabled = section.enabled;
                }
                None => {
                    self.targets.insert(name.clone(), section.clone());
                }
            }
        }
    }
}
