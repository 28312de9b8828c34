//! Targets and the built-in target registry

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A named consumer location that mirrors the canonical items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    /// Logical identifier (e.g., "claude")
    pub name: String,
    /// Mirror root relative to the project root
    pub mirror: PathBuf,
}

impl Target {
    /// Create a target, checking that the mirror root stays inside the
    /// project root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTarget`] for an empty name, or a mirror path
    /// that is empty, absolute, or climbs out with `..`.
    pub fn new(name: impl Into<String>, mirror: impl Into<PathBuf>) -> Result<Self> {
        let name = name.into();
        let mirror = mirror.into();

        let invalid = |message: &str| Error::InvalidTarget {
            name: name.clone(),
            message: message.to_string(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if mirror.as_os_str().is_empty() {
            return Err(invalid("path must not be empty"));
        }
        if mirror.has_root() || mirror.is_absolute() {
            return Err(invalid("path must be relative to the project root"));
        }
        if !stays_below(&mirror) {
            return Err(invalid("path must point below the project root"));
        }

        Ok(Self { name, mirror })
    }
}

/// Whether a relative path ends strictly below its starting directory
/// without ever climbing above it.
fn stays_below(path: &Path) -> bool {
    let mut depth: usize = 0;
    for component in path.components() {
        match component {
            Component::ParentDir => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            Component::Normal(_) => depth += 1,
            _ => {}
        }
    }
    depth > 0
}

/// Built-in targets: (name, mirror root).
///
/// This is the default registry used when skill-mirror.toml does not
/// override it.
pub const BUILTIN_TARGETS: &[(&str, &str)] = &[
    ("claude", ".claude/skills"),
    ("codex", ".codex/skills"),
    ("copilot", ".github/skills"),
    ("cursor", ".cursor/skills"),
    ("gemini", ".gemini/skills"),
    ("opencode", ".opencode/skills"),
];

/// Returns the built-in targets in name order.
pub fn builtin_targets() -> Vec<Target> {
    BUILTIN_TARGETS
        .iter()
        .map(|(name, mirror)| Target {
            name: (*name).to_string(),
            mirror: PathBuf::from(mirror),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_valid_and_sorted() {
        let targets = builtin_targets();
        assert_eq!(targets.len(), BUILTIN_TARGETS.len());
        for target in &targets {
            Target::new(target.name.clone(), target.mirror.clone()).unwrap();
        }
        let mut names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
        let unsorted = names.clone();
        names.sort();
        assert_eq!(names, unsorted);
    }

    #[test]
    fn test_rejects_escaping_paths() {
        assert!(Target::new("x", "../outside").is_err());
        assert!(Target::new("x", "a/../../outside").is_err());
        assert!(Target::new("x", "/abs/skills").is_err());
        assert!(Target::new("x", "").is_err());
        assert!(Target::new(" ", "skills").is_err());
    }

    #[test]
    fn test_rejects_project_root_itself() {
        assert!(Target::new("x", ".").is_err());
        assert!(Target::new("x", "a/..").is_err());
    }

    #[test]
    fn test_accepts_nested_paths() {
        let target = Target::new("x", "tools/x/../y/skills").unwrap();
        assert_eq!(target.mirror, PathBuf::from("tools/x/../y/skills"));
    }
}
