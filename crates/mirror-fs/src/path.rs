//! Lexical path arithmetic
//!
//! Everything here works on path text only. Nothing touches the filesystem
//! except [`canonical_root`], which resolves a project root once at startup.

use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

/// Lexically normalize a path.
///
/// Drops `.` components and folds `..` into the preceding normal component.
/// A `..` that would climb above the root of an absolute path is discarded;
/// leading `..` components of a relative path are kept.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    parts.iter().collect()
}

/// Compute the relative path that leads from directory `from_dir` to `to`.
///
/// Both inputs are normalized first. The result joined onto `from_dir` and
/// normalized again yields `to`. When the two paths share no root (for
/// example different drive prefixes on Windows) `to` is returned unchanged.
pub fn relative_path(from_dir: impl AsRef<Path>, to: impl AsRef<Path>) -> PathBuf {
    let from = normalize(from_dir);
    let to = normalize(to);

    let from_parts: Vec<Component<'_>> = from.components().collect();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let rooted = |parts: &[Component<'_>]| {
        matches!(
            parts.first(),
            Some(Component::RootDir) | Some(Component::Prefix(_))
        )
    };
    if common == 0 && (rooted(&from_parts) || rooted(&to_parts)) {
        return to;
    }

    let mut relative = PathBuf::new();
    for _ in common..from_parts.len() {
        relative.push("..");
    }
    for part in &to_parts[common..] {
        relative.push(part.as_os_str());
    }

    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}

/// Resolve where a symlink's stored destination points, without touching
/// the filesystem.
///
/// Relative destinations are interpreted against the directory containing
/// the link; absolute ones stand on their own.
pub fn resolve_link_destination(link_path: &Path, stored: &Path) -> PathBuf {
    let base = link_path.parent().unwrap_or_else(|| Path::new(""));
    normalize(base.join(stored))
}

/// Whether `path` lies at or below `root`, compared lexically.
pub fn is_within(path: impl AsRef<Path>, root: impl AsRef<Path>) -> bool {
    normalize(path).starts_with(normalize(root))
}

/// Resolve a project root to an absolute, symlink-free path.
///
/// Uses `dunce` so Windows roots come back without the `\\?\` prefix.
pub fn canonical_root(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::EmptyPath {
            what: "Project root",
        });
    }
    dunce::canonicalize(path).map_err(|e| Error::io(path, e))
}
