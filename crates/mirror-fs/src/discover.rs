//! Directory listing helpers

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// An entry found directly inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
}

/// List the names of the immediate subdirectories of `dir`, sorted.
///
/// Symlinks are not followed: a symlink to a directory is not an item.
/// Names that are not valid UTF-8 are skipped with a warning.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
        if !file_type.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => {
                tracing::warn!(name = ?raw, dir = %dir.display(), "Skipping non UTF-8 directory name");
            }
        }
    }
    names.sort();
    Ok(names)
}

/// List every entry directly inside `dir`, sorted by name.
///
/// A missing directory yields an empty list.
pub fn list_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let read = match std::fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io(dir, e)),
    };

    let mut entries = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
