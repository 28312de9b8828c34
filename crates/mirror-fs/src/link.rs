//! Link mutations
//!
//! Each function is a single filesystem call (plus directory creation for
//! [`ensure_dir`]) so a race with another process shows up as an error for
//! that one call.

use std::path::Path;

use crate::{Error, Result};

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

/// Create a directory symlink at `link_path` storing `destination` verbatim.
///
/// On Windows the link is created as a directory link.
pub fn create_dir_link(destination: &Path, link_path: &Path) -> Result<()> {
    #[cfg(unix)]
    let created = std::os::unix::fs::symlink(destination, link_path);
    #[cfg(windows)]
    let created = std::os::windows::fs::symlink_dir(destination, link_path);

    created.map_err(|e| Error::io(link_path, e))?;
    tracing::debug!(
        link = %link_path.display(),
        destination = %destination.display(),
        "Created symlink"
    );
    Ok(())
}

/// Remove the symlink at `link_path` without touching what it points to.
///
/// Refuses to remove anything that is not a symlink.
pub fn remove_link(link_path: &Path) -> Result<()> {
    let metadata = std::fs::symlink_metadata(link_path).map_err(|e| Error::io(link_path, e))?;
    if !metadata.file_type().is_symlink() {
        return Err(Error::io(
            link_path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a symlink"),
        ));
    }

    #[cfg(unix)]
    let removed = std::fs::remove_file(link_path);
    // Directory links on Windows must go through remove_dir.
    #[cfg(windows)]
    let removed = std::fs::remove_dir(link_path).or_else(|_| std::fs::remove_file(link_path));

    removed.map_err(|e| Error::io(link_path, e))?;
    tracing::debug!(link = %link_path.display(), "Removed symlink");
    Ok(())
}
