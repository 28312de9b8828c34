//! Link inspection
//!
//! Classifies what sits at a prospective link location. Reads link metadata
//! only and never follows a link, so dangling links are classified by the
//! text they store.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// On-disk state of a prospective link location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkState {
    /// Nothing exists at the location
    Absent,
    /// A symlink storing exactly the expected destination
    Correct,
    /// A symlink storing some other destination
    Incorrect,
    /// A file or directory that is not a symlink
    RealEntry,
}

impl LinkState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
            Self::RealEntry => "real-entry",
        }
    }
}

impl fmt::Display for LinkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of inspecting one link location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub state: LinkState,
    /// Literal text stored by an existing symlink
    pub observed: Option<PathBuf>,
}

/// Classify the entry at `link_path` against the destination text a correct
/// link must store.
///
/// The comparison is textual: `./a` and `a` are different destinations.
///
/// # Errors
///
/// Returns [`Error::Io`] when metadata cannot be read for any reason other
/// than the entry not existing.
pub fn inspect_link(link_path: &Path, expected: &Path) -> Result<Inspection> {
    let metadata = match std::fs::symlink_metadata(link_path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(Inspection {
                state: LinkState::Absent,
                observed: None,
            });
        }
        Err(e) => return Err(Error::io(link_path, e)),
    };

    if !metadata.file_type().is_symlink() {
        return Ok(Inspection {
            state: LinkState::RealEntry,
            observed: None,
        });
    }

    let observed = std::fs::read_link(link_path).map_err(|e| Error::io(link_path, e))?;
    let state = if observed.as_os_str() == expected.as_os_str() {
        LinkState::Correct
    } else {
        LinkState::Incorrect
    };

    tracing::trace!(
        link = %link_path.display(),
        observed = %observed.display(),
        expected = %expected.display(),
        %state,
        "Inspected link"
    );

    Ok(Inspection {
        state,
        observed: Some(observed),
    })
}

/// Read the destination text of `path` if it is a symlink.
///
/// Returns `Ok(None)` for entries that are not symlinks.
pub fn read_symlink(path: &Path) -> Result<Option<PathBuf>> {
    let metadata = std::fs::symlink_metadata(path).map_err(|e| Error::io(path, e))?;
    if !metadata.file_type().is_symlink() {
        return Ok(None);
    }
    std::fs::read_link(path)
        .map(Some)
        .map_err(|e| Error::io(path, e))
}
