//! Filesystem layer for skill-mirror
//!
//! Provides pure path resolution, non-following link inspection, and the
//! small set of link mutations the reconciliation engine performs.

pub mod discover;
pub mod error;
pub mod inspect;
pub mod layout;
pub mod link;
pub mod path;

pub use discover::{DirEntry, list_entries, list_subdirectories};
pub use error::{Error, Result};
pub use inspect::{Inspection, LinkState, inspect_link, read_symlink};
pub use layout::MirrorLayout;
pub use link::{create_dir_link, ensure_dir, remove_link};
pub use path::{canonical_root, is_within, normalize, relative_path, resolve_link_destination};
