//! Command implementations for mirror-cli

pub mod init;
pub mod status;
pub mod sync;
pub mod targets;

pub use init::run_init;
pub use status::run_status;
pub use sync::{run_clean, run_sync};
pub use targets::run_targets;
