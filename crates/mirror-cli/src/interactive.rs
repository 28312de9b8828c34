//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based interactive selection.

use dialoguer::MultiSelect;
use mirror_core::ProjectConfig;

use crate::error::{CliError, Result};

/// Let the user pick targets; every configured target starts selected.
///
/// # Errors
///
/// Returns a user error when nothing is configured or nothing is picked.
pub fn select_targets(config: &ProjectConfig) -> Result<Vec<String>> {
    let names = config.target_names();
    if names.is_empty() {
        return Err(CliError::user("No targets are configured"));
    }

    let defaults = vec![true; names.len()];
    let picked = MultiSelect::new()
        .with_prompt("Select targets (space to toggle, enter to confirm)")
        .items(&names)
        .defaults(&defaults)
        .interact()?;

    if picked.is_empty() {
        return Err(CliError::user("No targets selected, nothing to do"));
    }

    Ok(picked.into_iter().map(|i| names[i].to_string()).collect())
}
