//! Init command implementation
//!
//! Prepares a project for skill-mirror: the canonical source directory and a
//! skill-mirror.toml listing the built-in targets.

use std::path::Path;

use colored::Colorize;
use mirror_core::{CONFIG_FILE, ProjectConfig};

use crate::error::Result;

/// Run the init command
///
/// Existing files are never overwritten. When a skill-mirror.toml is already
/// present its `source` setting decides which directory is created.
pub fn run_init(root: &Path, dry_run: bool) -> Result<()> {
    let root = mirror_fs::canonical_root(root)?;
    println!(
        "{} Initializing skill-mirror in {}...{}",
        "=>".blue().bold(),
        root.display().to_string().cyan(),
        if dry_run { " (dry run)" } else { "" }
    );

    let config_path = root.join(CONFIG_FILE);
    let config = ProjectConfig::load(&root)?;

    if config_path.exists() {
        println!("   {} {} (exists, leaving untouched)", "=".dimmed(), CONFIG_FILE);
    } else {
        if !dry_run {
            let content = ProjectConfig::default_manifest().to_toml()?;
            std::fs::write(&config_path, content)
                .map_err(|e| mirror_fs::Error::io(&config_path, e))?;
        }
        tracing::info!(path = %config_path.display(), dry_run, "Wrote project config");
        println!("   {} {}", "+".green(), CONFIG_FILE.cyan());
    }

    let source_root = root.join(&config.source);
    if source_root.is_dir() {
        println!(
            "   {} {} (exists, leaving untouched)",
            "=".dimmed(),
            config.source.display()
        );
    } else {
        if !dry_run {
            mirror_fs::ensure_dir(&source_root)?;
        }
        tracing::info!(path = %source_root.display(), dry_run, "Created canonical source");
        println!(
            "   {} {}",
            "+".green(),
            config.source.display().to_string().cyan()
        );
    }

    if dry_run {
        println!("{} Dry run complete. Nothing was written.", "OK".green().bold());
    } else {
        println!(
            "{} Initialized. Add item directories to {} and run {}.",
            "OK".green().bold(),
            config.source.display(),
            "skill-mirror sync".cyan()
        );
    }
    Ok(())
}
