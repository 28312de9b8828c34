//! Targets command implementation

use colored::Colorize;
use serde::Serialize;

use crate::context::ProjectContext;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct TargetRow<'a> {
    name: &'a str,
    path: String,
    exists: bool,
}

/// Run the targets command
///
/// Lists every enabled target with its mirror root and whether it exists.
pub fn run_targets(ctx: &ProjectContext, json: bool) -> Result<()> {
    let rows: Vec<TargetRow<'_>> = ctx
        .config
        .targets
        .iter()
        .map(|t| TargetRow {
            name: &t.name,
            path: t.mirror.display().to_string(),
            exists: ctx.root.join(&t.mirror).is_dir(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", "Configured targets:".bold());
    if rows.is_empty() {
        println!(
            "  {} (enable targets in {})",
            "None".dimmed(),
            mirror_core::CONFIG_FILE.cyan()
        );
        return Ok(());
    }

    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for row in &rows {
        let state = if row.exists {
            "present".green()
        } else {
            "missing".dimmed()
        };
        println!(
            "  {} {:<width$}  {}  {}",
            "+".green(),
            row.name,
            row.path.cyan(),
            state,
            width = width
        );
    }
    Ok(())
}
