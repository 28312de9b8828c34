//! Status command implementation

use colored::Colorize;
use mirror_core::{StatusReport, SyncEngine, TargetStatus};

use crate::context::{ProjectContext, RootSource};
use crate::error::Result;

/// Run the status command
///
/// Read-only: shows which items are linked, unlinked or wrong per target.
pub fn run_status(ctx: &ProjectContext, selection: &[String], json: bool) -> Result<()> {
    let engine = SyncEngine::from_config(&ctx.root, &ctx.config, selection)?;
    let report = engine.status()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_status(ctx, &report);
    Ok(())
}

fn print_status(ctx: &ProjectContext, report: &StatusReport) {
    println!("{}", "Skill Mirror Status".bold());
    println!();
    println!("{}:   {}", "Root".dimmed(), ctx.root.display());
    if ctx.root_source == RootSource::CurrentDir {
        println!(
            "        {}",
            "(no skill-mirror.toml or source directory found above; using the current directory)"
                .dimmed()
        );
    }
    println!(
        "{}: {} ({} item(s))",
        "Source".dimmed(),
        ctx.config.source.display().to_string().cyan(),
        report.items.len()
    );

    if report.items.is_empty() {
        println!();
        println!("  {} (add item directories to the source)", "No items".dimmed());
        return;
    }

    for status in &report.targets {
        println!();
        print_target(ctx, status);
    }

    println!();
    if report.is_in_sync() {
        println!("{} All targets are in sync.", "OK".green().bold());
    } else {
        println!("Run {} to repair.", "skill-mirror sync".cyan());
    }
}

fn print_target(ctx: &ProjectContext, status: &TargetStatus) {
    let mirror = status
        .mirror_root
        .strip_prefix(&ctx.root)
        .unwrap_or(&status.mirror_root);
    let label = if status.is_complete() {
        "in sync".green()
    } else {
        "out of sync".yellow()
    };
    println!(
        "{} ({}) {}",
        status.target.bold(),
        mirror.display().to_string().dimmed(),
        label
    );

    print_bucket("linked", &status.linked, |s| s.green().to_string());
    print_bucket("unlinked", &status.unlinked, |s| s.yellow().to_string());
    print_bucket("wrong", &status.wrong, |s| s.red().to_string());
    print_bucket("errors", &status.errors, |s| s.red().to_string());
}

fn print_bucket(label: &str, items: &[String], paint: impl Fn(&str) -> String) {
    if items.is_empty() {
        return;
    }
    println!("   {} {}", paint(&format!("{label:<9}")), items.join(", "));
}
