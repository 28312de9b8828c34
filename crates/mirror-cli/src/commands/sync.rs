//! Sync and clean command implementations
//!
//! Both commands print the same per-target report; only the verbs differ.

use colored::Colorize;
use mirror_core::{Action, Operation, Outcome, SyncEngine, SyncOptions, SyncReport};

use crate::context::ProjectContext;
use crate::error::{CliError, Result};

/// Run the sync command
///
/// Links every canonical item into each selected target.
pub fn run_sync(ctx: &ProjectContext, selection: &[String], dry_run: bool, json: bool) -> Result<()> {
    let engine = SyncEngine::from_config(&ctx.root, &ctx.config, selection)?;

    if !json {
        println!(
            "{} Synchronizing {} into {} target(s)...{}",
            "=>".blue().bold(),
            ctx.config.source.display().to_string().cyan(),
            engine.targets().len(),
            dry_run_suffix(dry_run)
        );
    }

    let report = engine.sync(&SyncOptions { dry_run })?;
    finish(&engine, &report, json)
}

/// Run the clean command
///
/// Removes links in each selected target that point into the source.
pub fn run_clean(
    ctx: &ProjectContext,
    selection: &[String],
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let engine = SyncEngine::from_config(&ctx.root, &ctx.config, selection)?;

    if !json {
        println!(
            "{} Cleaning links into {} from {} target(s)...{}",
            "=>".blue().bold(),
            ctx.config.source.display().to_string().cyan(),
            engine.targets().len(),
            dry_run_suffix(dry_run)
        );
    }

    let report = engine.clean(&SyncOptions { dry_run })?;
    finish(&engine, &report, json)
}

fn finish(engine: &SyncEngine, report: &SyncReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_report(engine, report);
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} {} failed",
            report.failed.len(),
            if report.failed.len() == 1 { "entry" } else { "entries" }
        )))
    }
}

fn print_report(engine: &SyncEngine, report: &SyncReport) {
    for target in engine.targets() {
        let outcomes: Vec<&Outcome> = report
            .outcomes()
            .filter(|o| o.target == target.name)
            .collect();

        println!();
        println!(
            "{} ({})",
            target.name.bold(),
            target.mirror.display().to_string().dimmed()
        );
        if outcomes.is_empty() {
            println!("   {}", "nothing to do".dimmed());
            continue;
        }
        for outcome in outcomes {
            print_outcome(outcome, report.operation);
        }
    }

    println!();
    let verb = match (report.operation, report.dry_run) {
        (Operation::Sync, false) => "Created",
        (Operation::Sync, true) => "Would create",
        (Operation::Clean, false) => "Removed",
        (Operation::Clean, true) => "Would remove",
    };
    let summary = format!(
        "{} {} link(s), skipped {}, failed {}.",
        verb,
        report.changed.len(),
        report.skipped.len(),
        report.failed.len()
    );

    if !report.is_success() {
        println!("{} {}", "ERROR".red().bold(), summary);
    } else if report.is_noop() {
        let nothing = match report.operation {
            Operation::Sync => "Already synchronized. No changes needed.",
            Operation::Clean => "No links to remove.",
        };
        println!("{} {}", "OK".green().bold(), nothing);
    } else {
        println!("{} {}", "OK".green().bold(), summary);
    }
}

fn print_outcome(outcome: &Outcome, operation: Operation) {
    let reason = outcome.reason.as_deref().unwrap_or_default();
    match outcome.action {
        Action::Created => println!("   {} {}", "+".green(), outcome.item.cyan()),
        Action::Removed => println!("   {} {}", "-".yellow(), outcome.item.cyan()),
        Action::Skipped => println!(
            "   {} {} {}",
            "=".dimmed(),
            outcome.item,
            format!("({reason})").dimmed()
        ),
        Action::Failed => println!(
            "   {} {} {} {}",
            "!".red(),
            outcome.item.red(),
            format!("{operation} failed:").red(),
            reason
        ),
    }
}

fn dry_run_suffix(dry_run: bool) -> String {
    if dry_run {
        format!(" {}", "(dry run)".yellow())
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RootSource;
    use mirror_test_utils::project::TestProject;

    fn context(project: &TestProject) -> ProjectContext {
        ProjectContext::load(project.root(), RootSource::Explicit).unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn test_run_sync_links_items() {
        let project = TestProject::with_items(&["a"]);
        let ctx = context(&project);

        run_sync(&ctx, &["claude".to_string()], false, false).unwrap();

        project.assert_symlink(".claude/skills/a", "../../.agents/skills/a");
    }

    #[test]
    fn test_run_sync_dry_run_changes_nothing() {
        let project = TestProject::with_items(&["a"]);
        let ctx = context(&project);

        run_sync(&ctx, &[], true, true).unwrap();

        project.assert_missing(".claude");
    }

    #[test]
    fn test_run_sync_unknown_target() {
        let project = TestProject::with_items(&["a"]);
        let ctx = context(&project);

        let err = run_sync(&ctx, &["vim".to_string()], false, false).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(mirror_core::Error::UnknownTarget { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_clean_removes_links() {
        let project = TestProject::with_items(&["a"]);
        project.symlink(".claude/skills/a", "../../.agents/skills/a");
        let ctx = context(&project);

        run_clean(&ctx, &[], false, false).unwrap();

        project.assert_missing(".claude/skills/a");
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_pair_is_an_error() {
        let project = TestProject::with_items(&["a"]);
        // A file where the mirror root should be makes link creation fail.
        project.write_file(".claude/skills", "not a directory");
        let ctx = context(&project);

        let err = run_sync(&ctx, &["claude".to_string()], false, true).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }
}
