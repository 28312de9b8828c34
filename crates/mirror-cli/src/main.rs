//! Skill Mirror CLI
//!
//! The command-line interface for linking a canonical skills directory into
//! each agent's mirror directory.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands, TargetArgs};
use context::ProjectContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        if let Some(hint) = e.hint() {
            eprintln!("{}: {}", "hint".yellow().bold(), hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command.clone() {
        Some(cmd) => execute_command(&cli, cmd),
        None => {
            // No command provided - show help hint
            println!("{} Skill Mirror CLI", "skill-mirror".green().bold());
            println!();
            println!(
                "Run {} for available commands.",
                "skill-mirror --help".cyan()
            );
            Ok(())
        }
    }
}

fn execute_command(cli: &Cli, cmd: Commands) -> Result<()> {
    let resolve = || ProjectContext::resolve(cli.root.as_deref(), cli.global);

    match cmd {
        Commands::Sync {
            selection,
            dry_run,
            json,
        } => {
            let ctx = resolve()?;
            commands::run_sync(&ctx, &select(&ctx, &selection)?, dry_run, json)
        }
        Commands::Clean {
            selection,
            dry_run,
            json,
        } => {
            let ctx = resolve()?;
            commands::run_clean(&ctx, &select(&ctx, &selection)?, dry_run, json)
        }
        Commands::Status { selection, json } => {
            let ctx = resolve()?;
            commands::run_status(&ctx, &select(&ctx, &selection)?, json)
        }
        Commands::Targets { json } => commands::run_targets(&resolve()?, json),
        Commands::Init { dry_run } => {
            let (root, _) = context::resolve_root(cli.root.as_deref(), cli.global)?;
            commands::run_init(&root, dry_run)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "skill-mirror",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

/// Target names for the command; empty means every configured target.
fn select(ctx: &ProjectContext, args: &TargetArgs) -> Result<Vec<String>> {
    if args.interactive {
        interactive::select_targets(&ctx.config)
    } else {
        Ok(args.targets.clone())
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug with
/// `--verbose`.
fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("Verbose mode enabled");
    Ok(())
}
