//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Skill Mirror - Link one canonical skills directory into every agent's mirror
#[derive(Parser, Debug)]
#[command(name = "skill-mirror")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the nearest directory with skill-mirror.toml
    /// or a canonical source directory)
    #[arg(long, global = true, env = "SKILL_MIRROR_ROOT", conflicts_with = "global")]
    pub root: Option<PathBuf>,

    /// Use the home directory as the project root (user-level skills)
    #[arg(short, long, global = true)]
    pub global: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Target selection shared by sync, clean and status
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetArgs {
    /// Restrict to these targets (repeatable; default: all configured)
    #[arg(short = 't', long = "target", value_name = "NAME")]
    pub targets: Vec<String>,

    /// Choose targets interactively
    #[arg(short, long, conflicts_with = "targets")]
    pub interactive: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Link every canonical item into the selected targets
    ///
    /// Existing correct links and real directories are left untouched;
    /// stale links are replaced.
    ///
    /// Examples:
    ///   skill-mirror sync                 # All configured targets
    ///   skill-mirror sync -t claude       # Only Claude
    ///   skill-mirror sync --dry-run       # Preview without changing
    Sync {
        #[command(flatten)]
        selection: TargetArgs,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Remove links in the selected targets that point into the source
    ///
    /// Real files and directories, and links pointing anywhere else, are
    /// preserved.
    Clean {
        #[command(flatten)]
        selection: TargetArgs,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show which items are linked in each target
    Status {
        #[command(flatten)]
        selection: TargetArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List configured targets
    Targets {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Create the canonical source directory and a default skill-mirror.toml
    Init {
        /// Preview without creating anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completions
    ///
    /// Outputs completion script for your shell.
    ///
    /// Examples:
    ///   skill-mirror completions bash > ~/.local/share/bash-completion/completions/skill-mirror
    ///   skill-mirror completions zsh > ~/.zfunc/_skill-mirror
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
