use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::target::Target;

/// dotup - personal dotfiles installer
///
/// Installs the bundled neovim, tmux, and bash configurations into the
/// standard XDG locations, optionally moving any prior state aside into
/// timestamped backups first.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Bundle directory holding the configuration sources
    /// (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR", env = "DOTUP_BUNDLE")]
    pub bundle: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install configuration bundles
    ///
    /// For each target in the order given: back up the live state (if
    /// requested), remove it (if requested), then copy the bundled files
    /// into place. A failing target aborts the run; targets already
    /// installed stay installed.
    Install {
        /// Targets to install (neovim, tmux, bash)
        #[arg(value_name = "TARGET")]
        targets: Vec<Target>,

        /// Move existing configuration aside to timestamped backups first
        #[arg(short, long)]
        backup: bool,

        /// Delete existing configuration before installing
        #[arg(short, long)]
        cleanup: bool,
    },

    /// Back up the live configuration for targets
    Backup {
        /// Targets to back up (neovim, tmux, bash)
        #[arg(value_name = "TARGET")]
        targets: Vec<Target>,
    },

    /// Remove the live configuration for targets
    Cleanup {
        /// Targets to clean up (neovim, tmux, bash)
        #[arg(value_name = "TARGET")]
        targets: Vec<Target>,
    },

    /// Restore the most recent backup (not yet implemented)
    Restore {
        /// Targets to restore (neovim, tmux, bash)
        #[arg(value_name = "TARGET")]
        targets: Vec<Target>,
    },

    /// List supported targets
    Targets,
}
