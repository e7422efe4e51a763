use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::cli::{Cli, Commands};
use crate::config::{Config, BUNDLE_CONFIG};
use crate::layout::Layout;

mod backup;
mod cleanup;
mod install;
mod restore;
mod targets;

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Install {
            targets,
            backup,
            cleanup,
        } => install::execute(&load_layout(cli.bundle)?, &targets, backup, cleanup),

        Commands::Backup { targets } => backup::execute(&load_layout(cli.bundle)?, &targets),

        Commands::Cleanup { targets } => cleanup::execute(&load_layout(cli.bundle)?, &targets),

        Commands::Restore { targets } => restore::execute(&load_layout(cli.bundle)?, &targets),

        Commands::Targets => targets::execute(),
    }
}

/// Resolve the bundle directory and its optional configuration into the
/// run's filesystem layout.
fn load_layout(bundle: Option<PathBuf>) -> Result<Layout> {
    let bundle_dir = match bundle {
        Some(dir) => dir,
        None => env::current_dir().context("Failed to determine current directory")?,
    };

    let config = Config::load(&bundle_dir.join(BUNDLE_CONFIG))?;
    Layout::new(bundle_dir, config.sources)
}
