use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::error::{Error, Result};
use crate::fileops;
use crate::layout::{BashPaths, Layout, NeovimPaths, TmuxPaths};

/// The closed set of configuration bundles dotup knows how to manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Neovim,
    Tmux,
    Bash,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Neovim, Target::Tmux, Target::Bash];

    /// Parse a target tag. Anything outside the closed set is a hard error;
    /// unrecognized configuration must never degrade to a no-op.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag.to_lowercase().as_str() {
            "neovim" => Ok(Target::Neovim),
            "tmux" => Ok(Target::Tmux),
            "bash" => Ok(Target::Bash),
            _ => Err(Error::UnknownTarget {
                tag: tag.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Target::Neovim => "neovim",
            Target::Tmux => "tmux",
            Target::Bash => "bash",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Target::Neovim => "Neovim editor configuration (config, data, and state trees)",
            Target::Tmux => "Tmux terminal multiplexer configuration",
            Target::Bash => "Bash rc file and starship prompt theme",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s)
    }
}

/// Lifecycle operations for one target.
///
/// Managers are stateless beyond the path set bound at construction and are
/// created per invocation. Each operation composes the fileops primitives
/// against that fixed path set; ordering between operations is the caller's
/// responsibility.
pub trait TargetManager {
    /// Move the live paths aside to timestamped `.bak` siblings. Absent
    /// paths are skipped, so this is safe on a fresh machine.
    fn backup(&self) -> Result<()>;

    /// Delete the live paths. Absent paths are a no-op.
    fn cleanup(&self) -> Result<()>;

    /// Reverse the most recent backup.
    ///
    /// Declared for API completeness; the semantics are not yet specified
    /// and every manager currently reports it as unimplemented.
    fn restore(&self) -> Result<()>;

    /// Copy the bundled sources over the live paths (merging, overwriting
    /// same-named files).
    fn install(&self) -> Result<()>;
}

/// Build the manager for `target`. Total over the closed target set; tag
/// validation happens earlier in [`Target::from_tag`].
pub fn create(target: Target, layout: &Layout) -> Box<dyn TargetManager> {
    match target {
        Target::Neovim => Box::new(NeovimManager {
            paths: layout.neovim(),
        }),
        Target::Tmux => Box::new(TmuxManager {
            paths: layout.tmux(),
        }),
        Target::Bash => Box::new(BashManager {
            paths: layout.bash(),
        }),
    }
}

struct NeovimManager {
    paths: NeovimPaths,
}

impl TargetManager for NeovimManager {
    fn backup(&self) -> Result<()> {
        fileops::backup(&self.paths.config_dir)?;
        fileops::backup(&self.paths.data_dir)?;
        fileops::backup(&self.paths.state_dir)?;
        Ok(())
    }

    fn cleanup(&self) -> Result<()> {
        fileops::remove(&self.paths.config_dir, true)?;
        fileops::remove(&self.paths.data_dir, true)?;
        fileops::remove(&self.paths.state_dir, true)?;
        Ok(())
    }

    fn restore(&self) -> Result<()> {
        Err(Error::RestoreUnimplemented {
            target: Target::Neovim,
        })
    }

    fn install(&self) -> Result<()> {
        info!(
            "copying files from {:?} to {:?}",
            self.paths.source, self.paths.config_dir
        );
        fileops::copy(&self.paths.source, &self.paths.config_dir, true, false)
    }
}

struct TmuxManager {
    paths: TmuxPaths,
}

impl TargetManager for TmuxManager {
    fn backup(&self) -> Result<()> {
        fileops::backup(&self.paths.config_dir)?;
        Ok(())
    }

    fn cleanup(&self) -> Result<()> {
        fileops::remove(&self.paths.config_dir, true)
    }

    fn restore(&self) -> Result<()> {
        Err(Error::RestoreUnimplemented {
            target: Target::Tmux,
        })
    }

    fn install(&self) -> Result<()> {
        info!(
            "copying files from {:?} to {:?}",
            self.paths.source, self.paths.config_dir
        );
        fileops::copy(&self.paths.source, &self.paths.config_dir, true, false)
    }
}

struct BashManager {
    paths: BashPaths,
}

impl TargetManager for BashManager {
    fn backup(&self) -> Result<()> {
        fileops::backup(&self.paths.rc_file)?;
        fileops::backup(&self.paths.theme_file)?;
        Ok(())
    }

    fn cleanup(&self) -> Result<()> {
        // Both live paths are plain files.
        fileops::remove(&self.paths.rc_file, false)?;
        fileops::remove(&self.paths.theme_file, false)?;
        Ok(())
    }

    fn restore(&self) -> Result<()> {
        Err(Error::RestoreUnimplemented {
            target: Target::Bash,
        })
    }

    fn install(&self) -> Result<()> {
        info!(
            "copying {:?} to {:?}",
            self.paths.rc_source, self.paths.rc_file
        );
        fileops::copy(&self.paths.rc_source, &self.paths.rc_file, false, false)?;
        info!(
            "copying {:?} to {:?}",
            self.paths.theme_source, self.paths.theme_file
        );
        fileops::copy(&self.paths.theme_source, &self.paths.theme_file, false, false)
    }
}
