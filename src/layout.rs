use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::config::Sources;

/// Resolved filesystem layout for one run.
///
/// Holds the XDG base directories (environment override with a `$HOME`
/// fallback) and the bundle root, and hands each target manager its fixed,
/// read-only path set. The target-to-paths mapping lives entirely here.
#[derive(Debug)]
pub struct Layout {
    home: PathBuf,
    config_home: PathBuf,
    data_home: PathBuf,
    state_home: PathBuf,
    bundle_dir: PathBuf,
    sources: Sources,
}

/// Paths managed for the neovim target: three live XDG trees plus the
/// bundled source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeovimPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub state_dir: PathBuf,
    pub source: PathBuf,
}

/// Paths managed for the tmux target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmuxPaths {
    pub config_dir: PathBuf,
    pub source: PathBuf,
}

/// Paths managed for the bash target: two live files (rc and prompt theme)
/// with their bundled counterparts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BashPaths {
    pub rc_file: PathBuf,
    pub rc_source: PathBuf,
    pub theme_file: PathBuf,
    pub theme_source: PathBuf,
}

impl Layout {
    /// Resolve the layout from the environment.
    ///
    /// Base directories follow `$XDG_CONFIG_HOME`, `$XDG_DATA_HOME` and
    /// `$XDG_STATE_HOME`, falling back to the conventional locations under
    /// the home directory.
    pub fn new(bundle_dir: PathBuf, sources: Sources) -> Result<Self> {
        let base_dirs = directories::BaseDirs::new().context("Failed to get home directory")?;
        let home = base_dirs.home_dir().to_path_buf();

        Ok(Self {
            config_home: xdg_dir("XDG_CONFIG_HOME", home.join(".config")),
            data_home: xdg_dir("XDG_DATA_HOME", home.join(".local/share")),
            state_home: xdg_dir("XDG_STATE_HOME", home.join(".local/state")),
            home,
            bundle_dir,
            sources,
        })
    }

    pub fn bundle_dir(&self) -> &Path {
        &self.bundle_dir
    }

    pub fn neovim(&self) -> NeovimPaths {
        NeovimPaths {
            config_dir: self.config_home.join("nvim"),
            data_dir: self.data_home.join("nvim"),
            state_dir: self.state_home.join("nvim"),
            source: self.source_path(&self.sources.neovim),
        }
    }

    pub fn tmux(&self) -> TmuxPaths {
        TmuxPaths {
            config_dir: self.config_home.join("tmux"),
            source: self.source_path(&self.sources.tmux),
        }
    }

    pub fn bash(&self) -> BashPaths {
        BashPaths {
            rc_file: self.home.join(".bashrc"),
            rc_source: self.source_path(&self.sources.bash_rc),
            theme_file: self.config_home.join("starship.toml"),
            theme_source: self.source_path(&self.sources.starship),
        }
    }

    /// Resolve a configured source location. Relative entries are rooted at
    /// the bundle directory; absolute and `~`-prefixed entries stand alone.
    fn source_path(&self, configured: &str) -> PathBuf {
        let expanded = shellexpand::tilde(configured);
        let path = PathBuf::from(expanded.as_ref());
        if path.is_absolute() {
            path
        } else {
            self.bundle_dir.join(path)
        }
    }
}

fn xdg_dir(var: &str, fallback: PathBuf) -> PathBuf {
    env::var(var).map(PathBuf::from).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serial_test::serial;
    use tempfile::TempDir;

    fn setup_test_env() -> TempDir {
        let temp = TempDir::new().unwrap();
        env::set_var("HOME", temp.path());
        env::set_var("XDG_CONFIG_HOME", temp.path().join(".config"));
        env::set_var("XDG_DATA_HOME", temp.path().join(".local/share"));
        env::set_var("XDG_STATE_HOME", temp.path().join(".local/state"));
        temp
    }

    fn layout(temp: &TempDir) -> Layout {
        Layout::new(temp.path().join("bundle"), Sources::default()).unwrap()
    }

    #[test]
    #[serial]
    fn test_neovim_paths() {
        let temp = setup_test_env();
        let paths = layout(&temp).neovim();

        assert_eq!(paths.config_dir, temp.path().join(".config/nvim"));
        assert_eq!(paths.data_dir, temp.path().join(".local/share/nvim"));
        assert_eq!(paths.state_dir, temp.path().join(".local/state/nvim"));
        assert_eq!(paths.source, temp.path().join("bundle/nvim"));
    }

    #[test]
    #[serial]
    fn test_tmux_paths() {
        let temp = setup_test_env();
        let paths = layout(&temp).tmux();

        assert_eq!(paths.config_dir, temp.path().join(".config/tmux"));
        assert_eq!(paths.source, temp.path().join("bundle/tmux"));
    }

    #[test]
    #[serial]
    fn test_bash_paths() {
        let temp = setup_test_env();
        let paths = layout(&temp).bash();

        assert_eq!(paths.rc_file, temp.path().join(".bashrc"));
        assert_eq!(paths.rc_source, temp.path().join("bundle/bash/bashrc"));
        assert_eq!(paths.theme_file, temp.path().join(".config/starship.toml"));
        assert_eq!(
            paths.theme_source,
            temp.path().join("bundle/bash/starship.toml")
        );
    }

    #[test]
    #[serial]
    fn test_absolute_source_override() {
        let temp = setup_test_env();
        let sources = Sources {
            tmux: "/opt/dots/tmux".to_string(),
            ..Sources::default()
        };
        let layout = Layout::new(temp.path().join("bundle"), sources).unwrap();

        assert_eq!(layout.tmux().source, PathBuf::from("/opt/dots/tmux"));
    }

    #[test]
    #[serial]
    fn test_xdg_fallbacks_under_home() {
        let temp = TempDir::new().unwrap();
        env::set_var("HOME", temp.path());
        env::remove_var("XDG_CONFIG_HOME");
        env::remove_var("XDG_DATA_HOME");
        env::remove_var("XDG_STATE_HOME");

        let layout = Layout::new(temp.path().join("bundle"), Sources::default()).unwrap();
        let paths = layout.neovim();

        assert_eq!(paths.config_dir, temp.path().join(".config/nvim"));
        assert_eq!(paths.data_dir, temp.path().join(".local/share/nvim"));
        assert_eq!(paths.state_dir, temp.path().join(".local/state/nvim"));
    }
}
