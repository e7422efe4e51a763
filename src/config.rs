use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Optional bundle configuration file, looked up at the bundle root.
pub const BUNDLE_CONFIG: &str = "dotup.toml";

/// Bundle configuration (`dotup.toml`).
///
/// Everything is optional; a bundle without the file gets the conventional
/// source layout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: Sources,
}

/// Where each target's bundled files live, relative to the bundle root.
/// Absolute or `~`-prefixed entries are taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Sources {
    pub neovim: String,
    pub tmux: String,
    pub bash_rc: String,
    pub starship: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            neovim: "nvim".to_string(),
            tmux: "tmux".to_string(),
            bash_rc: "bash/bashrc".to_string(),
            starship: "bash/starship.toml".to_string(),
        }
    }
}

impl Config {
    /// Load the bundle configuration, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read bundle config {:?}", path))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse bundle config {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(&temp.path().join(BUNDLE_CONFIG)).unwrap();

        assert_eq!(config.sources, Sources::default());
        assert_eq!(config.sources.neovim, "nvim");
        assert_eq!(config.sources.starship, "bash/starship.toml");
    }

    #[test]
    fn test_load_partial_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(BUNDLE_CONFIG);
        fs::write(&path, "[sources]\nneovim = \"editors/nvim\"\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.sources.neovim, "editors/nvim");
        assert_eq!(config.sources.tmux, "tmux");
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(BUNDLE_CONFIG);
        fs::write(&path, "[sources\nbroken").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
