//! Configuration for paddock
//!
//! An optional `config.toml` in the data directory; every section has
//! defaults so a missing or partial file always loads. The data directory
//! itself resolves from `$PADDOCK_DATA_DIR`, falling back to the platform
//! user data dir.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk configuration, all sections optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub assistant: AssistantSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Override for where the garage document lives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantSection {
    /// JSON answer table replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<PathBuf>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the garage document (and the config file itself)
    pub data_dir: PathBuf,
    /// Custom answer table, if configured
    pub answers_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default data directory
    pub fn load() -> Result<Self> {
        Self::load_from(&default_data_dir())
    }

    /// Load configuration rooted at an explicit directory
    ///
    /// Reads `config.toml` under `base_dir` if present; a `[storage] dir`
    /// entry relocates the garage document, everything else stays rooted
    /// at `base_dir`.
    pub fn load_from(base_dir: &Path) -> Result<Self> {
        let file = read_config_file(&base_dir.join("config.toml"))?;

        Ok(Self {
            data_dir: file.storage.dir.unwrap_or_else(|| base_dir.to_path_buf()),
            answers_path: file.assistant.answers,
        })
    }
}

/// `$PADDOCK_DATA_DIR`, else the platform user data dir, else `.paddock`
pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("PADDOCK_DATA_DIR") {
        return PathBuf::from(dir);
    }

    dirs::data_dir()
        .map(|dir| dir.join("paddock"))
        .unwrap_or_else(|| PathBuf::from(".paddock"))
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    toml::from_str(&contents).with_context(|| format!("Failed to parse config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_from(tmp.path()).unwrap();
        assert_eq!(config.data_dir, tmp.path());
        assert!(config.answers_path.is_none());
    }

    #[test]
    fn test_partial_config_loads() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[assistant]\nanswers = \"custom-answers.json\"\n",
        )
        .unwrap();

        let config = Config::load_from(tmp.path()).unwrap();
        assert_eq!(config.data_dir, tmp.path());
        assert_eq!(
            config.answers_path,
            Some(PathBuf::from("custom-answers.json"))
        );
    }

    #[test]
    fn test_storage_dir_override() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[storage]\ndir = \"/var/lib/paddock\"\n",
        )
        .unwrap();

        let config = Config::load_from(tmp.path()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/paddock"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "not = [valid").unwrap();

        let err = Config::load_from(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
