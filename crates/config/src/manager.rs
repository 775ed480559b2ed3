//! Configuration manager - resolves the config file and loads it

use crate::persistence::ConfigPersistence;
use crate::{Config, ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Locates, loads and initializes the configuration file
pub struct ConfigManager {
    persistence: ConfigPersistence,
}

impl ConfigManager {
    /// Creates a manager for the platform config directory
    ///
    /// - Linux: `~/.config/chapterfeed/config.toml`
    /// - macOS: `~/Library/Application Support/chapterfeed/config.toml`
    /// - Windows: `%APPDATA%\chapterfeed\config.toml`
    pub fn new() -> ConfigResult<Self> {
        let config_dir = Self::default_config_dir()?;
        Ok(Self::with_directory(config_dir))
    }

    /// Creates a manager for `config.toml` inside `config_dir`
    pub fn with_directory(config_dir: impl AsRef<Path>) -> Self {
        Self::with_file(config_dir.as_ref().join(CONFIG_FILE_NAME))
    }

    /// Creates a manager for an explicit config file
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            persistence: ConfigPersistence::new(path.into()),
        }
    }

    fn default_config_dir() -> ConfigResult<PathBuf> {
        ProjectDirs::from("", "", "chapterfeed")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or_else(|| ConfigError::PathResolutionError {
                reason: "Could not determine user config directory".to_string(),
            })
    }

    /// Returns the full config file path
    pub fn config_path(&self) -> &Path {
        self.persistence.path()
    }

    /// Loads the configuration file, or defaults if it does not exist
    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }

    /// Saves the configuration atomically
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.persistence.save(config)
    }

    /// Writes a default config file if none exists
    ///
    /// Returns `Ok(true)` if a new file was created, `Ok(false)` if one already exists.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path().exists() {
            log::info!(
                "Config file already exists at {}",
                self.config_path().display()
            );
            return Ok(false);
        }

        self.save(&Config::default())?;
        Ok(true)
    }
}
