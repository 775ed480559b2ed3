//! ChapterFeed configuration
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then `CHAPTERFEED_*` environment variables, then command-line flags.
//! Each section implements [`ConfigSection`] and validates itself.
//!
//! # Example
//!
//! ```rust
//! use chapterfeed_config::Config;
//!
//! let mut config = Config::default();
//! config
//!     .apply_env_overrides(|key| (key == "CHAPTERFEED_OUTPUT").then(|| "public/feed.xml".to_string()))
//!     .expect("valid overrides");
//!
//! assert_eq!(config.output.path.to_str(), Some("public/feed.xml"));
//! assert!(config.validate().is_ok());
//! ```

mod channel_config;
mod env;
mod error;
mod manager;
mod output_config;
mod persistence;
mod source_config;
mod validation;

pub use channel_config::ChannelConfig;
pub use env::{ENV_OUTPUT, ENV_TIMEOUT_SECS, ENV_URL, ENV_USER_AGENT};
pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::ConfigManager;
pub use output_config::OutputConfig;
pub use persistence::ConfigPersistence;
pub use source_config::SourceConfig;
pub use validation::{ConfigSection, Validator};

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    /// Where and how to fetch the table of contents
    pub source: SourceConfig,

    /// Fixed channel metadata for the generated feed
    pub channel: ChannelConfig,

    /// Where the feed is written
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.source.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.channel.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.output.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates and folds every problem into a single [`ConfigError`]
    pub fn ensure_valid(&self) -> ConfigResult<()> {
        self.validate().map_err(|errors| {
            ConfigError::ValidationError(
                errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.ensure_valid().is_ok());
    }

    #[test]
    fn test_errors_collected_across_sections() {
        let mut config = Config::default();
        config.source.url = String::new();
        config.channel.title = String::new();
        config.output.path = Default::default();

        let errors = config.validate().expect_err("three sections are invalid");
        assert_eq!(errors.len(), 3);

        let err = config.ensure_valid().expect_err("invalid");
        assert!(err.to_string().contains("source.url"));
        assert!(err.to_string().contains("output.path"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[output]\npath = \"site/feed.xml\"\n").expect("parse");
        assert_eq!(config.output.path.to_str(), Some("site/feed.xml"));
        assert_eq!(config.source, SourceConfig::default());
    }
}
