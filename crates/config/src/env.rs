//! Environment variable overrides

use crate::{Config, ConfigError, ConfigResult};
use std::path::PathBuf;

pub const ENV_URL: &str = "CHAPTERFEED_URL";
pub const ENV_OUTPUT: &str = "CHAPTERFEED_OUTPUT";
pub const ENV_USER_AGENT: &str = "CHAPTERFEED_USER_AGENT";
pub const ENV_TIMEOUT_SECS: &str = "CHAPTERFEED_TIMEOUT_SECS";

impl Config {
    /// Applies `CHAPTERFEED_*` overrides read through `lookup`
    ///
    /// Unset and empty variables are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_URL) {
            log::debug!("{} overrides source.url", ENV_URL);
            self.source.url = url;
        }

        if let Some(path) = get(ENV_OUTPUT) {
            log::debug!("{} overrides output.path", ENV_OUTPUT);
            self.output.path = PathBuf::from(path);
        }

        if let Some(agent) = get(ENV_USER_AGENT) {
            log::debug!("{} overrides source.user_agent", ENV_USER_AGENT);
            self.source.user_agent = agent;
        }

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            self.source.timeout_secs =
                raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    var: ENV_TIMEOUT_SECS.to_string(),
                    value: raw.clone(),
                    reason: "expected a whole number of seconds".to_string(),
                })?;
        }

        Ok(())
    }

    /// Applies overrides from the process environment
    pub fn apply_process_env(&mut self) -> ConfigResult<()> {
        self.apply_env_overrides(|key| std::env::var(key).ok())
    }
}
