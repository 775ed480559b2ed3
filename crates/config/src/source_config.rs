//! Source page settings

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Table-of-contents page scraped on every run
pub const DEFAULT_URL: &str = "https://wanderinginn.com/table-of-contents/";

/// Where and how the table of contents is fetched and scraped
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
    /// Table-of-contents URL; also used as the channel link
    pub url: String,

    /// User-Agent header sent with the request
    pub user_agent: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// CSS selector matching chapter anchors
    pub selector: String,
}

impl SourceConfig {
    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 30,
            selector: "div.chapter-entry a".to_string(),
        }
    }
}

impl ConfigSection for SourceConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![
            Validator::http_url(&self.url, "source.url"),
            Validator::not_empty(&self.user_agent, "source.user_agent"),
            Validator::in_range(self.timeout_secs, 1, 300, "source.timeout_secs"),
            Validator::not_empty(&self.selector, "source.selector"),
        ])
    }

    fn section_name(&self) -> &'static str {
        "source"
    }
}
