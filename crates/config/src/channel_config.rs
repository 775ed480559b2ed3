//! Channel metadata settings

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Fixed `<channel>` metadata; the channel link is always the source URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChannelConfig {
    pub title: String,
    pub description: String,
    pub language: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            title: "The Wandering Inn (Full History)".to_string(),
            description: "Automated feed of all Wandering Inn chapters.".to_string(),
            language: "en-us".to_string(),
        }
    }
}

impl ConfigSection for ChannelConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![
            Validator::not_empty(&self.title, "channel.title"),
            Validator::not_empty(&self.language, "channel.language"),
        ])
    }

    fn section_name(&self) -> &'static str {
        "channel"
    }
}
