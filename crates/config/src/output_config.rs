//! Output file settings

use crate::validation::{ConfigSection, ValidationError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Feed file path (relative paths resolve against the working directory)
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("feed.xml"),
        }
    }
}

impl ConfigSection for OutputConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        if self.path.as_os_str().is_empty() {
            return Err(vec![ValidationError::new("output.path", "must not be empty")]);
        }
        Ok(())
    }

    fn section_name(&self) -> &'static str {
        "output"
    }
}
