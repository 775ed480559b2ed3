//! Error types for feed generation runs

use chapterfeed_config::ConfigError;
use chapterfeed_extractor::ExtractError;
use chapterfeed_feed::FeedError;
use chapterfeed_network::NetworkError;
use thiserror::Error;

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Errors that abort a generation run
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Configuration is invalid
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// HTTP client could not be set up
    #[error("Failed to set up HTTP client: {0}")]
    Client(#[source] NetworkError),

    /// Source page could not be fetched; nothing was written
    #[error("Error fetching page {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: NetworkError,
    },

    /// Chapter selector is unusable
    #[error("Failed to set up extractor: {0}")]
    Extract(#[from] ExtractError),

    /// Feed could not be serialized or persisted
    #[error("Failed to write feed: {0}")]
    Write(#[from] FeedError),
}

impl GeneratorError {
    /// True when the run stopped before the output file was touched
    pub fn is_fatal_before_output(&self) -> bool {
        !matches!(self, GeneratorError::Write(_))
    }

    /// True for problems the operator fixes in configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, GeneratorError::Config(_) | GeneratorError::Extract(_))
    }
}
