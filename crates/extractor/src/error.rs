//! Error types for entry extraction

use thiserror::Error;

/// Result type for extractor operations
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors that can occur while setting up extraction
///
/// Extraction itself never fails: malformed markup is parsed leniently and
/// unusable anchors are skipped.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The configured CSS selector could not be parsed
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
}
