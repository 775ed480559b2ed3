//! Chapter extraction from table-of-contents HTML
//!
//! The extractor runs a CSS selector over the parsed document and turns each
//! matching anchor into a [`ChapterEntry`](chapterfeed_core::ChapterEntry).
//! Anchors without usable text or `href` are skipped, never reported as errors.
//!
//! # Example
//!
//! ```rust
//! use chapterfeed_extractor::EntryExtractor;
//!
//! let html = r#"<div class="chapter-entry"><a href="/2018/01/01/a/">Chapter 1</a></div>"#;
//! let entries = EntryExtractor::default().extract(html);
//! assert_eq!(entries[0].title(), "Chapter 1");
//! ```

mod error;
mod extractor;

pub use error::{ExtractError, ExtractResult};
pub use extractor::{EntryExtractor, ExtractionStats, DEFAULT_SELECTOR};
