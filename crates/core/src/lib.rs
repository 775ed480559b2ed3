//! Domain model shared by every ChapterFeed crate
//!
//! - [`ChapterEntry`]: one (title, link) pair scraped from a table of contents
//! - [`PublishDate`]: a calendar date recovered from a chapter link
//! - [`DateResolver`]: the seam the feed builder uses to date entries

pub mod resolver;
pub mod types;

pub use resolver::{resolve_date, DateResolver, UrlDateResolver};
pub use types::{ChapterEntry, PublishDate};
