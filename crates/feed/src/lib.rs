//! RSS 2.0 feed assembly and persistence
//!
//! This crate turns extracted chapter entries into an RSS 2.0 document:
//! - [`FeedBuilder`] reverses extraction order (newest first) and dates items
//! - [`Feed::to_rss_string`] serializes the document
//! - [`FeedWriter`] persists it atomically
//!
//! # Example
//!
//! ```rust
//! use chapterfeed_core::{ChapterEntry, UrlDateResolver};
//! use chapterfeed_feed::{ChannelInfo, FeedBuilder};
//!
//! let entries = vec![
//!     ChapterEntry::new("Chapter 1", "/2018/01/01/a/").unwrap(),
//!     ChapterEntry::new("Chapter 2", "/2018/06/15/b/").unwrap(),
//! ];
//!
//! let channel = ChannelInfo::new("Example", "https://example.com/toc/");
//! let feed = FeedBuilder::new(channel).build(entries, &UrlDateResolver);
//! assert_eq!(feed.items[0].title, "Chapter 2");
//!
//! let xml = feed.to_rss_string().expect("Failed to serialize feed");
//! assert!(xml.contains("<pubDate>Fri, 15 Jun 2018 00:00:00 +0000</pubDate>"));
//! ```

mod builder;
mod error;
mod feed;
mod rss;
mod writer;

pub use builder::FeedBuilder;
pub use error::{FeedError, FeedResult};
pub use feed::{ChannelInfo, Feed, FeedItem, DEFAULT_LANGUAGE};
pub use writer::FeedWriter;
