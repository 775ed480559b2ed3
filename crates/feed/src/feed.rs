//! Feed data structures

use chapterfeed_core::PublishDate;
use serde::{Deserialize, Serialize};

/// Language code emitted in `<language>` unless configured otherwise
pub const DEFAULT_LANGUAGE: &str = "en-us";

/// Channel-level metadata; fixed by configuration, never scraped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelInfo {
    /// Feed title
    pub title: String,
    /// Feed link (the source page URL)
    pub link: String,
    /// Feed description
    pub description: String,
    /// Feed language code
    pub language: String,
}

impl ChannelInfo {
    /// Creates channel metadata with an empty description and the default language
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            description: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the language code
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// An RSS document: channel metadata plus items in output order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    /// Channel metadata
    pub channel: ChannelInfo,
    /// Items, newest first
    pub items: Vec<FeedItem>,
}

impl Feed {
    /// Creates an empty feed
    pub fn new(channel: ChannelInfo) -> Self {
        Self {
            channel,
            items: Vec::new(),
        }
    }

    /// Returns the number of items in the feed
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the feed has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items carrying a publication date
    pub fn dated_count(&self) -> usize {
        self.items.iter().filter(|item| item.published.is_some()).count()
    }

    /// Appends an item after the existing ones
    pub fn add_item(&mut self, item: FeedItem) {
        self.items.push(item);
    }
}

/// A single `<item>` in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Item title (unescaped)
    pub title: String,
    /// Item link, verbatim from the source page
    pub link: String,
    /// Opaque identifier; always equal to `link`
    pub guid: String,
    /// Publication date, omitted from output when absent
    pub published: Option<PublishDate>,
}

impl FeedItem {
    /// Creates an item whose GUID mirrors its link
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        let link = link.into();
        Self {
            title: title.into(),
            guid: link.clone(),
            link,
            published: None,
        }
    }

    /// Attaches a publication date
    pub fn with_published(mut self, published: Option<PublishDate>) -> Self {
        self.published = published;
        self
    }
}
