//! Chapter entries scraped from a table-of-contents page

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single chapter listed on the table-of-contents page
///
/// Entries are immutable once created. The title is stored trimmed and is
/// never empty; the link is stored exactly as it appeared in the markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterEntry {
    title: String,
    link: String,
}

impl ChapterEntry {
    /// Creates an entry, or `None` when the trimmed title or the link is empty
    pub fn new(title: impl AsRef<str>, link: impl Into<String>) -> Option<Self> {
        let title = title.as_ref().trim();
        let link = link.into();

        if title.is_empty() || link.is_empty() {
            return None;
        }

        Some(Self {
            title: title.to_string(),
            link,
        })
    }

    /// Chapter title, whitespace-trimmed
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Chapter link, verbatim (absolute or relative)
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Consumes the entry and returns `(title, link)`
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.link)
    }
}

impl fmt::Display for ChapterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.title, self.link)
    }
}
