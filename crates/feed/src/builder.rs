//! Assembly of a [`Feed`] from extracted chapter entries

use crate::feed::{ChannelInfo, Feed, FeedItem};
use chapterfeed_core::{ChapterEntry, DateResolver};

/// Builds feeds for one channel
#[derive(Debug, Clone)]
pub struct FeedBuilder {
    channel: ChannelInfo,
}

impl FeedBuilder {
    pub fn new(channel: ChannelInfo) -> Self {
        Self { channel }
    }

    /// Builds a feed from entries in extraction order (oldest first)
    ///
    /// Items come out newest first. Each item is dated by `resolver`; an
    /// undated link produces an item without `<pubDate>`.
    pub fn build<I, R>(&self, entries: I, resolver: &R) -> Feed
    where
        I: IntoIterator<Item = ChapterEntry>,
        I::IntoIter: DoubleEndedIterator,
        R: DateResolver + ?Sized,
    {
        let mut feed = Feed::new(self.channel.clone());

        for entry in entries.into_iter().rev() {
            let published = resolver.resolve(entry.link());
            if published.is_none() {
                log::debug!("No date found in link {}", entry.link());
            }

            let (title, link) = entry.into_parts();
            feed.add_item(FeedItem::new(title, link).with_published(published));
        }

        feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chapterfeed_core::{PublishDate, UrlDateResolver};

    fn entry(title: &str, link: &str) -> ChapterEntry {
        ChapterEntry::new(title, link).expect("valid entry")
    }

    fn builder() -> FeedBuilder {
        FeedBuilder::new(ChannelInfo::new("Test", "https://example.com/toc/"))
    }

    #[test]
    fn test_items_are_reversed() {
        let entries = vec![entry("e1", "/1/"), entry("e2", "/2/"), entry("e3", "/3/")];
        let feed = builder().build(entries, &UrlDateResolver);

        let titles: Vec<_> = feed.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["e3", "e2", "e1"]);
    }

    #[test]
    fn test_items_are_dated_from_links() {
        let entries = vec![entry("Chapter 1", "/2018/01/01/a/"), entry("Glossary", "/glossary/")];
        let feed = builder().build(entries, &UrlDateResolver);

        assert!(feed.items[0].published.is_none());
        assert_eq!(feed.items[1].published, PublishDate::from_ymd(2018, 1, 1));
    }

    #[test]
    fn test_custom_resolver() {
        let fixed = |_: &str| PublishDate::from_ymd(1999, 12, 31);
        let feed = builder().build(vec![entry("x", "/no-date/")], &fixed);
        assert_eq!(feed.items[0].published, PublishDate::from_ymd(1999, 12, 31));
    }

    #[test]
    fn test_empty_input() {
        let feed = builder().build(Vec::new(), &UrlDateResolver);
        assert!(feed.is_empty());
        assert_eq!(feed.channel.link, "https://example.com/toc/");
    }

    #[test]
    fn test_link_and_guid_identical() {
        let feed = builder().build(vec![entry("x", "https://e.com/?a=1&b=2")], &UrlDateResolver);
        assert_eq!(feed.items[0].link, "https://e.com/?a=1&b=2");
        assert_eq!(feed.items[0].guid, feed.items[0].link);
    }
}
