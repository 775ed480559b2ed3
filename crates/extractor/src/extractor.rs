//! Selector-driven anchor extraction

use crate::error::{ExtractError, ExtractResult};
use chapterfeed_core::ChapterEntry;
use scraper::{ElementRef, Html, Selector};

/// Anchors nested in the chapter containers of the table-of-contents page
pub const DEFAULT_SELECTOR: &str = "div.chapter-entry a";

/// Counters describing one extraction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Anchors matched by the selector
    pub matched: usize,
    /// Anchors turned into entries
    pub kept: usize,
    /// Anchors dropped for an empty title or missing/empty `href`
    pub skipped: usize,
}

/// Extracts chapter entries from HTML using a CSS selector
#[derive(Debug, Clone)]
pub struct EntryExtractor {
    selector: Selector,
    source: String,
}

impl EntryExtractor {
    /// Creates an extractor for `selector`
    pub fn new(selector: &str) -> ExtractResult<Self> {
        let parsed = Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            selector: parsed,
            source: selector.to_string(),
        })
    }

    /// The selector text this extractor was built from
    pub fn selector(&self) -> &str {
        &self.source
    }

    /// Extracts entries in document order
    pub fn extract(&self, html: &str) -> Vec<ChapterEntry> {
        self.extract_with_stats(html).0
    }

    /// Extracts entries in document order along with match counters
    pub fn extract_with_stats(&self, html: &str) -> (Vec<ChapterEntry>, ExtractionStats) {
        let document = Html::parse_document(html);
        let mut stats = ExtractionStats::default();
        let mut entries = Vec::new();

        for anchor in document.select(&self.selector) {
            stats.matched += 1;

            match to_entry(anchor) {
                Some(entry) => entries.push(entry),
                None => {
                    stats.skipped += 1;
                    log::debug!(
                        "Skipping anchor #{} without title or href: {}",
                        stats.matched,
                        anchor.html()
                    );
                }
            }
        }

        stats.kept = entries.len();
        (entries, stats)
    }
}

impl Default for EntryExtractor {
    fn default() -> Self {
        Self {
            selector: Selector::parse(DEFAULT_SELECTOR).expect("default selector is valid"),
            source: DEFAULT_SELECTOR.to_string(),
        }
    }
}

fn to_entry(anchor: ElementRef<'_>) -> Option<ChapterEntry> {
    let href = anchor.value().attr("href")?;
    let title: String = anchor.text().collect();
    ChapterEntry::new(title, href)
}
