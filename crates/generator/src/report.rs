//! Summary of a generation run

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Page the chapters were scraped from
    pub source_url: String,
    /// File written, `None` when the feed was rendered without writing
    pub output: Option<PathBuf>,
    /// Anchors matched by the chapter selector
    pub matched_anchors: usize,
    /// Items in the feed
    pub items: usize,
    /// Items carrying a `<pubDate>`
    pub dated_items: usize,
    /// Anchors dropped for an empty title or link
    pub skipped: usize,
}

impl GenerationReport {
    /// Items emitted without a `<pubDate>`
    pub fn undated_items(&self) -> usize {
        self.items - self.dated_items
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} items ({} dated, {} undated, {} skipped) from {}",
            self.items,
            self.dated_items,
            self.undated_items(),
            self.skipped,
            self.source_url
        )?;
        if let Some(path) = &self.output {
            write!(f, " -> {}", path.display())?;
        }
        Ok(())
    }
}
