//! Pipeline entry point

use crate::error::{GeneratorError, GeneratorResult};
use crate::report::GenerationReport;
use chapterfeed_config::Config;
use chapterfeed_core::UrlDateResolver;
use chapterfeed_extractor::{EntryExtractor, ExtractionStats};
use chapterfeed_feed::{ChannelInfo, Feed, FeedBuilder, FeedWriter};
use chapterfeed_network::{Client, ClientConfig};

/// A feed built in memory together with its extraction counters
#[derive(Debug, Clone)]
pub struct RenderedFeed {
    pub feed: Feed,
    pub stats: ExtractionStats,
}

/// Runs one fetch-and-generate cycle for a configuration
pub struct FeedGenerator {
    config: Config,
    client: Client,
    extractor: EntryExtractor,
}

impl FeedGenerator {
    /// Validates `config` and prepares the HTTP client and extractor
    pub fn new(config: Config) -> GeneratorResult<Self> {
        config.ensure_valid()?;

        let client = Client::with_config(ClientConfig {
            timeout: config.source.timeout(),
            user_agent: config.source.user_agent.clone(),
            ..ClientConfig::default()
        })
        .map_err(GeneratorError::Client)?;

        let extractor = EntryExtractor::new(&config.source.selector)?;

        Ok(Self {
            config,
            client,
            extractor,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches, extracts and builds the feed without writing it
    pub async fn render(&self) -> GeneratorResult<RenderedFeed> {
        let url = &self.config.source.url;

        log::info!("Fetching {}...", url);
        let html = self
            .client
            .fetch_text(url)
            .await
            .map_err(|source| GeneratorError::Fetch {
                url: url.clone(),
                source,
            })?;

        let (entries, stats) = self.extractor.extract_with_stats(&html);
        log::info!("Found {} chapters.", stats.kept);

        if entries.is_empty() {
            log::warn!(
                "No chapters matched `{}` on {}; the feed will have no items",
                self.extractor.selector(),
                url
            );
        } else if stats.skipped > 0 {
            log::info!("Skipped {} anchors without a title or link", stats.skipped);
        }

        let feed = FeedBuilder::new(self.channel()).build(entries, &UrlDateResolver);

        Ok(RenderedFeed { feed, stats })
    }

    /// Runs the full pipeline and writes the feed to the configured path
    pub async fn generate(&self) -> GeneratorResult<GenerationReport> {
        let rendered = self.render().await?;
        let path = &self.config.output.path;

        FeedWriter::new(path).write(&rendered.feed)?;
        log::info!("Successfully generated {}", path.display());

        Ok(self.report(&rendered, Some(path.clone())))
    }

    /// Summarizes a rendered feed
    pub fn report(
        &self,
        rendered: &RenderedFeed,
        output: Option<std::path::PathBuf>,
    ) -> GenerationReport {
        GenerationReport {
            source_url: self.config.source.url.clone(),
            output,
            matched_anchors: rendered.stats.matched,
            items: rendered.feed.item_count(),
            dated_items: rendered.feed.dated_count(),
            skipped: rendered.stats.skipped,
        }
    }

    fn channel(&self) -> ChannelInfo {
        let channel = &self.config.channel;
        ChannelInfo::new(&channel.title, &self.config.source.url)
            .with_description(&channel.description)
            .with_language(&channel.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = Config::default();
        config.source.url = "nope".to_string();

        let result = FeedGenerator::new(config);
        assert!(matches!(result, Err(GeneratorError::Config(_))));
    }

    #[test]
    fn test_new_rejects_bad_selector() {
        let mut config = Config::default();
        config.source.selector = "div[".to_string();

        let result = FeedGenerator::new(config);
        assert!(matches!(result, Err(GeneratorError::Extract(_))));
    }

    #[test]
    fn test_channel_uses_source_url_as_link() {
        let generator = FeedGenerator::new(Config::default()).expect("default config is valid");
        let channel = generator.channel();

        assert_eq!(channel.title, "The Wandering Inn (Full History)");
        assert_eq!(channel.link, "https://wanderinginn.com/table-of-contents/");
        assert_eq!(channel.language, "en-us");
    }
}
