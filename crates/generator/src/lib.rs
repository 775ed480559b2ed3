//! The fetch → extract → build → write pipeline
//!
//! [`FeedGenerator`] wires the network, extractor and feed crates together
//! from a single [`Config`](chapterfeed_config::Config) value. A fetch
//! failure aborts before anything is written; an undated chapter only loses
//! its `<pubDate>`.

mod error;
mod generator;
mod report;

pub use error::{GeneratorError, GeneratorResult};
pub use generator::{FeedGenerator, RenderedFeed};
pub use report::GenerationReport;
