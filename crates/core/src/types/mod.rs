//! Domain types
//!
//! - `entry`: chapter entries extracted from the source page
//! - `date`: publication dates attached to entries

mod date;
mod entry;

pub use date::PublishDate;
pub use entry::ChapterEntry;
