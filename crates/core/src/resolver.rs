//! Date resolution from chapter links
//!
//! Chapter URLs on blog-style sites usually carry their publication date as
//! path segments, e.g. `https://example.com/2018/04/10/4-27-h/`. The resolver
//! looks for the leftmost `/YYYY/MM/DD/` fragment and turns it into a
//! [`PublishDate`]. Anything else degrades to "no date".

use crate::types::PublishDate;
use regex::Regex;
use std::sync::LazyLock;

static DATE_SEGMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/([0-9]{4})/([0-9]{2})/([0-9]{2})/").expect("date pattern is a valid regex")
});

/// Something that can date a chapter from its link
pub trait DateResolver {
    /// Returns the publication date for `link`, or `None` when it cannot be determined
    fn resolve(&self, link: &str) -> Option<PublishDate>;
}

impl<F> DateResolver for F
where
    F: Fn(&str) -> Option<PublishDate>,
{
    fn resolve(&self, link: &str) -> Option<PublishDate> {
        self(link)
    }
}

/// Resolves dates from `/YYYY/MM/DD/` path fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlDateResolver;

impl DateResolver for UrlDateResolver {
    fn resolve(&self, link: &str) -> Option<PublishDate> {
        resolve_date(link)
    }
}

/// Extracts the date encoded in the leftmost `/YYYY/MM/DD/` fragment of `link`
///
/// Only the leftmost fragment is considered: if it names an impossible date
/// the result is `None` even when a later fragment would be valid.
pub fn resolve_date(link: &str) -> Option<PublishDate> {
    let captures = DATE_SEGMENTS.captures(link)?;

    let year = captures[1].parse().ok()?;
    let month = captures[2].parse().ok()?;
    let day = captures[3].parse().ok()?;

    PublishDate::from_ymd(year, month, day)
}
