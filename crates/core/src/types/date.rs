//! Publication dates recovered from chapter links

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RFC 822 layout used for `<pubDate>`; time of day is always midnight UTC
const RFC822_MIDNIGHT: &str = "%a, %d %b %Y 00:00:00 +0000";

/// A calendar date attached to a chapter, interpreted as midnight UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PublishDate(NaiveDate);

impl PublishDate {
    /// Builds a date from its parts, or `None` if the combination does not exist
    ///
    /// Year 0 is rejected along with impossible months and days.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if year < 1 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The date as an instant at 00:00:00 UTC
    pub fn to_datetime(&self) -> DateTime<Utc> {
        self.0.and_time(chrono::NaiveTime::MIN).and_utc()
    }

    /// Formats the date for an RSS `<pubDate>`, e.g. `Sat, 07 Sep 2002 00:00:00 +0000`
    pub fn to_rfc822(&self) -> String {
        self.0.format(RFC822_MIDNIGHT).to_string()
    }
}

impl fmt::Display for PublishDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(RFC822_MIDNIGHT))
    }
}
