//! The anchormap library reads a static HTML page, collects its navigable sections
//! and in-page anchors, and writes them out as a sitemap.xml with a companion robots.txt.

pub mod builder;
pub mod classify;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod organize;
pub mod robots;
pub mod serialize;
pub mod validate;

use serde::{Serialize, Serializer};

/// Enum representing the sitemap `changefreq` hint.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// Returns the value as written into the sitemap.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl std::fmt::Display for ChangeFrequency {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Sitemap priority stored in tenths, so it always renders with one decimal place
/// and compares exactly.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Priority(u8);

impl Priority {
    pub const HIGHEST: Priority = Priority(10);

    /// Builds a priority from a number of tenths, `None` when above 1.0.
    #[must_use]
    pub const fn from_tenths(tenths: u8) -> Option<Self> {
        if tenths <= 10 {
            Some(Priority(tenths))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One discoverable destination of the sitemap.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct PageEntry {
    /// Absolute URL, the base URL plus an optional `#fragment`.
    #[serde(rename = "loc")]
    pub location: String,
    /// Generation time, ISO-8601 with UTC offset.
    #[serde(rename = "lastmod")]
    pub last_modified: String,
    #[serde(rename = "changefreq")]
    pub change_frequency: ChangeFrequency,
    pub priority: Priority,
    /// Label for reports and the JSON dump, never written to the XML.
    pub title: String,
}

pub use builder::{GenerationSummary, SitemapBuilder};
pub use classify::{Classification, classify};
pub use config::Config;
pub use error::SitemapError;
pub use extract::{extract_entries, extract_pages};
pub use organize::{dedup_by_location, sort_by_priority};
pub use robots::{render_robots, write_robots};
pub use serialize::{write_pages_json, write_sitemap};
pub use validate::{ValidationReport, validate_sitemap};
