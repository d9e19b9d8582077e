//! The builder module runs the whole conversion: extract, de-duplicate, sort and write.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::PageEntry;
use crate::config::Config;
use crate::constants::LASTMOD_FORMAT;
use crate::error::SitemapError;
use crate::extract::extract_pages;
use crate::organize::{dedup_by_location, sort_by_priority};
use crate::serialize::{write_pages_json, write_sitemap};

/// Outcome of a successful generation.
#[derive(Debug)]
pub struct GenerationSummary {
    /// Entries as written, unique and sorted by descending priority
    pub entries: Vec<PageEntry>,
    /// Number of candidates found before de-duplication
    pub discovered: usize,
    pub sitemap_path: PathBuf,
    pub pages_json_path: Option<PathBuf>,
}

/// Builds sitemap.xml for the HTML page named by a [`Config`].
pub struct SitemapBuilder<'a> {
    config: &'a Config,
    generated_at: DateTime<Utc>,
}

impl<'a> SitemapBuilder<'a> {
    /// Creates a builder stamping entries with the current time.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            generated_at: Utc::now(),
        }
    }

    /// Overrides the generation time used as `lastmod`.
    #[must_use]
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// The `lastmod` value stamped on every entry.
    #[must_use]
    pub fn last_modified(&self) -> String {
        self.generated_at.format(LASTMOD_FORMAT).to_string()
    }

    /// Extracts, de-duplicates and sorts the entries, then writes sitemap.xml and,
    /// when enabled, sitemap_pages.json.
    ///
    /// # Returns
    ///
    /// Returns the written entries and output paths.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The HTML file is missing or unreadable
    /// * No entry was found (`EmptyResult`)
    /// * An output file cannot be written
    ///
    /// Nothing is written when an error is returned before the sitemap stage.
    pub fn generate(&self) -> Result<GenerationSummary, SitemapError> {
        let last_modified = self.last_modified();
        let discovered_entries = extract_pages(self.config, &last_modified)?;
        let discovered = discovered_entries.len();

        if discovered == 0 {
            return Err(SitemapError::EmptyResult(self.config.html_file.clone()));
        }

        let mut entries = dedup_by_location(discovered_entries);
        info!(
            "Found {} unique pages ({} candidates)",
            entries.len(),
            discovered
        );
        sort_by_priority(&mut entries);

        let sitemap_path = self.config.sitemap_path();
        write_sitemap(&entries, &sitemap_path)?;
        info!("Generated at {last_modified}");

        let pages_json_path = if self.config.write_pages_json {
            let path = self.config.pages_json_path();
            write_pages_json(&entries, &path)?;
            Some(path)
        } else {
            debug!("Skipping page details dump");
            None
        };

        for (index, entry) in entries.iter().enumerate() {
            info!(
                "  {}. {} (priority {}, {}) {}",
                index + 1,
                entry.location,
                entry.priority,
                entry.change_frequency,
                entry.title
            );
        }

        Ok(GenerationSummary {
            entries,
            discovered,
            sitemap_path,
            pages_json_path,
        })
    }
}
