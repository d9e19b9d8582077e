//! The extract module walks an HTML page and collects the candidate sitemap entries:
//! the site root, every `<section>` carrying an id, and every in-page `#anchor` link
//! that no section already produced.

use std::fs;
use std::io::ErrorKind;

use log::{debug, info};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::classify::{Classification, classify};
use crate::config::Config;
use crate::constants::{ANCHOR_LINK_SELECTOR, SECTION_SELECTOR, TITLE_SELECTOR};
use crate::error::SitemapError;
use crate::{ChangeFrequency, PageEntry, Priority};

static SECTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(SECTION_SELECTOR).expect("Failed to parse SECTION selector"));
static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(TITLE_SELECTOR).expect("Failed to parse TITLE selector"));
static ANCHOR_LINK: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(ANCHOR_LINK_SELECTOR).expect("Failed to parse ANCHOR_LINK selector")
});

const ROOT_TITLE: &str = "Home";

/// Reads the configured HTML file and extracts its entries.
///
/// # Arguments
///
/// * `config` - Run configuration providing the HTML path and base URL
/// * `last_modified` - Timestamp stamped on every entry
///
/// # Returns
///
/// The entries in discovery order, root first, not de-duplicated.
///
/// # Errors
///
/// Returns an error if:
/// * The HTML file does not exist (`SourceMissing`)
/// * The file is not valid UTF-8 (`HtmlParse`)
/// * The file cannot be read (`Io`)
pub fn extract_pages(config: &Config, last_modified: &str) -> Result<Vec<PageEntry>, SitemapError> {
    let html = match fs::read_to_string(&config.html_file) {
        Ok(html) => html,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(SitemapError::SourceMissing(config.html_file.clone()));
        }
        Err(err) if err.kind() == ErrorKind::InvalidData => {
            return Err(SitemapError::HtmlParse(format!(
                "{}: {err}",
                config.html_file.display()
            )));
        }
        Err(err) => return Err(err.into()),
    };

    info!("Parsing HTML file {}", config.html_file.display());
    Ok(extract_entries(&html, &config.base_url, last_modified))
}

/// Extracts the entries of an HTML document.
///
/// `base_url` is expected without a trailing slash.
#[must_use]
pub fn extract_entries(html: &str, base_url: &str, last_modified: &str) -> Vec<PageEntry> {
    let document = Html::parse_document(html);
    let entry = |location: String, title: String, classification: Classification| PageEntry {
        location,
        last_modified: last_modified.to_string(),
        change_frequency: classification.change_frequency,
        priority: classification.priority,
        title,
    };

    let mut entries = vec![entry(
        format!("{base_url}/"),
        ROOT_TITLE.to_string(),
        Classification {
            priority: Priority::HIGHEST,
            change_frequency: ChangeFrequency::Weekly,
        },
    )];

    for section in document.select(&SECTION) {
        let Some(identifier) = section.value().id().filter(|id| !id.is_empty()) else {
            continue;
        };

        let title = section
            .select(&TITLE)
            .next()
            .map_or_else(|| humanize_identifier(identifier), element_text);

        entries.push(entry(
            format!("{base_url}/#{identifier}"),
            title,
            classify(identifier, Some(section)),
        ));
    }

    let section_count = entries.len() - 1;

    for link in document.select(&ANCHOR_LINK) {
        let Some(identifier) = link
            .value()
            .attr("href")
            .and_then(|href| href.strip_prefix('#'))
            .filter(|id| !id.is_empty())
        else {
            continue;
        };

        let location = format!("{base_url}/#{identifier}");
        if entries.iter().any(|known| known.location == location) {
            continue;
        }

        let text = element_text(link);
        let title = if text.is_empty() {
            humanize_identifier(identifier)
        } else {
            text
        };

        entries.push(entry(location, title, classify(identifier, None)));
    }

    debug!(
        "Extracted {} sections and {} anchor links",
        section_count,
        entries.len() - 1 - section_count
    );

    entries
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Turns `tech-stack` or `tech_stack` into `Tech Stack`.
fn humanize_identifier(identifier: &str) -> String {
    identifier
        .replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
