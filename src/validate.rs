//! The validate module re-reads a written sitemap and reports how many of its URLs
//! carry every required field.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{info, warn};
use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};

use crate::constants::SITEMAP_NAMESPACE;
use crate::error::SitemapError;

const URLSET_TAG: &[u8] = b"urlset";
const URL_TAG: &[u8] = b"url";
const LEAF_TAGS: [&[u8]; 4] = [b"loc", b"lastmod", b"changefreq", b"priority"];

/// Counts gathered from a sitemap document.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ValidationReport {
    /// Every `url` element in the sitemap namespace
    pub total_urls: usize,
    /// URLs holding `loc`, `lastmod`, `changefreq` and `priority`
    pub valid_urls: usize,
}

/// A `url` element still open while reading, with the leaves seen so far.
struct OpenUrl {
    depth: usize,
    leaves: [bool; 4],
}

/// Checks that the file at `path` is a well-formed sitemap and counts its URLs.
///
/// Incomplete URLs are only reflected in the counts; they do not fail validation.
///
/// # Errors
///
/// Returns an error if:
/// * The file does not exist (`SitemapMissing`)
/// * The XML is malformed (`XmlParse`, `MalformedSitemap`)
/// * The root is not the sitemap namespace `urlset` (`UnexpectedRoot`)
pub fn validate_sitemap(path: &Path) -> Result<ValidationReport, SitemapError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(SitemapError::SitemapMissing(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };

    let report = inspect_sitemap(&content)?;

    info!("Sitemap {} is valid", path.display());
    info!("Total URLs: {}", report.total_urls);
    info!("Valid URLs: {}", report.valid_urls);
    if report.valid_urls < report.total_urls {
        warn!(
            "{} URLs are missing required fields",
            report.total_urls - report.valid_urls
        );
    }

    Ok(report)
}

/// Same checks as [`validate_sitemap`] on an in-memory document.
///
/// # Errors
///
/// Returns an error if the XML is malformed or its root is not the sitemap `urlset`.
pub fn inspect_sitemap(xml: &str) -> Result<ValidationReport, SitemapError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().expand_empty_elements = true;

    let mut report = ValidationReport::default();
    let mut open_urls: Vec<OpenUrl> = Vec::new();
    let mut depth = 0;
    let mut root_seen = false;
    let mut root_closed = false;

    loop {
        let (namespace, event) = reader.read_resolved_event()?;
        let in_sitemap_namespace = matches!(
            namespace,
            ResolveResult::Bound(Namespace(ns)) if ns == SITEMAP_NAMESPACE.as_bytes()
        );

        match event {
            Event::Start(element) => {
                let local_name = element.local_name();
                if root_closed {
                    return Err(SitemapError::MalformedSitemap(format!(
                        "element <{}> after the root element",
                        String::from_utf8_lossy(element.name().as_ref())
                    )));
                }
                if !root_seen {
                    if !in_sitemap_namespace || local_name.as_ref() != URLSET_TAG {
                        let namespace = if let ResolveResult::Bound(Namespace(ns)) = namespace {
                            format!("{{{}}}", String::from_utf8_lossy(ns))
                        } else {
                            String::new()
                        };
                        return Err(SitemapError::UnexpectedRoot(format!(
                            "{namespace}{}",
                            String::from_utf8_lossy(local_name.as_ref())
                        )));
                    }
                    root_seen = true;
                } else if in_sitemap_namespace {
                    if local_name.as_ref() == URL_TAG {
                        report.total_urls += 1;
                        open_urls.push(OpenUrl {
                            depth,
                            leaves: [false; 4],
                        });
                    } else if let Some(index) =
                        LEAF_TAGS.iter().position(|tag| *tag == local_name.as_ref())
                        && let Some(url) = open_urls.last_mut()
                        && url.depth + 1 == depth
                        && let Some(seen) = url.leaves.get_mut(index)
                    {
                        *seen = true;
                    }
                }
                depth += 1;
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    root_closed = true;
                }
                if open_urls.last().is_some_and(|url| url.depth == depth)
                    && let Some(url) = open_urls.pop()
                    && url.leaves.iter().all(|seen| *seen)
                {
                    report.valid_urls += 1;
                }
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| SitemapError::MalformedSitemap(format!("invalid text: {e}")))?;
                if depth == 0 && !text.trim().is_empty() {
                    return Err(SitemapError::MalformedSitemap(
                        "text outside the root element".to_string(),
                    ));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !root_seen {
        return Err(SitemapError::MalformedSitemap(
            "document has no root element".to_string(),
        ));
    }
    if depth != 0 {
        return Err(SitemapError::MalformedSitemap(format!(
            "{depth} elements left unclosed"
        )));
    }

    Ok(report)
}
