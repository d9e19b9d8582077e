use std::path::PathBuf;

/// Errors that can occur while building, validating or publishing a sitemap
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    #[error("HTML file {} does not exist", .0.display())]
    SourceMissing(PathBuf),

    #[error("Failed to parse HTML: {0}")]
    HtmlParse(String),

    #[error("Failed to parse sitemap XML: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("Malformed sitemap: {0}")]
    MalformedSitemap(String),

    #[error("Unexpected sitemap root element: {0}")]
    UnexpectedRoot(String),

    #[error("Sitemap {} does not exist", .0.display())]
    SitemapMissing(PathBuf),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("No pages found in {}", .0.display())]
    EmptyResult(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
