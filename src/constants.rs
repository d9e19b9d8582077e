pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const SITEMAP_SCHEMA_LOCATION: &str =
    "http://www.sitemaps.org/schemas/sitemap/0.9 http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd";

pub const DEFAULT_BASE_URL: &str = "https://yourdomain.com";
pub const DEFAULT_HTML_FILE: &str = "index.html";
pub const DEFAULT_CONFIG_FILE: &str = "sitemap_config.json";

pub const SITEMAP_FILE_NAME: &str = "sitemap.xml";
pub const PAGES_JSON_FILE_NAME: &str = "sitemap_pages.json";
pub const ROBOTS_FILE_NAME: &str = "robots.txt";

/// `lastmod` format; the timestamp is always taken in UTC.
pub const LASTMOD_FORMAT: &str = "%Y-%m-%dT%H:%M:%S+00:00";

pub(crate) const SECTION_SELECTOR: &str = "section[id]";
pub(crate) const TITLE_SELECTOR: &str = "h1, h2, h3";
pub(crate) const ANCHOR_LINK_SELECTOR: &str = "a[href^='#']";
pub(crate) const PUBLICATION_CONTENT_SELECTOR: &str = "article[class], div[class]";
pub(crate) const PROJECT_CONTENT_SELECTOR: &str = "div[class]";

pub(crate) const PUBLICATION_CLASS_PATTERN: &str = r"(?i)publication|paper";
pub(crate) const PROJECT_CLASS_PATTERN: &str = r"(?i)project|work";
