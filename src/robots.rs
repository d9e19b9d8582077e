use std::fs;

use log::info;

use crate::config::Config;
use crate::constants::SITEMAP_FILE_NAME;
use crate::error::SitemapError;

/// Renders a robots.txt allowing every crawler everywhere and pointing at the sitemap.
#[must_use]
pub fn render_robots(base_url: &str) -> String {
    format!(
        "User-agent: *
Allow: /

# Sitemap
Sitemap: {base_url}/{SITEMAP_FILE_NAME}

# Disallowed paths (examples)
# Disallow: /admin/
# Disallow: /private/

# Crawl delay
Crawl-delay: 1
"
    )
}

/// Writes robots.txt into the configured output directory, replacing any previous one.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_robots(config: &Config) -> Result<(), SitemapError> {
    let path = config.robots_path();
    fs::write(&path, render_robots(&config.base_url))?;

    info!("Wrote {}", path.display());
    Ok(())
}
