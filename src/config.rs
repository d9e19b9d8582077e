//! The config module holds the immutable run configuration and loads the optional
//! JSON configuration file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;
use url::Url;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_HTML_FILE, PAGES_JSON_FILE_NAME, ROBOTS_FILE_NAME, SITEMAP_FILE_NAME,
};
use crate::error::SitemapError;

/// Settings shared by every stage of a run. Built once at startup.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    /// Site URL without trailing slash
    pub base_url: String,
    /// HTML page to read sections from
    pub html_file: PathBuf,
    /// Directory receiving sitemap.xml, sitemap_pages.json and robots.txt
    pub output_dir: PathBuf,
    /// Whether to dump the entries as JSON next to the sitemap
    pub write_pages_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            html_file: PathBuf::from(DEFAULT_HTML_FILE),
            output_dir: PathBuf::from("."),
            write_pages_json: true,
        }
    }
}

/// Recognized keys of `sitemap_config.json`; anything else is ignored.
#[derive(Deserialize, Default, Debug)]
#[serde(default)]
struct ConfigFile {
    base_url: Option<String>,
    html_file: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration file at `path` on top of the defaults.
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `SitemapError::ConfigInvalid` if the file is not a JSON object of the
    /// expected shape or if `base_url` is not an absolute http(s) URL, and
    /// `SitemapError::Io` if the file exists but cannot be read.
    pub fn load(path: &Path) -> Result<Self, SitemapError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };

        let file: ConfigFile = serde_json::from_str(&content)
            .map_err(|e| SitemapError::ConfigInvalid(format!("{}: {e}", path.display())))?;

        let mut config = Self::default();
        if let Some(base_url) = file.base_url {
            config = config.with_base_url(&base_url)?;
        }
        if let Some(html_file) = file.html_file {
            config.html_file = html_file;
        }

        info!("Loaded configuration file {}", path.display());
        Ok(config)
    }

    /// Same as [`Config::load`], but falls back to the defaults when the file is
    /// malformed, logging the reason.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("{err}, using default configuration");
                Self::default()
            }
        }
    }

    /// Replaces the base URL after checking it is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns `SitemapError::ConfigInvalid` if `base_url` cannot be parsed or uses
    /// another scheme.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, SitemapError> {
        let base_url = base_url.trim();
        let parsed = Url::parse(base_url)
            .map_err(|e| SitemapError::ConfigInvalid(format!("base_url {base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SitemapError::ConfigInvalid(format!(
                "base_url {base_url} is not an http(s) URL"
            )));
        }

        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    #[must_use]
    pub fn sitemap_path(&self) -> PathBuf {
        self.output_dir.join(SITEMAP_FILE_NAME)
    }

    #[must_use]
    pub fn pages_json_path(&self) -> PathBuf {
        self.output_dir.join(PAGES_JSON_FILE_NAME)
    }

    #[must_use]
    pub fn robots_path(&self) -> PathBuf {
        self.output_dir.join(ROBOTS_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectral::prelude::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("sitemap_config.json");
        fs::write(&path, content).expect("Failed to write config");
        (dir, path)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load(&dir.path().join("absent.json")).expect("Expected defaults");

        assert_that(&config).is_equal_to(Config::default());
    }

    #[test]
    fn keys_override_defaults() {
        let (_dir, path) =
            write_config(r#"{"base_url": "https://x.test/", "html_file": "site/home.html"}"#);
        let config = Config::load(&path).expect("Expected valid config");

        assert_that(&config.base_url.as_str()).is_equal_to("https://x.test");
        assert_that(&config.html_file).is_equal_to(PathBuf::from("site/home.html"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let (_dir, path) = write_config(r#"{"theme": "dark"}"#);
        let config = Config::load(&path).expect("Expected valid config");

        assert_that(&config).is_equal_to(Config::default());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let (_dir, path) = write_config("{ base_url: ");

        assert_that(&matches!(
            Config::load(&path),
            Err(SitemapError::ConfigInvalid(_))
        ))
        .is_true();
        assert_that(&Config::load_or_default(&path)).is_equal_to(Config::default());
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let (_dir, path) = write_config(r#"{"base_url": 42}"#);

        assert_that(&matches!(
            Config::load(&path),
            Err(SitemapError::ConfigInvalid(_))
        ))
        .is_true();
    }

    #[test]
    fn base_url_is_trimmed_before_storing() {
        let config = Config::default()
            .with_base_url(" https://x.test/ \n")
            .expect("Expected valid base URL");

        assert_that(&config.base_url.as_str()).is_equal_to("https://x.test");
    }

    #[test]
    fn padded_base_url_in_file_is_trimmed() {
        let (_dir, path) = write_config(r#"{"base_url": "  https://x.test/  "}"#);
        let config = Config::load(&path).expect("Expected valid config");

        assert_that(&config.base_url.as_str()).is_equal_to("https://x.test");
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        assert_that(&Config::default().with_base_url("ftp://x.test").is_err()).is_true();
        assert_that(&Config::default().with_base_url("not a url").is_err()).is_true();
    }
}
