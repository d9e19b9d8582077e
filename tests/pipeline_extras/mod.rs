use std::fs;
use std::path::PathBuf;

use anchormap::Config;
use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

pub(crate) const BASE_URL: &str = "https://x.test";

pub(crate) const PORTFOLIO_HTML: &str = r##"<!DOCTYPE html>
<html>
<head><title>Portfolio</title></head>
<body>
  <nav>
    <a href="#about-me">About</a>
    <a href="#publications">Publications</a>
    <a href="#contact">Contact</a>
    <a href="#">Top</a>
    <a href="https://elsewhere.test/#about-me">External</a>
  </nav>
  <section id="about-me"><h2>About</h2><p>Hello</p></section>
  <section id="publications"><h2>Selected <em>Papers</em></h2></section>
  <section id="gallery"><div class="project-card">x</div></section>
  <section id="talks"></section>
  <section id="about-me"><h3>Duplicate</h3></section>
  <section id="">ignored</section>
  <footer><a href="#news-feed"></a></footer>
</body>
</html>
"##;

/// Temporary site directory holding an HTML page and receiving the outputs.
pub(crate) struct Site {
    pub dir: TempDir,
    pub config: Config,
}

impl Site {
    pub fn new(html: Option<&str>) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let html_file = dir.path().join("index.html");
        if let Some(html) = html {
            fs::write(&html_file, html).expect("Failed to write HTML fixture");
        }

        let config = Config {
            html_file,
            output_dir: dir.path().to_path_buf(),
            ..Config::default()
        }
        .with_base_url(BASE_URL)
        .expect("Invalid base URL");

        Self { dir, config }
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub(crate) fn generated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 0)
        .single()
        .expect("Invalid fixture time")
}
