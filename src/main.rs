//! anchormap is a CLI tool that reads a static HTML page, collects its sections and
//! in-page anchors, and writes sitemap.xml and robots.txt for search engines.
//!
//! A run performs three steps:
//! 1. Generate `sitemap.xml` (and `sitemap_pages.json`) from the HTML page
//! 2. Validate the written sitemap
//! 3. Write `robots.txt` pointing at the sitemap

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, error, info};

use anchormap::{
    Config, SitemapBuilder, constants::DEFAULT_CONFIG_FILE, robots::write_robots,
    validate::validate_sitemap,
};

/// A CLI tool to build sitemap.xml and robots.txt from a static HTML page
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON configuration file (keys: base_url, html_file)
    #[arg(long, short, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Site base URL, overrides the configuration file
    #[arg(long, short)]
    base_url: Option<String>,
    /// HTML file to read sections from, overrides the configuration file
    #[arg(long = "html-file", short = 'f')]
    html_file: Option<PathBuf>,
    /// Directory to write sitemap.xml, sitemap_pages.json and robots.txt into
    #[arg(long, short, default_value = ".")]
    output_dir: PathBuf,
    /// Do not write the sitemap_pages.json page details dump
    #[arg(long)]
    no_pages_json: bool,

    #[arg(long, short, action = clap::ArgAction::Count, help = "Output v(v...)erbosity: error (0), warn (1), info (2), debug (3), trace (4)", global = true, default_value_t = 2)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let config = build_config(cli)?;

    info!("Site URL: {}", config.base_url);
    info!("HTML file: {}", config.html_file.display());

    let summary = SitemapBuilder::new(&config)
        .generate()
        .context("Sitemap generation failed")?;

    info!("Validating {}...", summary.sitemap_path.display());
    let validation = validate_sitemap(&summary.sitemap_path);
    if let Err(err) = &validation {
        error!("Sitemap validation failed: {err}");
    }

    write_robots(&config).context("Failed to write robots.txt")?;

    validation.context("Sitemap validation failed")?;
    Ok(())
}

fn build_config(cli: Cli) -> Result<Config> {
    let mut config = Config::load_or_default(&cli.config);

    if let Some(base_url) = cli.base_url {
        config = config
            .with_base_url(&base_url)
            .context("Invalid --base-url")?;
    }
    if let Some(html_file) = cli.html_file {
        config.html_file = html_file;
    }
    config.output_dir = cli.output_dir;
    config.write_pages_json = !cli.no_pages_json;

    Ok(config)
}
