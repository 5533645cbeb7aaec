use clap::Parser;
use deck_harvest::{DownloaderConfig, Result};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deck-harvest")]
#[command(about = "Downloads every presentation of a profile as PDF")]
#[command(version)]
pub struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the per-user folders are created in
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// WebDriver server URL (overrides WEBDRIVER_URL)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Show the browser window
    #[arg(long)]
    pub headful: bool,

    /// Maximum number of listing pages to visit
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Only collect links and write them to this file
    #[arg(long, value_name = "FILE")]
    pub links_only: Option<PathBuf>,
}

impl Args {
    /// Configuration file (or defaults), then environment, then flags
    pub fn load_config(&self) -> Result<DownloaderConfig> {
        let mut config = match &self.config {
            Some(path) => DownloaderConfig::from_file(path)?,
            None => DownloaderConfig::default(),
        };
        config.apply_env();

        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(url) = &self.webdriver_url {
            config.webdriver_url = url.clone();
        }
        if self.headful {
            config.headless = false;
        }
        if let Some(max_pages) = self.max_pages {
            config.max_pages = max_pages;
        }

        Ok(config)
    }
}
