use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for the profile crawl and the download run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloaderConfig {
    /// Site root every profile and presentation URL starts with
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// CSS selector of the listing container
    #[serde(default = "default_listing_selector")]
    pub listing_selector: String,

    /// CSS selector of the next-page anchor
    #[serde(default = "default_next_page_selector")]
    pub next_page_selector: String,

    /// Next-page href meaning "no further page"
    #[serde(default = "default_next_page_placeholder")]
    pub next_page_placeholder: String,

    /// Seconds to wait for the listing container on the first page
    #[serde(default = "default_listing_timeout_secs")]
    pub listing_timeout_secs: u64,

    /// Seconds to wait for at least one presentation link after scrolling
    #[serde(default = "default_link_timeout_secs")]
    pub link_timeout_secs: u64,

    /// Pixels scrolled per tick
    #[serde(default = "default_scroll_step_px")]
    pub scroll_step_px: u32,

    /// Milliseconds between scroll ticks
    #[serde(default = "default_scroll_interval_ms")]
    pub scroll_interval_ms: u64,

    /// WebDriver script timeout, bounds a single scroll-to-bottom pass
    #[serde(default = "default_script_timeout_secs")]
    pub script_timeout_secs: u64,

    /// Upper bound on listing pages visited in one crawl
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Regex patterns a presentation link must match (empty means all)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns that reject a presentation link
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Run the browser without a window
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Directory the per-user folders are created in
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Third-party conversion service settings
    #[serde(default)]
    pub converter: ConverterConfig,
}

/// Endpoints and form values of the slide-to-PDF conversion service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default = "default_result_endpoint")]
    pub result_endpoint: String,

    #[serde(default = "default_pdf_endpoint")]
    pub pdf_endpoint: String,

    /// Value sent in the `curl` form field
    #[serde(default = "default_referer")]
    pub referer: String,

    /// Value sent in the `qu` form field
    #[serde(default = "default_quality")]
    pub quality: String,

    /// Regex matching slide image URLs in the result body
    #[serde(default = "default_image_pattern")]
    pub image_pattern: String,

    /// Substring only the highest-resolution image URLs contain
    #[serde(default = "default_high_res_marker")]
    pub high_res_marker: String,
}

fn default_site_url() -> String {
    "https://www.slideshare.net/".to_string()
}

fn default_listing_selector() -> String {
    "div.slideshow-list-container".to_string()
}

fn default_next_page_selector() -> String {
    "li.next_page a".to_string()
}

fn default_next_page_placeholder() -> String {
    "#".to_string()
}

fn default_listing_timeout_secs() -> u64 {
    60
}

fn default_link_timeout_secs() -> u64 {
    5
}

fn default_scroll_step_px() -> u32 {
    100
}

fn default_scroll_interval_ms() -> u64 {
    200
}

fn default_script_timeout_secs() -> u64 {
    300
}

fn default_max_pages() -> usize {
    1000
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_headless() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_result_endpoint() -> String {
    "https://slidesharesdownloader.com/result.php".to_string()
}

fn default_pdf_endpoint() -> String {
    "https://slidesharesdownloader.com/pdf.php".to_string()
}

fn default_referer() -> String {
    "https://slidesharesdownloader.com/".to_string()
}

fn default_quality() -> String {
    "high".to_string()
}

fn default_image_pattern() -> String {
    r#"https://image\.slidesharecdn\.com/[^\s"]+"#.to_string()
}

fn default_high_res_marker() -> String {
    "-2048.jpg".to_string()
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            result_endpoint: default_result_endpoint(),
            pdf_endpoint: default_pdf_endpoint(),
            referer: default_referer(),
            quality: default_quality(),
            image_pattern: default_image_pattern(),
            high_res_marker: default_high_res_marker(),
        }
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            listing_selector: default_listing_selector(),
            next_page_selector: default_next_page_selector(),
            next_page_placeholder: default_next_page_placeholder(),
            listing_timeout_secs: default_listing_timeout_secs(),
            link_timeout_secs: default_link_timeout_secs(),
            scroll_step_px: default_scroll_step_px(),
            scroll_interval_ms: default_scroll_interval_ms(),
            script_timeout_secs: default_script_timeout_secs(),
            max_pages: default_max_pages(),
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            webdriver_url: default_webdriver_url(),
            headless: default_headless(),
            output_dir: default_output_dir(),
            converter: ConverterConfig::default(),
        }
    }
}

impl DownloaderConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Override the WebDriver URL from `WEBDRIVER_URL` if it is set
    pub fn apply_env(&mut self) {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
    }

    /// Selector matching presentation anchors that have been rendered
    pub fn link_selector(&self) -> String {
        format!("a[href^=\"{}\"]", self.site_url)
    }

    pub fn listing_timeout(&self) -> Duration {
        Duration::from_secs(self.listing_timeout_secs)
    }

    pub fn link_timeout(&self) -> Duration {
        Duration::from_secs(self.link_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = DownloaderConfig::from_json("{}").unwrap();
        assert_eq!(config.site_url, "https://www.slideshare.net/");
        assert_eq!(config.next_page_placeholder, "#");
        assert_eq!(config.listing_timeout_secs, 60);
        assert_eq!(config.link_timeout_secs, 5);
        assert!(config.headless);
        assert_eq!(config.converter.quality, "high");
        assert_eq!(config.converter.high_res_marker, "-2048.jpg");
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "site_url": "https://example.test/",
            "max_pages": 3,
            "converter": { "high_res_marker": "-1024.jpg" }
        }"#;
        let config = DownloaderConfig::from_json(json).unwrap();
        assert_eq!(config.site_url, "https://example.test/");
        assert_eq!(config.max_pages, 3);
        assert_eq!(config.converter.high_res_marker, "-1024.jpg");
        assert_eq!(
            config.converter.pdf_endpoint,
            "https://slidesharesdownloader.com/pdf.php"
        );
    }

    #[test]
    fn test_link_selector() {
        let config = DownloaderConfig::default();
        assert_eq!(
            config.link_selector(),
            "a[href^=\"https://www.slideshare.net/\"]"
        );
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"headless": false}"#).unwrap();

        let config = DownloaderConfig::from_file(&path).unwrap();
        assert!(!config.headless);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(DownloaderConfig::from_json("{ not json").is_err());
    }
}
