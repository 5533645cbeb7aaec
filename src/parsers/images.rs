use crate::config::ConverterConfig;
use crate::error::Result;
use regex::Regex;
use std::collections::HashSet;

/// Pulls slide image URLs out of a conversion result body
#[derive(Debug)]
pub struct ImageExtractor {
    pattern: Regex,
    marker: String,
}

impl ImageExtractor {
    pub fn new(pattern: &str, marker: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            marker: marker.to_string(),
        })
    }

    pub fn from_config(config: &ConverterConfig) -> Result<Self> {
        Self::new(&config.image_pattern, &config.high_res_marker)
    }

    /// Unique high-resolution image URLs in order of first appearance
    pub fn extract(&self, body: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.pattern
            .find_iter(body)
            .map(|m| m.as_str())
            .filter(|url| url.contains(&self.marker))
            .filter(|url| seen.insert(*url))
            .map(str::to_string)
            .collect()
    }
}
