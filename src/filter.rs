use crate::config::DownloaderConfig;
use regex::Regex;
use url::Url;

/// Decides which anchors on a listing page are presentation links
#[derive(Debug)]
pub struct LinkFilter {
    site_url: String,
    include_regexes: Vec<Regex>,
    exclude_regexes: Vec<Regex>,
}

impl LinkFilter {
    /// Create a new link filter scoped to `site_url`
    pub fn new(
        site_url: &str,
        include_patterns: &[String],
        exclude_patterns: &[String],
    ) -> Result<Self, regex::Error> {
        let mut include_regexes = Vec::with_capacity(include_patterns.len());
        for pattern in include_patterns {
            include_regexes.push(Regex::new(pattern)?);
        }

        let mut exclude_regexes = Vec::with_capacity(exclude_patterns.len());
        for pattern in exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            site_url: site_url.to_string(),
            include_regexes,
            exclude_regexes,
        })
    }

    pub fn from_config(config: &DownloaderConfig) -> Result<Self, regex::Error> {
        Self::new(
            &config.site_url,
            &config.include_patterns,
            &config.exclude_patterns,
        )
    }

    /// Resolve `href` against the page it was found on and return the
    /// normalized link if it belongs to the site and passes the patterns
    pub fn accept(&self, href: &str, page_url: &Url) -> Option<String> {
        let resolved = page_url.join(href).ok()?;
        let normalized = self.normalize_url(&resolved);
        let link = normalized.as_str();

        if !link.starts_with(&self.site_url) {
            return None;
        }

        // Exclusions take precedence
        if self.exclude_regexes.iter().any(|regex| regex.is_match(link)) {
            return None;
        }

        if !self.include_regexes.is_empty()
            && !self.include_regexes.iter().any(|regex| regex.is_match(link))
        {
            return None;
        }

        Some(link.to_string())
    }

    /// Create a normalized version of the URL (e.g., removing fragments)
    pub fn normalize_url(&self, url: &Url) -> Url {
        let mut normalized = url.clone();
        normalized.set_fragment(None);
        normalized
    }
}
