use crate::config::DownloaderConfig;
use crate::error::{Error, Result};
use crate::filter::LinkFilter;
use scraper::{Html, Selector};
use url::Url;

/// What the next-page control on a listing page says
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// No next-page control on the page
    Absent,
    /// Control present but pointing at the placeholder target
    Placeholder,
    /// Control present without an href
    MissingHref,
    /// Resolved target of the control
    Url(Url),
}

impl NextPage {
    pub fn url(&self) -> Option<&Url> {
        match self {
            NextPage::Url(url) => Some(url),
            _ => None,
        }
    }
}

/// Links and pagination state read from one listing page
#[derive(Debug, Clone)]
pub struct ListingSnapshot {
    pub links: Vec<String>,
    pub next: NextPage,
}

/// Parses rendered listing pages
#[derive(Debug)]
pub struct ListingParser {
    anchor_selector: Selector,
    next_selector: Selector,
    placeholder: String,
    filter: LinkFilter,
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

impl ListingParser {
    pub fn new(config: &DownloaderConfig) -> Result<Self> {
        let anchor_selector = parse_selector(&format!("{} a[href]", config.listing_selector))?;
        let next_selector = parse_selector(&config.next_page_selector)?;
        let filter = LinkFilter::from_config(config)?;

        Ok(Self {
            anchor_selector,
            next_selector,
            placeholder: config.next_page_placeholder.clone(),
            filter,
        })
    }

    /// Extracts presentation links inside the listing container and the
    /// next-page target from the page source
    pub fn parse(&self, html: &str, page_url: &Url) -> ListingSnapshot {
        let doc = Html::parse_document(html);

        let links = doc
            .select(&self.anchor_selector)
            .filter_map(|e| e.value().attr("href"))
            .filter_map(|href| self.filter.accept(href, page_url))
            .collect::<Vec<String>>();

        ::log::debug!("Listing parser found {} links on {}", links.len(), page_url);

        let next = match doc.select(&self.next_selector).next() {
            None => NextPage::Absent,
            Some(control) => match control.value().attr("href") {
                None => NextPage::MissingHref,
                Some(href) if href.trim() == self.placeholder => NextPage::Placeholder,
                Some(href) => match page_url.join(href.trim()) {
                    Ok(url) => NextPage::Url(url),
                    Err(e) => {
                        ::log::warn!("Unresolvable next-page href '{}': {}", href, e);
                        NextPage::MissingHref
                    }
                },
            },
        };

        ListingSnapshot { links, next }
    }
}
