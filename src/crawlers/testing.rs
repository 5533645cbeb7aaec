//! In-memory stand-ins for the browser session.

use crate::crawlers::crawler::{ListingPage, PageLauncher};
use crate::error::{Error, Result};
use scraper::{Html, Selector};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// Listing page markup: presentation anchors inside the listing container,
/// and an optional next-page control outside it
pub fn listing_html(links: &[String], next_href: Option<&str>) -> String {
    let anchors: String = links
        .iter()
        .map(|link| format!("<a href=\"{link}\">deck</a>"))
        .collect();
    let next = next_href
        .map(|href| format!("<li class=\"next_page\"><a href=\"{href}\">Next</a></li>"))
        .unwrap_or_default();

    format!(
        "<html><body>\
         <div class=\"slideshow-list-container\">{anchors}</div>\
         <ul class=\"pagination\">{next}</ul>\
         </body></html>"
    )
}

/// Serves canned HTML per URL and records navigation
#[derive(Clone, Default)]
pub struct FakePage {
    pages: HashMap<String, String>,
    current: Option<Url>,
    visits: Arc<Mutex<Vec<String>>>,
    closed: Arc<AtomicBool>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), html);
        self
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn html(&self) -> &str {
        self.current
            .as_ref()
            .and_then(|url| self.pages.get(url.as_str()))
            .map(String::as_str)
            .unwrap_or("<html><body></body></html>")
    }
}

impl ListingPage for FakePage {
    async fn goto(&mut self, url: &str) -> Result<()> {
        self.visits.lock().unwrap().push(url.to_string());
        self.current = Some(Url::parse(url)?);
        Ok(())
    }

    async fn current_url(&mut self) -> Result<Url> {
        Ok(self
            .current
            .clone()
            .unwrap_or_else(|| Url::parse("about:blank").unwrap()))
    }

    async fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<()> {
        let parsed = Selector::parse(selector).unwrap();
        if Html::parse_document(self.html()).select(&parsed).next().is_some() {
            Ok(())
        } else {
            Err(Error::SelectorTimeout {
                selector: selector.to_string(),
                secs: timeout.as_secs(),
            })
        }
    }

    async fn scroll_to_bottom(&mut self) -> Result<()> {
        Ok(())
    }

    async fn source(&mut self) -> Result<String> {
        Ok(self.html().to_string())
    }

    async fn close(self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Hands out clones of one `FakePage`, counting launches
#[derive(Default)]
pub struct FakeLauncher {
    pub page: FakePage,
    pub launches: AtomicUsize,
}

impl FakeLauncher {
    pub fn new(page: FakePage) -> Self {
        Self {
            page,
            launches: AtomicUsize::new(0),
        }
    }

    pub fn launch_count(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }
}

impl PageLauncher for FakeLauncher {
    type Page = FakePage;

    async fn launch(&self) -> Result<FakePage> {
        self.launches.fetch_add(1, Ordering::SeqCst);
        Ok(self.page.clone())
    }
}
