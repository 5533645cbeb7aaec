use crate::error::Result;
use std::time::Duration;
use url::Url;

/// A browser tab the listing crawl drives.
///
/// Every call completes before the next one is issued; implementations do
/// not need to be shareable across tasks.
#[allow(async_fn_in_trait)]
pub trait ListingPage {
    /// Navigate to `url`, returning once the DOM has been parsed
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// URL of the currently loaded document
    async fn current_url(&mut self) -> Result<Url>;

    /// Wait until `selector` matches an element, failing after `timeout`
    async fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<()>;

    /// Scroll step by step to the bottom so lazy content renders
    async fn scroll_to_bottom(&mut self) -> Result<()>;

    /// Serialized DOM of the current document
    async fn source(&mut self) -> Result<String>;

    /// Release the page and its browser session
    async fn close(self) -> Result<()>;
}

/// Opens a fresh browser session with a single page
#[allow(async_fn_in_trait)]
pub trait PageLauncher {
    type Page: ListingPage;

    async fn launch(&self) -> Result<Self::Page>;
}
