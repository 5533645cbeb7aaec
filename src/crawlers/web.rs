use crate::config::DownloaderConfig;
use crate::crawlers::crawler::{ListingPage, PageLauncher};
use crate::error::{Error, Result};
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::{Map, Value, json};
use std::time::Duration;
use url::Url;

/// Incremental scroll run inside the page. Resolves once the scrolled
/// distance reaches the document height.
const SCROLL_SCRIPT: &str = r#"
    const [step, interval, done] = arguments;
    let total = 0;
    const timer = setInterval(() => {
        window.scrollBy(0, step);
        total += step;
        if (total >= document.body.scrollHeight) {
            clearInterval(timer);
            done(total);
        }
    }, interval);
"#;

/// Launches browser sessions through a WebDriver server
#[derive(Debug, Clone)]
pub struct WebDriverLauncher {
    webdriver_url: String,
    headless: bool,
    script_timeout: Duration,
    scroll_step_px: u32,
    scroll_interval_ms: u64,
}

impl WebDriverLauncher {
    pub fn new(config: &DownloaderConfig) -> Self {
        Self {
            webdriver_url: config.webdriver_url.clone(),
            headless: config.headless,
            script_timeout: Duration::from_secs(config.script_timeout_secs),
            scroll_step_px: config.scroll_step_px,
            scroll_interval_ms: config.scroll_interval_ms,
        }
    }

    /// Session capabilities: DOM-parsed load policy, script timeout, and
    /// headless flags for both Chrome and Firefox drivers
    fn capabilities(&self) -> Map<String, Value> {
        let mut caps = Map::new();
        caps.insert("pageLoadStrategy".to_string(), json!("eager"));
        caps.insert(
            "timeouts".to_string(),
            json!({ "script": self.script_timeout.as_millis() as u64 }),
        );

        if self.headless {
            caps.insert(
                "goog:chromeOptions".to_string(),
                json!({ "args": ["--headless=new", "--disable-gpu"] }),
            );
            caps.insert(
                "moz:firefoxOptions".to_string(),
                json!({ "args": ["-headless"] }),
            );
        }

        caps
    }

    async fn connect(&self, webdriver_url: &str) -> Result<Client> {
        let mut builder = ClientBuilder::native();
        builder.capabilities(self.capabilities());
        Ok(builder.connect(webdriver_url).await?)
    }

    fn page(&self, client: Client) -> WebDriverPage {
        WebDriverPage {
            client,
            scroll_step_px: self.scroll_step_px,
            scroll_interval_ms: self.scroll_interval_ms,
        }
    }
}

impl PageLauncher for WebDriverLauncher {
    type Page = WebDriverPage;

    /// Connects to the configured WebDriver, falling back to the usual
    /// local driver ports
    async fn launch(&self) -> Result<WebDriverPage> {
        let first_error = match self.connect(&self.webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", self.webdriver_url);
                return Ok(self.page(client));
            }
            Err(e) => {
                ::log::error!(
                    "Failed to connect to WebDriver at {}: {}",
                    self.webdriver_url,
                    e
                );
                e
            }
        };

        let fallback_urls = [
            "http://localhost:9515", // ChromeDriver default
            "http://localhost:4444", // geckodriver / Selenium default
            "http://127.0.0.1:4444",
        ];

        for url in fallback_urls {
            if url == self.webdriver_url {
                continue;
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            if let Ok(client) = self.connect(url).await {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Ok(self.page(client));
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(first_error)
    }
}

/// A page of a fantoccini-driven browser session
pub struct WebDriverPage {
    client: Client,
    scroll_step_px: u32,
    scroll_interval_ms: u64,
}

impl ListingPage for WebDriverPage {
    async fn goto(&mut self, url: &str) -> Result<()> {
        ::log::debug!("GOTO: {}", url);
        Ok(self.client.goto(url).await?)
    }

    async fn current_url(&mut self) -> Result<Url> {
        Ok(self.client.current_url().await?)
    }

    async fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<()> {
        match self
            .client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await
        {
            Ok(_) => Ok(()),
            Err(CmdError::WaitTimeout) => Err(Error::SelectorTimeout {
                selector: selector.to_string(),
                secs: timeout.as_secs(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn scroll_to_bottom(&mut self) -> Result<()> {
        let scrolled = self
            .client
            .execute_async(
                SCROLL_SCRIPT,
                vec![json!(self.scroll_step_px), json!(self.scroll_interval_ms)],
            )
            .await?;
        ::log::debug!("Scrolled {} px", scrolled);
        Ok(())
    }

    async fn source(&mut self) -> Result<String> {
        Ok(self.client.source().await?)
    }

    async fn close(self) -> Result<()> {
        Ok(self.client.close().await?)
    }
}
