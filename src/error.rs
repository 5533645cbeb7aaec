use thiserror::Error;

/// Errors that abort a crawl or a single request.
///
/// Per-presentation failures never reach the caller as `Err`; the converter
/// folds them into [`crate::converter::ConversionOutcome`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid profile URL '{url}': expected '{site}<username>'")]
    InvalidProfileUrl { url: String, site: String },

    #[error("No profile URL was entered")]
    EmptyInput,

    #[error("Failed to start a WebDriver session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error("Timed out after {secs}s waiting for '{selector}'")]
    SelectorTimeout { selector: String, secs: u64 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Conversion service error at {endpoint}: {message}")]
    Service { endpoint: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid CSS selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("Invalid regex pattern: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
