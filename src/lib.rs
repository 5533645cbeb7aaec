//! Batch-downloads a user's presentations as PDFs.
//!
//! A WebDriver-controlled browser pages through the user's profile listing
//! and collects every presentation link; each link is then run through a
//! third-party slide-to-PDF service and the result saved under
//! `<output_dir>/<username>/`.

pub mod config;
pub mod converter;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod orchestrator;
pub mod parsers;
pub mod prompt;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ConverterConfig, DownloaderConfig};
pub use converter::{ConversionApi, ConversionOutcome, Converter, HttpConversionApi};
pub use crawlers::{ListingPage, PageLauncher, WebDriverLauncher, collect_links};
pub use error::{Error, Result};
pub use orchestrator::{run, run_links_only};
pub use prompt::Prompt;
pub use results::{LinkSet, RunSummary};
