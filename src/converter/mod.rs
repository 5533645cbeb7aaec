pub mod api;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ConversionApi, HttpConversionApi};

use crate::config::ConverterConfig;
use crate::error::Result;
use crate::parsers::ImageExtractor;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

/// How a single presentation conversion ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// PDF written to this path
    Saved(PathBuf),
    /// No high-resolution slide images in the result body
    NoImages,
    /// The PDF endpoint sent an empty payload
    NoPdfData,
    /// A request or file write failed
    Failed(String),
}

impl ConversionOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, ConversionOutcome::Saved(_))
    }
}

/// Text to scan for image links. A body that decodes as JSON counts only
/// if it is a JSON string; objects, arrays and scalars carry no links.
fn textual_body(body: String) -> Option<String> {
    match serde_json::from_str::<Value>(&body) {
        Ok(Value::String(text)) => Some(text),
        Ok(_) => None,
        Err(_) => Some(body),
    }
}

/// Turns presentation URLs into PDF files via the conversion service
pub struct Converter<A> {
    api: A,
    extractor: ImageExtractor,
}

impl<A: ConversionApi> Converter<A> {
    pub fn new(api: A, config: &ConverterConfig) -> Result<Self> {
        Ok(Self {
            api,
            extractor: ImageExtractor::from_config(config)?,
        })
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Converts one presentation and writes `<out_dir>/<file_name>`.
    ///
    /// Never fails: request and write errors are logged and reported as
    /// [`ConversionOutcome::Failed`].
    pub async fn convert(
        &self,
        presentation_url: &str,
        file_name: &str,
        out_dir: &Path,
    ) -> ConversionOutcome {
        match self.try_convert(presentation_url, file_name, out_dir).await {
            Ok(outcome) => outcome,
            Err(e) => {
                ::log::error!("Error converting {}: {}", presentation_url, e);
                ConversionOutcome::Failed(e.to_string())
            }
        }
    }

    async fn try_convert(
        &self,
        presentation_url: &str,
        file_name: &str,
        out_dir: &Path,
    ) -> Result<ConversionOutcome> {
        let body = self.api.request_slides(presentation_url).await?;
        let images = body
            .and_then(textual_body)
            .map(|body| self.extractor.extract(&body))
            .unwrap_or_default();

        ::log::info!("Extracted {} image links", images.len());
        ::log::debug!("Image links: {:?}", images);

        if images.is_empty() {
            ::log::info!("No images to send for PDF generation: {}", presentation_url);
            return Ok(ConversionOutcome::NoImages);
        }

        let Some(pdf) = self.api.request_pdf(&images).await? else {
            ::log::error!("No PDF data returned for {}", presentation_url);
            return Ok(ConversionOutcome::NoPdfData);
        };

        fs::create_dir_all(out_dir).await?;
        let path = out_dir.join(file_name);
        fs::write(&path, &pdf).await?;
        ::log::info!("PDF downloaded successfully: {}", path.display());

        Ok(ConversionOutcome::Saved(path))
    }
}
