use crate::config::ConverterConfig;
use crate::error::{Error, Result};
use reqwest::Response;
use reqwest::header::ACCEPT;

/// The third-party slide-to-PDF service
#[allow(async_fn_in_trait)]
pub trait ConversionApi {
    /// Submit a presentation URL and return the textual result body, or
    /// `None` if the service answered with an empty body
    async fn request_slides(&self, presentation_url: &str) -> Result<Option<String>>;

    /// Submit slide image URLs in order and return the PDF bytes, or `None`
    /// if the service sent no payload
    async fn request_pdf(&self, image_urls: &[String]) -> Result<Option<Vec<u8>>>;
}

/// Form-encoded POSTs to the service's result and PDF endpoints
#[derive(Debug, Clone)]
pub struct HttpConversionApi {
    client: reqwest::Client,
    config: ConverterConfig,
}

impl HttpConversionApi {
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: config.clone(),
        }
    }
}

/// Rejects non-success responses the way a failed transport is rejected
fn check_status(endpoint: &str, response: Response) -> Result<Response> {
    if !response.status().is_success() {
        return Err(Error::Service {
            endpoint: endpoint.to_string(),
            message: format!("HTTP {}", response.status()),
        });
    }
    Ok(response)
}

/// Indexed `selectedImages[i]` fields, one per image URL
pub fn pdf_form(image_urls: &[String]) -> Vec<(String, &str)> {
    image_urls
        .iter()
        .enumerate()
        .map(|(index, url)| (format!("selectedImages[{index}]"), url.as_str()))
        .collect()
}

impl ConversionApi for HttpConversionApi {
    async fn request_slides(&self, presentation_url: &str) -> Result<Option<String>> {
        let form = [
            ("codehap_link", presentation_url),
            ("qu", self.config.quality.as_str()),
            ("curl", self.config.referer.as_str()),
        ];

        ::log::debug!("POST {} for {}", self.config.result_endpoint, presentation_url);
        let response = self
            .client
            .post(&self.config.result_endpoint)
            .header(ACCEPT, "application/json")
            .form(&form)
            .send()
            .await?;
        let body = check_status(&self.config.result_endpoint, response)?
            .text()
            .await?;

        Ok(Some(body).filter(|body| !body.is_empty()))
    }

    async fn request_pdf(&self, image_urls: &[String]) -> Result<Option<Vec<u8>>> {
        ::log::debug!(
            "POST {} with {} images",
            self.config.pdf_endpoint,
            image_urls.len()
        );
        let response = self
            .client
            .post(&self.config.pdf_endpoint)
            .header(ACCEPT, "application/json")
            .form(&pdf_form(image_urls))
            .send()
            .await?;
        let bytes = check_status(&self.config.pdf_endpoint, response)?
            .bytes()
            .await?;

        Ok(Some(bytes.to_vec()).filter(|bytes| !bytes.is_empty()))
    }
}
