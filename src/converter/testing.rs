//! In-memory stand-in for the conversion service.

use crate::converter::api::ConversionApi;
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::sync::Mutex;

/// Answers every presentation with the same result body and PDF bytes,
/// except those marked as failing
#[derive(Default)]
pub struct FakeApi {
    body: String,
    pdf: Vec<u8>,
    failing: HashSet<String>,
    slide_requests: Mutex<Vec<String>>,
    pdf_requests: Mutex<Vec<Vec<String>>>,
}

impl FakeApi {
    pub fn new(body: &str, pdf: &[u8]) -> Self {
        Self {
            body: body.to_string(),
            pdf: pdf.to_vec(),
            ..Self::default()
        }
    }

    pub fn failing_for(mut self, presentation_url: &str) -> Self {
        self.failing.insert(presentation_url.to_string());
        self
    }

    pub fn slide_requests(&self) -> Vec<String> {
        self.slide_requests.lock().unwrap().clone()
    }

    pub fn pdf_requests(&self) -> Vec<Vec<String>> {
        self.pdf_requests.lock().unwrap().clone()
    }
}

impl ConversionApi for FakeApi {
    async fn request_slides(&self, presentation_url: &str) -> Result<Option<String>> {
        self.slide_requests
            .lock()
            .unwrap()
            .push(presentation_url.to_string());

        if self.failing.contains(presentation_url) {
            return Err(Error::Service {
                endpoint: "result".to_string(),
                message: "connection reset".to_string(),
            });
        }
        Ok(Some(self.body.clone()).filter(|body| !body.is_empty()))
    }

    async fn request_pdf(&self, image_urls: &[String]) -> Result<Option<Vec<u8>>> {
        self.pdf_requests.lock().unwrap().push(image_urls.to_vec());
        Ok(Some(self.pdf.clone()).filter(|pdf| !pdf.is_empty()))
    }
}
