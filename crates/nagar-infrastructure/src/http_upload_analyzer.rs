//! Remote image analysis over HTTP.
//!
//! The endpoint accepts a multipart form with a single `image` field and
//! answers `{ "material": "...", "complaint_text": "..." }`.

use std::time::Duration;

use async_trait::async_trait;
use nagar_core::chat::ImageAttachment;
use nagar_core::config::UploadConfig;
use nagar_core::error::{NagarError, Result};
use nagar_core::upload::{UploadAnalysis, UploadAnalyzer};
use reqwest::Client;
use reqwest::multipart::{Form, Part};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_FILE_NAME: &str = "upload";

#[derive(Clone)]
pub struct HttpUploadAnalyzer {
    client: Client,
    endpoint: String,
}

impl HttpUploadAnalyzer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Builds an analyzer from config, or `None` when no endpoint is configured.
    pub fn from_config(config: &UploadConfig) -> Option<Self> {
        config
            .endpoint
            .as_deref()
            .filter(|_| config.is_enabled())
            .map(Self::new)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn form(image: &ImageAttachment) -> Result<Form> {
        let file_name = image
            .file_name
            .clone()
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        let part = Part::bytes(image.bytes.clone())
            .file_name(file_name)
            .mime_str(&image.mime_type)
            .map_err(|e| NagarError::internal(format!("invalid MIME type: {}", e)))?;
        Ok(Form::new().part("image", part))
    }
}

#[async_trait]
impl UploadAnalyzer for HttpUploadAnalyzer {
    async fn analyze(&self, image: &ImageAttachment) -> Result<UploadAnalysis> {
        tracing::debug!(
            endpoint = %self.endpoint,
            size = image.size,
            "[HttpUploadAnalyzer] Uploading image"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .multipart(Self::form(image)?)
            .send()
            .await
            .map_err(|e| NagarError::remote(format!("upload request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NagarError::remote(format!(
                "upload endpoint returned {}",
                status
            )));
        }

        let analysis: UploadAnalysis = response
            .json()
            .await
            .map_err(|e| NagarError::remote(format!("invalid upload response: {}", e)))?;

        tracing::info!(material = %analysis.material, "[HttpUploadAnalyzer] Image analysed");
        Ok(analysis)
    }
}
