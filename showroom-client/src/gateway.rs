//! Image upload gateway client
//!
//! The gateway is a third-party service treated as a black box: it
//! accepts a raw image file and returns a stable URL plus an opaque
//! handle. Any non-success, transport failure, or malformed body is an
//! upload failure; nothing is retried here.

use async_trait::async_trait;
use shared::models::Image;

use crate::{ClientConfig, ClientError, ClientResult};

/// A raw image file selected by the user
#[derive(Debug, Clone)]
pub struct ImageFile {
    /// Original file name, forwarded to the gateway
    pub name: String,
    /// Raw file bytes
    pub data: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Upload gateway interface
#[async_trait]
pub trait ImageUploadGateway: Send + Sync {
    /// Upload one file; returns the hosted image on success
    async fn upload(&self, file: ImageFile) -> ClientResult<Image>;
}

/// HTTP implementation of [`ImageUploadGateway`]
#[derive(Debug, Clone)]
pub struct HttpImageGateway {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl HttpImageGateway {
    /// Create a new gateway client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            upload_url: config.upload_url.clone(),
            upload_preset: config.upload_preset.clone(),
        }
    }
}

#[async_trait]
impl ImageUploadGateway for HttpImageGateway {
    async fn upload(&self, file: ImageFile) -> ClientResult<Image> {
        let part = reqwest::multipart::Part::bytes(file.data)
            .file_name(file.name)
            .mime_str("application/octet-stream")
            .map_err(|e| ClientError::Upload(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Upload(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Upload(format!("{status}: {text}")));
        }

        // Gateway success body; no structured error code is guaranteed
        // on failure, so only the happy path is typed.
        #[derive(serde::Deserialize)]
        struct UploadTicket {
            secure_url: String,
            public_id: String,
        }

        let ticket: UploadTicket = response
            .json()
            .await
            .map_err(|e| ClientError::Upload(e.to_string()))?;

        tracing::info!(public_id = %ticket.public_id, "image uploaded to gateway");
        Ok(Image {
            url: ticket.secure_url,
            public_id: ticket.public_id,
        })
    }
}
