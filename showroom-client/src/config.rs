//! Client configuration

/// Client configuration for the inventory backend and the image
/// upload gateway
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Inventory backend base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Image upload gateway endpoint URL
    pub upload_url: String,

    /// Unsigned upload preset forwarded to the gateway
    pub upload_preset: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            upload_url: String::new(),
            upload_preset: String::new(),
            timeout: 30,
        }
    }

    /// Set the upload gateway endpoint
    pub fn with_upload_url(mut self, url: impl Into<String>) -> Self {
        self.upload_url = url.into();
        self
    }

    /// Set the upload preset
    pub fn with_upload_preset(mut self, preset: impl Into<String>) -> Self {
        self.upload_preset = preset.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP car repository from this configuration
    pub fn build_repository(&self) -> super::HttpCarRepository {
        super::HttpCarRepository::new(self)
    }

    /// Create an HTTP image gateway from this configuration
    pub fn build_gateway(&self) -> super::HttpImageGateway {
        super::HttpImageGateway::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
