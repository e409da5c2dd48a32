//! Car repository client
//!
//! `CarRepository` is the seam for the inventory backend; the backend
//! itself is an external collaborator reached over HTTP.

use async_trait::async_trait;
use reqwest::StatusCode;
use shared::client::ErrorBody;
use shared::models::{Car, CarCreate, CarUpdate};

use crate::{ClientConfig, ClientError, ClientResult};

/// Inventory backend interface
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Fetch a single car by id
    async fn get(&self, id: &str) -> ClientResult<Car>;

    /// Fetch the full car collection in server order
    async fn get_all(&self) -> ClientResult<Vec<Car>>;

    /// Create a new car record
    async fn create(&self, draft: CarCreate) -> ClientResult<Car>;

    /// Apply one atomic update carrying field values plus the photo-set diff
    async fn update(&self, id: &str, request: CarUpdate) -> ClientResult<Car>;

    /// Delete a car record
    async fn delete(&self, id: &str) -> ClientResult<()>;
}

/// HTTP implementation of [`CarRepository`]
///
/// Session credentials are carried implicitly through the cookie store;
/// a missing or expired session surfaces as an ordinary failed call.
#[derive(Debug, Clone)]
pub struct HttpCarRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCarRepository {
    /// Create a new repository client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Extract the server-supplied `{message}` from an error response,
/// falling back to the HTTP status line when the body carries none.
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => format!("HTTP {status}"),
    }
}

#[async_trait]
impl CarRepository for HttpCarRepository {
    async fn get(&self, id: &str) -> ClientResult<Car> {
        let response = self
            .client
            .get(self.url(&format!("/car/get/{id}")))
            .send()
            .await
            .map_err(|e| ClientError::Fetch(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(ClientError::Fetch(error_message(response).await));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Fetch(e.to_string()))
    }

    async fn get_all(&self) -> ClientResult<Vec<Car>> {
        let response = self
            .client
            .get(self.url("/cars/getall"))
            .send()
            .await
            .map_err(|e| ClientError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::Fetch(error_message(response).await));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Fetch(e.to_string()))
    }

    async fn create(&self, draft: CarCreate) -> ClientResult<Car> {
        draft.validate().map_err(ClientError::Validation)?;

        let response = self
            .client
            .post(self.url("/car/create"))
            .json(&draft)
            .send()
            .await
            .map_err(|e| ClientError::Create(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::Create(error_message(response).await));
        }

        let car: Car = response
            .json()
            .await
            .map_err(|e| ClientError::Create(e.to_string()))?;
        tracing::info!(car_id = %car.id, "car created");
        Ok(car)
    }

    async fn update(&self, id: &str, request: CarUpdate) -> ClientResult<Car> {
        let response = self
            .client
            .put(self.url(&format!("/car/update/{id}")))
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Update(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::Update(error_message(response).await));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Update(e.to_string()))
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/car/delete/{id}")))
            .send()
            .await
            .map_err(|e| ClientError::Delete(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::Delete(error_message(response).await));
        }

        tracing::info!(car_id = %id, "car deleted");
        Ok(())
    }
}
