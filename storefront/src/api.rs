use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Product as served by the backend's listing endpoint. The storefront
/// keeps its own copy of the shape; the two components share only the
/// wire format.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
}

/// Thin client over the backend's read endpoints. The cart endpoints are
/// deliberately absent: the storefront cart lives entirely client-side.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    pub async fn products(&self) -> Result<Vec<Product>> {
        let response = self
            .http
            .get(format!("{}/api/products", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed_from_base_url() {
        let client = ApiClient::new("http://localhost:8080///");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn product_deserializes_from_backend_shape() {
        let json = r#"{"id":2,"name":"Kubernetes Mug","price":15.5,"category":"accessories"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 2);
        assert_eq!(product.price, 15.5);
    }
}
