//! Network-backed product client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::models::Product;
use std::time::Duration;

use super::ProductLookup;
use crate::error::{ProductError, ProductResult};

/// Client for the external product service
#[derive(Debug, Clone)]
pub struct HttpProductClient {
    client: Client,
    base_url: String,
}

impl HttpProductClient {
    /// Build the client once; `timeout` bounds each whole request.
    pub fn new(base_url: &str, timeout: Duration) -> ProductResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ProductLookup for HttpProductClient {
    async fn get_product_by_id(&self, product_id: &str) -> ProductResult<Product> {
        let url = format!("{}/products/{}", self.base_url, product_id);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ProductError::NotFound(product_id.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProductError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
