//! Product lookup
//!
//! Two variants of one client, chosen once at construction:
//! - [`FixtureProductClient`]: serves a local JSON file, ignoring the id
//! - [`HttpProductClient`]: `GET <base>/products/<id>` on the product service

mod fixture;
mod remote;

pub use fixture::FixtureProductClient;
pub use remote::HttpProductClient;

use async_trait::async_trait;
use shared::models::Product;

use crate::config::Config;
use crate::error::ProductResult;

/// Resolves a product id to its current price and name
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn get_product_by_id(&self, product_id: &str) -> ProductResult<Product>;
}

/// Product client selected from configuration
#[derive(Debug, Clone)]
pub enum ProductClient {
    Fixture(FixtureProductClient),
    Http(HttpProductClient),
}

impl ProductClient {
    /// Fixture mode when `MOCK_PRODUCT_SERVICE` is set, network otherwise
    pub fn from_config(config: &Config) -> ProductResult<Self> {
        if config.mock_product_service {
            tracing::warn!(
                path = %config.product_fixture_path,
                "Product service mocked, serving fixture for every product id"
            );
            Ok(Self::Fixture(FixtureProductClient::new(
                &config.product_fixture_path,
            )))
        } else {
            Ok(Self::Http(HttpProductClient::new(
                &config.product_service_url,
                config.product_service_timeout,
            )?))
        }
    }
}

#[async_trait]
impl ProductLookup for ProductClient {
    async fn get_product_by_id(&self, product_id: &str) -> ProductResult<Product> {
        match self {
            Self::Fixture(client) => client.get_product_by_id(product_id).await,
            Self::Http(client) => client.get_product_by_id(product_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_mock_flag_selects_fixture_variant() {
        let client = ProductClient::from_config(&config(&[
            ("MOCK_PRODUCT_SERVICE", "true"),
            ("PRODUCT_FIXTURE_PATH", "fixtures/product.json"),
        ]))
        .unwrap();
        match client {
            ProductClient::Fixture(fixture) => {
                assert_eq!(fixture.path(), std::path::Path::new("fixtures/product.json"))
            }
            other => panic!("Expected fixture client, got {other:?}"),
        }
    }

    #[test]
    fn test_default_selects_http_variant() {
        let client = ProductClient::from_config(&config(&[(
            "PRODUCT_SERVICE_URL",
            "http://products.internal:9000/",
        )]))
        .unwrap();
        match client {
            ProductClient::Http(http) => assert_eq!(http.base_url(), "http://products.internal:9000"),
            other => panic!("Expected http client, got {other:?}"),
        }
    }
}
