//! Fixture-backed product client

use async_trait::async_trait;
use shared::models::Product;
use std::path::{Path, PathBuf};

use super::ProductLookup;
use crate::error::{ProductError, ProductResult};

/// Serves the same product from a local JSON file for every id.
///
/// The file is re-read on each call so it can be edited while the service
/// runs. Read or parse failures are hard errors.
#[derive(Debug, Clone)]
pub struct FixtureProductClient {
    path: PathBuf,
}

impl FixtureProductClient {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProductLookup for FixtureProductClient {
    async fn get_product_by_id(&self, product_id: &str) -> ProductResult<Product> {
        tracing::debug!(product_id, path = %self.path.display(), "Using fixture product");

        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|source| ProductError::FixtureRead {
                path: self.path.display().to_string(),
                source,
            })?;

        Ok(serde_json::from_slice(&data)?)
    }
}
