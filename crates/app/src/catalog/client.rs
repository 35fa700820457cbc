//! HTTP client for the product catalog.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use shopfront::products::Product;

use crate::catalog::{errors::CatalogError, source::ProductSource};

/// Configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog base URL, e.g. `"https://fakestoreapi.com"`.
    pub base_url: String,
}

/// HTTP client for a FakeStore-style catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    config: CatalogConfig,
    http: Client,
}

impl CatalogClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl ProductSource for CatalogClient {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/products", self.config.base_url);

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    async fn get_product(&self, id: u64) -> Result<Product, CatalogError> {
        let url = format!("{}/products/{id}", self.config.base_url);

        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        // The FakeStore API answers unknown identifiers with 200 and an
        // empty body, so decode by hand and map that to NotFound.
        let body = response.text().await?;

        if body.trim().is_empty() || body.trim() == "null" {
            return Err(CatalogError::NotFound);
        }

        serde_json::from_str(&body).map_err(|error| {
            CatalogError::UnexpectedResponse(format!("failed to decode product {id}: {error}"))
        })
    }
}
