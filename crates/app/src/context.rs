//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    catalog::{CatalogClient, CatalogConfig, ProductSource},
    database,
    orders::{OrdersService, PgOrdersService},
};

/// Errors raised while building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The database connection could not be established.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Shared handles to the storefront's external collaborators.
#[derive(Clone)]
pub struct AppContext {
    /// The product catalog.
    pub catalog: Arc<dyn ProductSource>,

    /// The order store.
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context from a database URL and catalog config.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_config(
        database_url: &str,
        catalog: CatalogConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(database_url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self {
            catalog: Arc::new(CatalogClient::new(catalog)),
            orders: Arc::new(PgOrdersService::new(pool)),
        })
    }
}
