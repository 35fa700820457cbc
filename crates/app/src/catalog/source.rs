//! Product source contract.

use async_trait::async_trait;
use mockall::automock;

use shopfront::products::Product;

use crate::catalog::errors::CatalogError;

/// Read-only access to the external product catalog.
///
/// Both operations are idempotent, side-effect-free reads. Absence of a
/// product and transport failures surface as [`CatalogError`] values so the
/// caller can render an explicit empty or error state.
#[automock]
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// List every product in the catalog, in the catalog's order.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetch one product by its catalog identifier.
    async fn get_product(&self, id: u64) -> Result<Product, CatalogError>;
}
