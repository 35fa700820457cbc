//! Catalog errors.

use thiserror::Error;

/// Errors that can occur when querying the product catalog.
///
/// Every failure is explicit: a call either yields fully valid data or one
/// of these variants, never a partial result.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product exists with the requested identifier.
    #[error("product not found")]
    NotFound,

    /// A transport-level failure reaching the catalog, or a body that
    /// failed to decode.
    #[error("catalog request failed")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("catalog returned status {0}")]
    Status(reqwest::StatusCode),

    /// The catalog answered successfully but the body was not a product.
    #[error("unexpected catalog response: {0}")]
    UnexpectedResponse(String),
}
