//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use shopfront_app::catalog::CatalogError;

pub(crate) fn into_status_error(error: CatalogError) -> StatusError {
    match error {
        CatalogError::NotFound => StatusError::not_found().brief("Product not found"),
        CatalogError::Http(source) => {
            error!("catalog request failed: {source}");

            StatusError::bad_gateway().brief("Failed to load products")
        }
        CatalogError::Status(status) => {
            error!("catalog returned status {status}");

            StatusError::bad_gateway().brief("Failed to load products")
        }
        CatalogError::UnexpectedResponse(detail) => {
            error!("unexpected catalog response: {detail}");

            StatusError::bad_gateway().brief("Failed to load products")
        }
    }
}
