//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use shopfront_app::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::MissingRequiredData | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order payload")
        }
        OrdersServiceError::Sql(source) => {
            error!("failed to create order: {source}");

            StatusError::internal_server_error()
        }
    }
}
