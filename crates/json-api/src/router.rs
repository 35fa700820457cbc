//! App Router

use salvo::Router;

use crate::{orders, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::handlers::index::handler)
                .push(Router::with_path("{id}").get(products::handlers::get::handler)),
        )
        .push(Router::with_path("orders").post(orders::handlers::create::handler))
}
