//! State

use std::sync::Arc;

use shopfront_app::{catalog::ProductSource, context::AppContext, orders::OrdersService};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) catalog: Arc<dyn ProductSource>,
    pub(crate) orders: Arc<dyn OrdersService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(catalog: Arc<dyn ProductSource>, orders: Arc<dyn OrdersService>) -> Self {
        Self { catalog, orders }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.catalog, app.orders))
    }
}
