//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use shopfront_app::{catalog::MockProductSource, orders::MockOrdersService};

use crate::state::State;

fn strict_catalog_mock() -> MockProductSource {
    let mut catalog = MockProductSource::new();

    catalog.expect_list_products().never();
    catalog.expect_get_product().never();

    catalog
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_create_order().never();

    orders
}

pub(crate) fn state_with_catalog(catalog: MockProductSource) -> Arc<State> {
    Arc::new(State::new(Arc::new(catalog), Arc::new(strict_orders_mock())))
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    Arc::new(State::new(Arc::new(strict_catalog_mock()), Arc::new(orders)))
}

pub(crate) fn catalog_service(catalog: MockProductSource, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_catalog(catalog)))
            .push(route),
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_orders(orders)))
            .push(route),
    )
}
