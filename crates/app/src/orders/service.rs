//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::orders::{
    errors::OrdersServiceError,
    models::{NewOrder, Order},
    repository::PgOrdersRepository,
};

/// Postgres-backed orders store.
#[derive(Debug, Clone)]
pub struct PgOrdersService {
    pool: PgPool,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        let created = self.repository.create_order(&self.pool, &order).await?;

        Ok(created)
    }
}

/// Write access to the order store.
#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Persist a new order. The stored record comes back with its assigned
    /// identifier and a `pending` status.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;
}
