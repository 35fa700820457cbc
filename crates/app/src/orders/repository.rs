//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use shopfront::lines::CartLine;

use crate::orders::models::{NewOrder, Order};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        pool: &PgPool,
        order: &NewOrder,
    ) -> Result<Order, sqlx::Error> {
        let items = serde_json::to_value(&order.items).map_err(|e| sqlx::Error::Encode(e.into()))?;

        query_as::<Postgres, Order>(CREATE_ORDER_SQL)
            .bind(&order.name)
            .bind(&order.email)
            .bind(&order.address)
            .bind(order.total)
            .bind(items)
            .fetch_one(pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let items: serde_json::Value = row.try_get("items")?;

        let items: Vec<CartLine> =
            serde_json::from_value(items).map_err(|e| sqlx::Error::ColumnDecode {
                index: "items".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            address: row.try_get("address")?,
            total: row.try_get("total")?,
            status: row.try_get("status")?,
            items,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
