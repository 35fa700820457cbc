//! Create Order Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopfront::{lines::CartLine, products::Product};
use shopfront_app::{
    checkout::{self, CheckoutDetails, FieldError},
    orders::models::{NewOrder, Order},
};

use crate::{
    extensions::*,
    orders::errors::into_status_error,
    products::models::ProductResponse,
    state::State,
};

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    /// Buyer name
    pub name: String,

    /// Buyer email
    pub email: String,

    /// Shipping address
    pub address: String,

    /// Order total in minor currency units, as derived by the cart
    pub total: i64,

    /// Snapshot of the cart lines being ordered
    pub items: Vec<CartLineRequest>,
}

/// One cart line within a create-order request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineRequest {
    /// The product being ordered
    pub product: ProductRequest,

    /// Units of the product, at least 1
    pub quantity: u32,
}

/// A product within a create-order request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    /// Catalog identifier
    pub id: u64,

    /// Display title
    pub title: String,

    /// Unit price in major currency units
    pub price: f64,

    /// Long-form description
    #[serde(default)]
    pub description: String,

    /// Category name
    #[serde(default)]
    pub category: String,

    /// Image URI
    #[serde(default)]
    pub image: String,
}

impl TryFrom<ProductRequest> for Product {
    type Error = rust_decimal::Error;

    fn try_from(request: ProductRequest) -> Result<Self, Self::Error> {
        Ok(Product {
            id: request.id,
            title: request.title,
            price: Decimal::try_from(request.price)?,
            description: request.description,
            category: request.category,
            image: request.image,
            rating: None,
        })
    }
}

/// Created Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// Store-assigned order identifier
    pub id: i64,

    /// Buyer name
    pub name: String,

    /// Buyer email
    pub email: String,

    /// Shipping address
    pub address: String,

    /// Order total in minor currency units
    pub total: i64,

    /// Order status; new orders are `pending`
    pub status: String,

    /// Snapshot of the ordered cart lines
    pub items: Vec<CartLineResponse>,

    /// When the order was accepted
    pub created_at: String,
}

/// One ordered cart line in a response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The ordered product
    pub product: ProductResponse,

    /// Units of the product
    pub quantity: u32,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id,
            name: order.name,
            email: order.email,
            address: order.address,
            total: order.total,
            status: order.status,
            items: order
                .items
                .into_iter()
                .map(|line| CartLineResponse {
                    product: line.product.into(),
                    quantity: line.quantity,
                })
                .collect(),
            created_at: order.created_at.to_string(),
        }
    }
}

fn invalid_fields_brief(fields: &[FieldError]) -> String {
    let names: Vec<&str> = fields
        .iter()
        .map(|field| match field {
            FieldError::EmptyName => "name",
            FieldError::InvalidEmail => "email",
            FieldError::EmptyAddress => "address",
        })
        .collect();

    format!("Invalid fields: {}", names.join(", "))
}

/// Create Order Handler
///
/// Persists the submitted cart snapshot as a new pending order. The total
/// is taken as derived by the cart; buyer fields are validated before any
/// write.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let CreateOrderRequest {
        name,
        email,
        address,
        total,
        items,
    } = json.into_inner();

    let details = CheckoutDetails {
        name,
        email,
        address,
    };

    let field_errors = checkout::validate(&details);

    if !field_errors.is_empty() {
        return Err(StatusError::bad_request().brief(invalid_fields_brief(&field_errors)));
    }

    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        if item.quantity < 1 {
            return Err(StatusError::bad_request().brief("Line quantity must be at least 1"));
        }

        let product = Product::try_from(item.product)
            .map_err(|_invalid| StatusError::bad_request().brief("Invalid product price"))?;

        lines.push(CartLine {
            product,
            quantity: item.quantity,
        });
    }

    let order = state
        .orders
        .create_order(NewOrder {
            name: details.name,
            email: details.email,
            address: details.address,
            total,
            items: lines,
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use shopfront_app::orders::{MockOrdersService, OrdersServiceError};

    use crate::test_helpers::orders_service;

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders").post(handler))
    }

    fn request_body() -> serde_json::Value {
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "address": "12 Analytical Row",
            "total": 2498,
            "items": [
                {
                    "product": { "id": 1, "title": "Backpack", "price": 9.99 },
                    "quantity": 2
                },
                {
                    "product": { "id": 2, "title": "Shirt", "price": 5.0 },
                    "quantity": 1
                }
            ]
        })
    }

    fn created_order(new: NewOrder) -> Order {
        Order {
            id: 17,
            name: new.name,
            email: new.email,
            address: new.address,
            total: new.total,
            status: "pending".to_string(),
            items: new.items,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn test_create_order_returns_201() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .withf(|new| new.total == 2498 && new.items.len() == 2 && new.name == "Ada Lovelace")
            .returning(|new| Ok(created_order(new)));

        let mut res = TestClient::post("http://example.com/orders")
            .json(&request_body())
            .send(&make_service(orders))
            .await;

        let body: OrderResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/orders/17"));
        assert_eq!(body.id, 17);
        assert_eq!(body.status, "pending");
        assert_eq!(body.items.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_email_returns_400_without_persisting() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_create_order().never();

        let mut body = request_body();
        body["email"] = json!("not-an-email");

        let res = TestClient::post("http://example.com/orders")
            .json(&body)
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_zero_quantity_line_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_create_order().never();

        let mut body = request_body();
        body["items"][0]["quantity"] = json!(0);

        let res = TestClient::post("http://example.com/orders")
            .json(&body)
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .returning(|_| Err(OrdersServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::post("http://example.com/orders")
            .json(&request_body())
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
