//! Checkout orchestration.
//!
//! Validates the buyer's details, derives the order total and line snapshot
//! from the live cart, submits the order, and clears the cart only once the
//! order store has confirmed the write. Every failure path leaves the cart
//! exactly as it was, so the user can retry without re-entering items.

use thiserror::Error;
use tracing::info;

use shopfront::{
    prices::{self, MinorUnitsError},
    storage::CartStorage,
    store::CartStore,
};

use crate::orders::{
    errors::OrdersServiceError,
    models::{NewOrder, Order},
    service::OrdersService,
};

/// Buyer contact and shipping fields collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDetails {
    /// Buyer name, non-empty.
    pub name: String,

    /// Buyer email, syntactically valid.
    pub email: String,

    /// Shipping address, non-empty.
    pub address: String,
}

/// A single checkout field that failed validation, for inline display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The name field is empty.
    EmptyName,

    /// The email field does not look like an email address.
    InvalidEmail,

    /// The address field is empty.
    EmptyAddress,
}

/// Errors from submitting the cart as an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// One or more buyer fields failed validation; nothing was submitted.
    #[error("invalid checkout fields: {0:?}")]
    Invalid(Vec<FieldError>),

    /// The cart holds no lines; there is nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// The grand total does not convert to minor currency units.
    #[error(transparent)]
    Total(#[from] MinorUnitsError),

    /// The order store rejected or failed the write. The cart is unchanged
    /// and the submission can be retried as-is.
    #[error("order submission failed")]
    Submission(#[source] OrdersServiceError),
}

/// Validates the buyer fields, returning every failing field.
pub fn validate(details: &CheckoutDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if details.name.trim().is_empty() {
        errors.push(FieldError::EmptyName);
    }

    if !is_valid_email(&details.email) {
        errors.push(FieldError::InvalidEmail);
    }

    if details.address.trim().is_empty() {
        errors.push(FieldError::EmptyAddress);
    }

    errors
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

/// Submits the current cart as an order.
///
/// The grand total is read from the live cart immediately before
/// conversion to minor units, so stale and fresh state never mix. The cart
/// is cleared only after the order store confirms the write.
///
/// # Errors
///
/// Returns a [`CheckoutError`] when validation fails, the cart is empty,
/// the total overflows, or the order store fails; in every case the cart
/// is left untouched.
pub async fn submit_order<S: CartStorage>(
    store: &mut CartStore<S>,
    details: CheckoutDetails,
    orders: &dyn OrdersService,
) -> Result<Order, CheckoutError> {
    let field_errors = validate(&details);

    if !field_errors.is_empty() {
        return Err(CheckoutError::Invalid(field_errors));
    }

    if store.cart().is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let total = prices::to_minor_units(store.total())?;

    let order = NewOrder {
        name: details.name,
        email: details.email,
        address: details.address,
        total,
        items: store.cart().lines().to_vec(),
    };

    let created = orders
        .create_order(order)
        .await
        .map_err(CheckoutError::Submission)?;

    store.clear();

    info!(order = created.id, "order placed, cart cleared");

    Ok(created)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use shopfront::{fixtures::product, storage::MemoryStorage};

    use crate::orders::MockOrdersService;

    use super::*;

    fn details() -> CheckoutDetails {
        CheckoutDetails {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 Analytical Row".to_string(),
        }
    }

    fn order_from(new: &NewOrder) -> Order {
        Order {
            id: 42,
            name: new.name.clone(),
            email: new.email.clone(),
            address: new.address.clone(),
            total: new.total,
            status: "pending".to_string(),
            items: new.items.clone(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn seeded_store() -> CartStore<MemoryStorage> {
        let mut store = CartStore::restore(MemoryStorage::new());
        store.add(product(1, Decimal::new(999, 2)));
        store.add(product(1, Decimal::new(999, 2)));
        store.add(product(2, Decimal::new(500, 2)));
        store
    }

    #[tokio::test]
    async fn successful_submission_clears_the_cart() -> TestResult {
        let mut store = seeded_store();
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .withf(|new| new.total == 2498 && new.items.len() == 2)
            .returning(|new| Ok(order_from(&new)));

        let created = submit_order(&mut store, details(), &orders).await?;

        assert_eq!(created.id, 42);
        assert_eq!(created.status, "pending");
        assert!(store.cart().is_empty(), "cart must be empty after success");

        Ok(())
    }

    #[tokio::test]
    async fn failed_submission_leaves_cart_unchanged() {
        let mut store = seeded_store();
        let before = store.cart().clone();

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .returning(|_| Err(OrdersServiceError::Sql(sqlx::Error::PoolClosed)));

        let result = submit_order(&mut store, details(), &orders).await;

        assert!(
            matches!(result, Err(CheckoutError::Submission(_))),
            "expected Submission error, got {result:?}"
        );
        assert_eq!(store.cart(), &before, "cart must be untouched on failure");
    }

    #[tokio::test]
    async fn invalid_fields_are_reported_before_any_network_call() {
        let mut store = seeded_store();
        let before = store.cart().clone();

        let mut orders = MockOrdersService::new();
        orders.expect_create_order().never();

        let result = submit_order(
            &mut store,
            CheckoutDetails {
                name: "  ".to_string(),
                email: "not-an-email".to_string(),
                address: String::new(),
            },
            &orders,
        )
        .await;

        match result {
            Err(CheckoutError::Invalid(fields)) => {
                assert_eq!(
                    fields,
                    vec![
                        FieldError::EmptyName,
                        FieldError::InvalidEmail,
                        FieldError::EmptyAddress
                    ]
                );
            }
            other => panic!("expected Invalid error, got {other:?}"),
        }

        assert_eq!(store.cart(), &before);
    }

    #[tokio::test]
    async fn empty_cart_cannot_be_submitted() {
        let mut store = CartStore::restore(MemoryStorage::new());

        let mut orders = MockOrdersService::new();
        orders.expect_create_order().never();

        let result = submit_order(&mut store, details(), &orders).await;

        assert!(
            matches!(result, Err(CheckoutError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
    }

    #[test]
    fn email_validation_accepts_plain_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
    }

    #[test]
    fn email_validation_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@example.com."));
    }
}
