//! Order Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use shopfront::lines::CartLine;

/// Status every freshly created order starts in.
pub const STATUS_PENDING: &str = "pending";

/// A persisted order. Immutable from the storefront's view once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    /// Store-assigned identifier.
    pub id: i64,

    /// Buyer name.
    pub name: String,

    /// Buyer email.
    pub email: String,

    /// Shipping address.
    pub address: String,

    /// Order total in minor currency units.
    pub total: i64,

    /// Lifecycle status; new orders start as [`STATUS_PENDING`].
    pub status: String,

    /// Snapshot of the cart lines at submission time.
    pub items: Vec<CartLine>,

    /// When the order was accepted.
    pub created_at: Timestamp,
}

/// A new order, as derived from the cart and the checkout form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Buyer name.
    pub name: String,

    /// Buyer email.
    pub email: String,

    /// Shipping address.
    pub address: String,

    /// Order total in minor currency units, computed from the cart.
    pub total: i64,

    /// Snapshot of the cart lines being ordered.
    pub items: Vec<CartLine>,
}
