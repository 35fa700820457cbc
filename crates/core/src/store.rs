//! Cart Store

use rust_decimal::Decimal;
use tracing::warn;

use crate::{
    cart::{Cart, CartEvent},
    products::Product,
    snapshot::CartSnapshot,
    storage::CartStorage,
};

/// Storage key the cart snapshot lives under.
pub const CART_STORAGE_KEY: &str = "cart-items";

/// The authoritative, durable record of what the visitor intends to buy.
///
/// Wraps the in-memory [`Cart`] together with the storage backend it
/// persists into. Every mutating operation writes a complete snapshot
/// before returning; the write is fire-and-forget, so a storage failure is
/// logged but never fails the mutation. When several contexts share one
/// backend the last write wins and other in-memory stores are not
/// refreshed.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Restores the previously persisted cart from `storage`.
    ///
    /// An absent, unreadable or malformed record yields an empty cart;
    /// restoration never fails the caller.
    pub fn restore(storage: S) -> Self {
        let cart = match storage.load(CART_STORAGE_KEY) {
            Ok(Some(raw)) => CartSnapshot::parse_or_default(&raw).into_cart(),
            Ok(None) => Cart::new(),
            Err(error) => {
                warn!("failed to read persisted cart, starting empty: {error}");

                Cart::new()
            }
        };

        Self { cart, storage }
    }

    /// Adds one unit of `product` and persists the result.
    ///
    /// The returned event distinguishes a fresh line from an incremented
    /// one so the caller can notify the user accordingly.
    pub fn add(&mut self, product: Product) -> CartEvent {
        let event = self.cart.add(product);

        self.persist();

        event
    }

    /// Replaces the quantity for `product_id` and persists the result.
    ///
    /// A quantity below 1 removes the line; an unknown product is a no-op.
    pub fn set_quantity(&mut self, product_id: u64, quantity: i64) -> Option<CartEvent> {
        let event = self.cart.set_quantity(product_id, quantity);

        self.persist();

        event
    }

    /// Removes the line for `product_id`, if present, and persists the
    /// result.
    pub fn remove(&mut self, product_id: u64) -> Option<CartEvent> {
        let event = self.cart.remove(product_id);

        self.persist();

        event
    }

    /// Empties the cart and deletes the persisted record outright, so a
    /// later restore finds nothing rather than an empty-but-present cart.
    pub fn clear(&mut self) {
        self.cart.clear();

        if let Err(error) = self.storage.remove(CART_STORAGE_KEY) {
            warn!("failed to delete persisted cart: {error}");
        }
    }

    /// Grand total of the current cart, recomputed on every call.
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    /// Total units in the current cart, recomputed on every call.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Read access to the current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Consumes the store, returning its storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        match CartSnapshot::of(&self.cart).to_json() {
            Ok(raw) => {
                if let Err(error) = self.storage.store(CART_STORAGE_KEY, &raw) {
                    warn!("failed to persist cart: {error}");
                }
            }
            Err(error) => warn!("failed to serialize cart: {error}"),
        }
    }
}
