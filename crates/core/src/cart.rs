//! Cart

use rust_decimal::Decimal;

use crate::{lines::CartLine, products::Product};

/// Outcome of a cart mutation, so callers can show distinct notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// A new line was inserted for a product not previously in the cart.
    Added,

    /// An existing line's quantity was incremented.
    QuantityIncreased,

    /// A line was removed.
    Removed,
}

/// An ordered collection of cart lines, addressed by product identifier.
///
/// Lines keep the order their products were first added in. Derived values
/// are recomputed from the line collection on every read and never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from previously stored lines, preserving their order
    /// and quantities.
    ///
    /// Duplicate product identifiers are folded into the earlier line by
    /// summing quantities, so the one-line-per-product invariant holds even
    /// for a record written by something else.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();

        for line in lines {
            match cart.line_mut(line.product_id()) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }

        cart
    }

    /// Adds one unit of `product` to the cart.
    ///
    /// Increments the existing line when the product is already present,
    /// otherwise appends a new line with quantity 1.
    pub fn add(&mut self, product: Product) -> CartEvent {
        match self.line_mut(product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                CartEvent::QuantityIncreased
            }
            None => {
                self.lines.push(CartLine::new(product));
                CartEvent::Added
            }
        }
    }

    /// Replaces the quantity of the line for `product_id`.
    ///
    /// A quantity below 1 is an implicit [`Cart::remove`]. When no line
    /// exists for the product this is a no-op; no line is created.
    pub fn set_quantity(&mut self, product_id: u64, quantity: i64) -> Option<CartEvent> {
        if quantity < 1 {
            return self.remove(product_id);
        }

        if let Some(line) = self.line_mut(product_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }

        None
    }

    /// Removes the line for `product_id`, if present.
    pub fn remove(&mut self, product_id: u64) -> Option<CartEvent> {
        let before = self.lines.len();

        self.lines.retain(|line| line.product_id() != product_id);

        (self.lines.len() < before).then_some(CartEvent::Removed)
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Grand total: the sum of all line subtotals, recomputed on every call.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Total units across all lines, recomputed on every call.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `product_id`, if present.
    pub fn line(&self, product_id: u64) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|line| line.product_id() == product_id)
    }

    /// Number of distinct lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: u64) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id() == product_id)
    }
}
