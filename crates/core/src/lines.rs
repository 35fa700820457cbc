//! Cart Lines

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::Product;

/// One product-and-quantity pairing within a cart.
///
/// A line's identity is its product identifier; a cart never holds two
/// lines for the same product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub product: Product,

    /// Units of the product in the cart. Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Creates a line holding a single unit of `product`.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The product identifier this line is keyed by.
    pub fn product_id(&self) -> u64 {
        self.product.id
    }

    /// Line subtotal: unit price times quantity, recomputed on every call.
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::product;

    use super::*;

    #[test]
    fn new_line_starts_at_one_unit() {
        let line = CartLine::new(product(1, Decimal::new(999, 2)));

        assert_eq!(line.quantity, 1);
        assert_eq!(line.product_id(), 1);
    }

    #[test]
    fn subtotal_multiplies_price_by_quantity() {
        let mut line = CartLine::new(product(1, Decimal::new(999, 2)));
        line.quantity = 3;

        assert_eq!(line.subtotal(), Decimal::new(2997, 2));
    }
}
