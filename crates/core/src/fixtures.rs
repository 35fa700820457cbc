//! Product fixtures for tests and demos.

use rust_decimal::Decimal;

use crate::products::Product;

/// Builds a minimal product with the given identifier and unit price.
pub fn product(id: u64, price: Decimal) -> Product {
    Product {
        id,
        title: format!("Product {id}"),
        price,
        description: String::new(),
        category: "fixtures".to_string(),
        image: format!("https://example.com/products/{id}.jpg"),
        rating: None,
    }
}
