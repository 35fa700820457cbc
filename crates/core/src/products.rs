//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product, exactly as the product source returns it.
///
/// Products are read-only from the application's perspective; nothing in
/// this crate ever writes one back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier, unique across the catalog.
    pub id: u64,

    /// Display title.
    pub title: String,

    /// Unit price in major currency units.
    pub price: Decimal,

    /// Long-form description.
    pub description: String,

    /// Category name.
    pub category: String,

    /// Image URI.
    pub image: String,

    /// Aggregate review rating, when the catalog provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// Aggregate review score for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score.
    pub rate: Decimal,

    /// Number of reviews behind the average.
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_catalog_payload() -> TestResult {
        let raw = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "category": "men's clothing",
            "image": "https://example.com/81fPKd-2AYL.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(raw)?;

        assert_eq!(product.id, 1);
        assert_eq!(product.price, Decimal::new(10995, 2));
        assert_eq!(
            product.rating.as_ref().map(|rating| rating.count),
            Some(120)
        );

        Ok(())
    }

    #[test]
    fn rating_is_optional() -> TestResult {
        let raw = r#"{
            "id": 2,
            "title": "Plain Shirt",
            "price": 5.0,
            "description": "A shirt",
            "category": "men's clothing",
            "image": "https://example.com/shirt.jpg"
        }"#;

        let product: Product = serde_json::from_str(raw)?;

        assert!(product.rating.is_none());

        Ok(())
    }
}
