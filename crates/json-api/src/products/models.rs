//! Product response models.

use rust_decimal::prelude::ToPrimitive;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopfront::products::{Product, Rating};

/// A catalog product as exposed over the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Catalog identifier of the product
    pub id: u64,

    /// Display title
    pub title: String,

    /// Unit price in major currency units
    pub price: f64,

    /// Long-form description
    pub description: String,

    /// Category name
    pub category: String,

    /// Image URI
    pub image: String,

    /// Aggregate review rating, when the catalog provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingResponse>,
}

/// Aggregate review score of a product.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RatingResponse {
    /// Average score
    pub rate: f64,

    /// Number of reviews behind the average
    pub count: u64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id,
            title: product.title,
            price: product.price.to_f64().unwrap_or_default(),
            description: product.description,
            category: product.category,
            image: product.image,
            rating: product.rating.map(RatingResponse::from),
        }
    }
}

impl From<Rating> for RatingResponse {
    fn from(rating: Rating) -> Self {
        RatingResponse {
            rate: rating.rate.to_f64().unwrap_or_default(),
            count: rating.count,
        }
    }
}
