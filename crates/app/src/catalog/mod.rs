//! Catalog

pub mod client;
pub mod errors;
pub mod source;

pub use client::{CatalogClient, CatalogConfig};
pub use errors::CatalogError;
pub use source::*;
