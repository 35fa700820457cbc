//! Shopfront
//!
//! Core domain for the Shopfront storefront: the catalog product model, the
//! ordered cart state container with its durable persistence contract, and
//! minor-currency-unit conversion for order totals.

pub mod cart;
pub mod fixtures;
pub mod lines;
pub mod prices;
pub mod products;
pub mod snapshot;
pub mod storage;
pub mod store;
