//! Shopfront application modules: the catalog product source, the orders
//! store, and the checkout orchestration that ties them to the cart.

pub mod catalog;
pub mod checkout;
pub mod context;
pub mod database;
pub mod orders;
