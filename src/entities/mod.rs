//! Entity module - record types exchanged with the product API.
//! These mirror the JSON shapes the server produces and consumes.

pub mod product;

pub use product::Product;
