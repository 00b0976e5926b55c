//! API layer - the seam between the view-model and the remote server.
//!
//! The view-model only ever talks to a [`ProductApi`], so its behavior can
//! be exercised against an in-memory fake. [`http::HttpProductApi`] is the
//! real implementation backed by `reqwest`.

/// HTTP implementation of the product API
pub mod http;

use crate::{entities::Product, errors::Result};

pub use http::HttpProductApi;

/// The four operations the remote product collection supports.
///
/// Mirrors the REST surface one to one: list is a full read of the
/// collection, create posts a draft without an id, update and delete are
/// addressed to a server-assigned identifier.
#[async_trait::async_trait]
pub trait ProductApi: Send + Sync {
    /// Fetches the entire product collection, in server order.
    async fn list(&self) -> Result<Vec<Product>>;

    /// Creates a new product; the returned record carries the assigned id.
    async fn create(&self, product: &Product) -> Result<Product>;

    /// Replaces the product with identifier `id`.
    async fn update(&self, id: i64, product: &Product) -> Result<Product>;

    /// Removes the product with identifier `id`.
    async fn delete(&self, id: i64) -> Result<()>;
}
