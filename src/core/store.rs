//! Product store - the authoritative local view of the server's collection.
//!
//! The store is never patched incrementally: every mutation elsewhere in
//! the view-model is followed by a full re-read that replaces the whole
//! collection, so after each round trip the displayed state matches
//! whatever the server last returned. A failed read keeps the previous
//! snapshot and is logged for diagnostics only.

use crate::{api::ProductApi, entities::Product};
use tracing::{debug, error};

/// In-memory ordered mirror of the server's product collection.
///
/// Every record held here came from the server and therefore carries an
/// identifier; drafts live in the form, never in the store.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    /// Creates an empty store; populated by the first [`refresh`](Self::refresh).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// The current snapshot, in server-returned order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a snapshot record by its server-assigned identifier.
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == Some(id))
    }

    /// Re-reads the full collection and replaces the snapshot wholesale.
    ///
    /// On any failure (transport, status, malformed body) the existing
    /// snapshot is left untouched; the failure is logged and nothing
    /// propagates to the caller.
    pub async fn refresh(&mut self, api: &dyn ProductApi) {
        match api.list().await {
            Ok(products) => {
                debug!("Product store refreshed with {} records.", products.len());
                self.products = products;
            }
            Err(e) => {
                error!("Failed to refresh product store, keeping previous snapshot: {e}");
            }
        }
    }
}
