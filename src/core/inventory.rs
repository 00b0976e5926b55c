//! The inventory view-model - one owned object holding all mutable state.
//!
//! [`Inventory`] owns the product store, the draft form, and the view-mode
//! preference, and exposes the mutation entry points the front-end calls.
//! Writes are fire-and-forget: create, update, and delete do not branch on
//! the server's outcome. The draft clears and a full refresh follows either
//! way, so a failed write looks to the user like nothing happened except
//! the form clearing. That is a known weakness of the original interface,
//! kept because changing it changes observable behavior; failures are
//! logged at `warn`.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    api::ProductApi,
    core::{DraftForm, ProductStore},
};

/// Which renderer consumes the store snapshot. Purely presentational;
/// switching it never touches product or form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Tabular list view (the default)
    #[default]
    List,
    /// Card-grid view
    Card,
}

/// Blocking yes/no confirmation, answered by the user before a delete.
pub trait ConfirmPrompt {
    /// Presents `message` and returns the user's answer.
    fn confirm(&mut self, message: &str) -> bool;
}

/// The inventory view-model.
pub struct Inventory {
    api: Arc<dyn ProductApi>,
    store: ProductStore,
    form: DraftForm,
    view_mode: ViewMode,
}

impl Inventory {
    /// Creates a view-model with an empty store, an empty draft, and the
    /// list view selected. Call [`refresh`](Self::refresh) to populate.
    #[must_use]
    pub fn new(api: Arc<dyn ProductApi>) -> Self {
        Self {
            api,
            store: ProductStore::new(),
            form: DraftForm::new(),
            view_mode: ViewMode::default(),
        }
    }

    /// The store snapshot consumed by the renderers.
    #[must_use]
    pub const fn store(&self) -> &ProductStore {
        &self.store
    }

    /// The draft form, read-only.
    #[must_use]
    pub const fn form(&self) -> &DraftForm {
        &self.form
    }

    /// The draft form, for field edits and `begin_edit`.
    pub fn form_mut(&mut self) -> &mut DraftForm {
        &mut self.form
    }

    /// The currently selected view mode.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switches the presentation between list and card.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Re-reads the full collection from the server.
    pub async fn refresh(&mut self) {
        self.store.refresh(self.api.as_ref()).await;
    }

    /// Submits the draft: an update addressed to the edit target when one
    /// is set, a create otherwise. Success and failure both clear the
    /// draft and trigger a refresh.
    pub async fn submit(&mut self) {
        let draft = self.form.draft().clone();
        let outcome = match self.form.editing_id() {
            Some(id) => self.api.update(id, &draft).await.map(|_| ()),
            None => self.api.create(&draft).await.map(|_| ()),
        };

        if let Err(e) = outcome {
            warn!("Write to product API failed: {e}");
        }

        self.form.reset();
        self.refresh().await;
    }

    /// Asks for confirmation and, if given, deletes the product with
    /// identifier `id` and refreshes - unconditionally, even when the
    /// delete request itself failed.
    pub async fn request_delete(&mut self, id: i64, confirm: &mut dyn ConfirmPrompt) {
        if !confirm.confirm("Are you sure you want to delete this item?") {
            info!("Delete of product {id} declined.");
            return;
        }

        if let Err(e) = self.api.delete(id).await {
            warn!("Delete of product {id} failed: {e}");
        }

        self.refresh().await;
    }
}
