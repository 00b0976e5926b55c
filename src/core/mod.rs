//! Core view-model - framework-agnostic inventory state and operations.
//!
//! Three cooperating pieces of state live here: the product store
//! mirroring the server's collection, the draft form under composition,
//! and the list/card view preference. [`inventory::Inventory`] owns all
//! three and is the single object a front-end renders and drives.

/// Draft record under composition and its edit target
pub mod form;
/// The owned view-model tying store, form, and view mode together
pub mod inventory;
/// Local mirror of the server's product collection
pub mod store;

pub use form::DraftForm;
pub use inventory::{ConfirmPrompt, Inventory, ViewMode};
pub use store::ProductStore;
