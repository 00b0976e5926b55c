//! Terminal presentation layer.
//!
//! Pure string renderers for the two view modes, plus the interactive
//! session loop that drives the view-model. Nothing here holds product
//! state of its own; everything is read from or routed through
//! [`crate::core::Inventory`].

/// List and card renderers over a store snapshot
pub mod render;
/// Interactive terminal session
pub mod session;

pub use render::render;
pub use session::{StdinConfirm, run_session};
