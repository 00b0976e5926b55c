//! `Stockroom` - a terminal inventory management client
//!
//! This crate provides a small inventory front-end over a remote REST API:
//! a form-style draft for creating and updating product records, a local
//! store that mirrors the server's product collection, and a toggleable
//! list/card presentation of it. All persistence is delegated to the
//! `/api/products` endpoint of an external server.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Performance
    clippy::inefficient_to_string,
    clippy::needless_pass_by_value,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// REST client for the remote product collection
pub mod api;
/// Configuration management for the API endpoint
pub mod config;
/// Core view-model - product store, draft form, and inventory controller
pub mod core;
/// Product record definitions shared by the API and the view-model
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Terminal presentation - renderers and the interactive session
pub mod ui;

#[cfg(test)]
pub mod test_utils;
