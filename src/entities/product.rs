//! Product entity - the single record type of the inventory.
//!
//! A product travels over the wire as
//! `{ id?, name, category, quantity, price }`. The identifier is assigned
//! by the server on creation, so a draft composed locally has no id until
//! it reappears in a subsequent fetch. An empty category means
//! "uncategorized"; the server may also send `null` for it, which is
//! mapped to the empty string on the way in.

use serde::{Deserialize, Deserializer, Serialize};

/// One inventory record, persisted or still a draft.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier; `None` while the record is a draft
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Name of the product (required, non-empty once submitted)
    pub name: String,
    /// Optional category; empty string means uncategorized
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    /// Units on hand
    pub quantity: u32,
    /// Unit price in dollars, displayed with two fractional digits
    pub price: f64,
}

impl Product {
    /// The empty draft the form starts from and resets to after a submit.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            id: None,
            name: String::new(),
            category: String::new(),
            quantity: 0,
            price: 0.0,
        }
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::empty()
    }
}

/// Treats a JSON `null` category as the empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
