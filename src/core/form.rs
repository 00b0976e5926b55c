//! Draft form - the single record under composition and its edit target.
//!
//! The form holds exactly one draft. Entering edit mode copies a persisted
//! product (identifier included) into it; submitting always resets it to
//! the empty record. There is no explicit cancel: the only way out of edit
//! mode without submitting is to overwrite the fields by hand, a
//! deliberate simplification of the original interface.

use crate::entities::Product;

/// Coerces raw quantity text to a count, falling back to `0` for anything
/// that does not parse as a non-negative integer.
#[must_use]
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Coerces raw price text to dollars, falling back to `0.0` for anything
/// that does not parse as a finite, non-negative number.
#[must_use]
pub fn parse_price(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
        .unwrap_or(0.0)
}

/// The record currently being composed, plus the identifier of the
/// persisted record it is bound to for update (`None` = create mode).
#[derive(Debug, Default)]
pub struct DraftForm {
    draft: Product,
    editing_id: Option<i64>,
}

impl DraftForm {
    /// Creates a form holding the empty draft in create mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The draft as currently composed.
    #[must_use]
    pub const fn draft(&self) -> &Product {
        &self.draft
    }

    /// The edit target, if the draft is bound to a persisted record.
    #[must_use]
    pub const fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    /// Whether the next submit will update rather than create.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Sets the product name verbatim.
    pub fn set_name(&mut self, name: &str) {
        self.draft.name = name.to_string();
    }

    /// Sets the category verbatim; empty means uncategorized.
    pub fn set_category(&mut self, category: &str) {
        self.draft.category = category.to_string();
    }

    /// Sets the quantity from raw text via [`parse_quantity`].
    pub fn set_quantity_input(&mut self, raw: &str) {
        self.draft.quantity = parse_quantity(raw);
    }

    /// Sets the price from raw text via [`parse_price`].
    pub fn set_price_input(&mut self, raw: &str) {
        self.draft.price = parse_price(raw);
    }

    /// Copies `product` (identifier included) into the draft and marks it
    /// as the edit target.
    pub fn begin_edit(&mut self, product: &Product) {
        self.draft = product.clone();
        self.editing_id = product.id;
    }

    /// Returns the draft to the empty record and clears the edit target.
    pub fn reset(&mut self) {
        self.draft = Product::empty();
        self.editing_id = None;
    }
}
