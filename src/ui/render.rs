//! Renderers - turn a store snapshot into text, one per view mode.
//!
//! Both renderers consume the same snapshot and differ only in layout.
//! Prices always print with two fractional digits; an empty category
//! shows as `-` in the table and is omitted from cards.

use crate::{core::ViewMode, entities::Product};

/// Renders `products` with the renderer selected by `mode`.
#[must_use]
pub fn render(mode: ViewMode, products: &[Product]) -> String {
    match mode {
        ViewMode::List => render_list(products),
        ViewMode::Card => render_cards(products),
    }
}

/// Tabular list view. An empty store renders the placeholder row.
#[must_use]
pub fn render_list(products: &[Product]) -> String {
    if products.is_empty() {
        return "No items found.\n".to_string();
    }

    let name_width = products
        .iter()
        .map(|p| p.name.len())
        .chain(["Product Name".len()])
        .max()
        .unwrap_or(0);
    let category_width = products
        .iter()
        .map(|p| category_cell(p).len())
        .chain(["Category".len()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:<name_width$}  {:<category_width$}  {:>8}  {:>10}\n",
        "ID", "Product Name", "Category", "Quantity", "Price"
    ));
    out.push_str(&format!(
        "{}\n",
        "-".repeat(4 + name_width + category_width + 8 + 10 + 8)
    ));
    for product in products {
        out.push_str(&format!(
            "{:>4}  {:<name_width$}  {:<category_width$}  {:>8}  {:>10}\n",
            product.id.map_or_else(|| "?".to_string(), |id| id.to_string()),
            product.name,
            category_cell(product),
            product.quantity,
            format!("${:.2}", product.price),
        ));
    }
    out
}

/// Card view: one block per product. An empty store renders nothing,
/// matching the list-only placeholder of the original page.
#[must_use]
pub fn render_cards(products: &[Product]) -> String {
    let mut out = String::new();
    for product in products {
        let id = product.id.map_or_else(|| "?".to_string(), |id| id.to_string());
        out.push_str(&format!("┌─ {} (#{id})\n", product.name));
        if !product.category.is_empty() {
            out.push_str(&format!("│  [{}]\n", product.category));
        }
        out.push_str(&format!(
            "└─ Qty: {}  ${:.2}\n",
            product.quantity, product.price
        ));
    }
    out
}

fn category_cell(product: &Product) -> &str {
    if product.category.is_empty() {
        "-"
    } else {
        &product.category
    }
}
