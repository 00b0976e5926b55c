//! Interactive terminal session.
//!
//! Translates typed commands into view-model calls: the form-filling
//! prompts mirror the original page's inputs (name, quantity, and price
//! required; category optional), and deletes go through a blocking y/n
//! confirmation. Quantity and price accept any text and are coerced by
//! the form's parsing functions.

use std::io::{self, BufRead, Write};

use crate::{
    core::{ConfirmPrompt, Inventory, ViewMode},
    errors::Result,
    ui::render,
};

/// [`ConfirmPrompt`] backed by stdin, defaulting to "no".
pub struct StdinConfirm;

impl ConfirmPrompt for StdinConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        let Ok(answer) = prompt(&format!("{message} [y/N]")) else {
            return false;
        };
        matches!(answer.to_lowercase().as_str(), "y" | "yes")
    }
}

/// Runs the interactive loop until the user quits or input ends.
pub async fn run_session(inventory: &mut Inventory) -> Result<()> {
    inventory.refresh().await;
    let mut confirm = StdinConfirm;

    loop {
        println!("\n=== Inventory Management System ===\n");
        print!("{}", render(inventory.view_mode(), inventory.store().products()));
        println!();

        let command = prompt("add | edit <id> | delete <id> | view <list|card> | refresh | quit")?;
        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("add" | "a"), _) => {
                fill_form(inventory)?;
                inventory.submit().await;
            }
            (Some("edit" | "e"), Some(raw)) => {
                let product = raw
                    .parse::<i64>()
                    .ok()
                    .and_then(|id| inventory.store().find(id).cloned());
                match product {
                    Some(product) => {
                        inventory.form_mut().begin_edit(&product);
                        fill_form(inventory)?;
                        inventory.submit().await;
                    }
                    None => println!("❌ No product with that id."),
                }
            }
            (Some("delete" | "d"), Some(raw)) => match raw.parse::<i64>() {
                Ok(id) => inventory.request_delete(id, &mut confirm).await,
                Err(_) => println!("❌ Expected a numeric product id."),
            },
            (Some("view" | "v"), Some("list")) => inventory.set_view_mode(ViewMode::List),
            (Some("view" | "v"), Some("card")) => inventory.set_view_mode(ViewMode::Card),
            (Some("refresh" | "r"), _) => inventory.refresh().await,
            (Some("quit" | "q"), _) => break,
            _ => println!("Unrecognized command."),
        }
    }

    Ok(())
}

/// Prompts for the form fields and writes them into the draft.
///
/// When editing, an empty answer keeps the field's current value; when
/// composing a new record, name, quantity, and price must be supplied
/// (the required inputs of the original form).
fn fill_form(inventory: &mut Inventory) -> Result<()> {
    let editing = inventory.form().is_editing();
    let current = inventory.form().draft().clone();

    let name = if editing {
        prompt(&format!("Product name [{}]", current.name))?
    } else {
        prompt_required("Product name *")?
    };
    if !name.is_empty() {
        inventory.form_mut().set_name(&name);
    }

    let category = if editing {
        prompt(&format!("Category (optional) [{}]", current.category))?
    } else {
        prompt("Category (optional)")?
    };
    if !category.is_empty() {
        inventory.form_mut().set_category(&category);
    }

    let quantity = if editing {
        prompt(&format!("Qty [{}]", current.quantity))?
    } else {
        prompt_required("Qty *")?
    };
    if !quantity.is_empty() {
        inventory.form_mut().set_quantity_input(&quantity);
    }

    let price = if editing {
        prompt(&format!("Price ($) [{:.2}]", current.price))?
    } else {
        prompt_required("Price ($) *")?
    };
    if !price.is_empty() {
        inventory.form_mut().set_price_input(&price);
    }

    Ok(())
}

/// Reads one trimmed line of input, erroring on end of input.
fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
    }
    Ok(line.trim().to_string())
}

/// Re-prompts until the answer is non-empty.
fn prompt_required(label: &str) -> Result<String> {
    loop {
        let answer = prompt(label)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        println!("This field is required.");
    }
}
