//! Item Form State
//!
//! Transient create/edit form values held by the modal.

use crate::models::{Item, ItemPayload};

/// Create/edit form. `editing_item_id` is `None` for a create.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemForm {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub editing_item_id: Option<u32>,
}

impl ItemForm {
    /// Seed the form from an existing item and mark it as the edit target
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            editing_item_id: Some(item.id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_item_id.is_some()
    }

    pub fn payload(&self) -> ItemPayload {
        ItemPayload {
            name: self.name.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() { "Edit Item" } else { "Create Item" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update" } else { "Create" }
    }
}

/// Parse a price input. Blank or unparsable input is 0 (NaN can't go over JSON).
pub fn parse_price(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Parse a quantity input. Fractions truncate toward zero.
pub fn parse_quantity(raw: &str) -> i64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    if let Ok(value) = raw.parse::<i64>() {
        return value;
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64)
        .unwrap_or(0)
}
