//! Frontend Models
//!
//! Data structures matching the Item Service wire format.

use serde::{Deserialize, Serialize};

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl Item {
    /// Price as shown on a card: `$400000`, `$12.5`
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPayload {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

/// Response envelope returned by `PUT /update-item/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdatedItem {
    pub item: Item,
    #[serde(default)]
    pub message: Option<String>,
}
