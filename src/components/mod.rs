//! UI Components
//!
//! Reusable Leptos components.

mod item_card;
mod item_grid;
mod item_form_modal;

pub use item_card::ItemCard;
pub use item_grid::ItemGrid;
pub use item_form_modal::ItemFormModal;
