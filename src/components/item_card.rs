//! Item Card Component
//!
//! One item in the grid, with edit and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, DeleteOutcome};
use crate::context::use_app_context;
use crate::dialog;
use crate::models::Item;
use crate::store::{store_open_edit, store_remove_item, use_app_store};

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = item.id;
    let name = item.name.clone();
    let price = item.price_label();
    let quantity = item.quantity;

    let on_edit = move |_| store_open_edit(&store, &item);

    let on_delete = move |_| {
        let service = ctx.service();
        spawn_local(async move {
            match actions::delete_item(&service, id, dialog::confirm).await {
                Ok(DeleteOutcome::Deleted(id)) => store_remove_item(&store, id),
                Ok(DeleteOutcome::Cancelled) => {}
                Err(err) => log::error!("[APP] Failed to delete item {}: {}", id, err),
            }
        });
    };

    view! {
        <div class="card">
            <h2 class="item-name">{name}</h2>

            <div class="item-info">
                <span>"💰 " {price}</span>
                <span>"📦 Qty: " {quantity}</span>
            </div>

            <div class="card-actions">
                <button class="edit-button" on:click=on_edit>"✏️ Edit"</button>
                <button class="delete-button" on:click=on_delete>"🗑 Delete"</button>
            </div>
        </div>
    }
}
