//! Item Manager App
//!
//! Root view: header, create button, item grid and the form modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{ItemFormModal, ItemGrid};
use crate::config::Config;
use crate::context::AppContext;
use crate::store::{store_open_create, store_set_items, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(Config::from_env());

    // Provide state and config to all children
    provide_context(store);
    provide_context(ctx);

    // Load items on mount
    Effect::new(move |_| {
        let service = ctx.service();
        log::debug!("[APP] Loading items from {}", ctx.config().api_base_url);
        spawn_local(async move {
            match actions::load_items(&service).await {
                Ok(loaded) => store_set_items(&store, loaded),
                Err(err) => log::error!("[APP] Failed to load items: {}", err),
            }
        });
    });

    view! {
        <div class="container">
            <h1 class="title">"🛒 Item List"</h1>

            <button class="create-item-button" on:click=move |_| store_open_create(&store)>
                "+ Create Item"
            </button>

            <Show when=move || store.modal_open().get()>
                <ItemFormModal />
            </Show>

            <ItemGrid />

            <p class="item-count">{move || format!("{} items", store.items().with(|items| items.len()))}</p>
        </div>
    }
}
