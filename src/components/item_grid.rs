//! Item Grid Component

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::store::{use_app_store, AppStateStoreFields};

/// Grid of item cards, in list order
#[component]
pub fn ItemGrid() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="grid">
            <For
                each=move || store.items().get()
                // Key on every field so an updated item re-renders its card
                key=|item| (item.id, item.name.clone(), item.price.to_bits(), item.quantity)
                children=move |item| view! { <ItemCard item=item /> }
            />
        </div>
    }
}
