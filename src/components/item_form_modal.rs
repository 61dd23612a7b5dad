//! Item Form Modal
//!
//! Overlay hosting the create/edit form. Clicking the overlay or Cancel
//! dismisses it; clicks inside the modal body don't reach the overlay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::form::{parse_price, parse_quantity};
use crate::store::{
    form_field, store_apply_submission, store_dismiss_modal, store_edit_form, use_app_store, AppStateStoreFields,
};

#[component]
pub fn ItemFormModal() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    // Per-field so typing in one input never rewrites another
    let name = form_field(store, |form| form.name.clone());
    let price = form_field(store, |form| form.price);
    let quantity = form_field(store, |form| form.quantity);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = store.form().get_untracked();
        let service = ctx.service();
        spawn_local(async move {
            match actions::submit_form(&service, &form).await {
                Ok(submission) => store_apply_submission(&store, submission),
                // Modal stays open with the entered values
                Err(err) => log::error!("[APP] Failed to save item {:?}: {}", form.editing_item_id, err),
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| store_dismiss_modal(&store)>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h2>{move || store.form().with(|form| form.title())}</h2>

                <form class="modal-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Item Name"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            store_edit_form(&store, |form| form.name = value);
                        }
                    />

                    <input
                        type="number"
                        step="any"
                        placeholder="Price"
                        required=true
                        prop:value=move || price.get().to_string()
                        on:input=move |ev| {
                            let value = parse_price(&event_target_value(&ev));
                            store_edit_form(&store, |form| form.price = value);
                        }
                    />

                    <input
                        type="number"
                        step="1"
                        placeholder="Quantity"
                        required=true
                        prop:value=move || quantity.get().to_string()
                        on:input=move |ev| {
                            let value = parse_quantity(&event_target_value(&ev));
                            store_edit_form(&store, |form| form.quantity = value);
                        }
                    />

                    <div class="modal-actions">
                        <button type="button" on:click=move |_| store_dismiss_modal(&store)>"Cancel"</button>
                        <button type="submit">{move || store.form().with(|form| form.submit_label())}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
