//! Item Manager State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::Submission;
use crate::form::ItemForm;
use crate::models::Item;

/// View state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cached copy of the server's item list
    pub items: Vec<Item>,
    /// Create/edit form backing the modal
    pub form: ItemForm,
    pub modal_open: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// List Transitions
// ========================

fn apply_to_items(items: &mut Vec<Item>, submission: Submission) {
    match submission {
        Submission::Created(item) => items.push(item),
        Submission::Updated { id, item } => replace_item(items, id, item),
    }
}

/// Replace the entry whose id is `id`; other entries are untouched
pub fn replace_item(items: &mut [Item], id: u32, updated: Item) {
    if let Some(slot) = items.iter_mut().find(|item| item.id == id) {
        *slot = updated;
    } else {
        log::warn!("[STORE] Updated item {} is no longer listed", id);
    }
}

pub fn remove_item(items: &mut Vec<Item>, id: u32) {
    items.retain(|item| item.id != id);
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_items(store: &AppStore, items: Vec<Item>) {
    *store.items().write() = items;
}

pub fn store_open_create(store: &AppStore) {
    *store.form().write() = ItemForm::default();
    *store.modal_open().write() = true;
}

pub fn store_open_edit(store: &AppStore, item: &Item) {
    *store.form().write() = ItemForm::from_item(item);
    *store.modal_open().write() = true;
}

pub fn store_dismiss_modal(store: &AppStore) {
    *store.form().write() = ItemForm::default();
    *store.modal_open().write() = false;
}

/// Apply `edit` to a copy of `current`; `None` when nothing changed
pub fn edited_form(current: &ItemForm, edit: impl FnOnce(&mut ItemForm)) -> Option<ItemForm> {
    let mut next = current.clone();
    edit(&mut next);
    (next != *current).then_some(next)
}

/// Edit form fields. Writes only on change, so an unchanged parse of
/// partial input like `1.` doesn't reset the bound input.
pub fn store_edit_form(store: &AppStore, edit: impl FnOnce(&mut ItemForm)) {
    let current = store.form().get_untracked();
    if let Some(next) = edited_form(&current, edit) {
        *store.form().write() = next;
    }
}

/// One form field, notifying only when that field changes
pub fn form_field<T>(store: AppStore, pick: fn(&ItemForm) -> T) -> Memo<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    Memo::new(move |_| store.form().with(pick))
}

pub fn store_apply_submission(store: &AppStore, submission: Submission) {
    apply_to_items(&mut store.items().write(), submission);
    store_dismiss_modal(store);
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: u32) {
    remove_item(&mut store.items().write(), item_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn make_item(id: u32, name: &str) -> Item {
        Item { id, name: name.to_string(), price: 10.0, quantity: 1 }
    }

    fn listed_store(ids: &[u32]) -> AppStore {
        Owner::new().set();
        let store = Store::new(AppState::default());
        store_set_items(&store, ids.iter().map(|id| make_item(*id, &format!("Item {}", id))).collect());
        store
    }

    fn ids(store: &AppStore) -> Vec<u32> {
        store.items().get_untracked().iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_set_items_replaces_collection() {
        let store = listed_store(&[9]);
        let fetched = vec![make_item(1, "a"), make_item(2, "b"), make_item(3, "c")];
        store_set_items(&store, fetched.clone());
        assert_eq!(store.items().get_untracked(), fetched);
    }

    #[test]
    fn test_open_create_resets_form() {
        let store = listed_store(&[1]);
        store_open_edit(&store, &make_item(1, "a"));
        store_open_create(&store);
        assert!(store.modal_open().get_untracked());
        assert_eq!(store.form().get_untracked(), ItemForm::default());
    }

    #[test]
    fn test_open_edit_seeds_form() {
        let store = listed_store(&[1, 2]);
        let target = Item { id: 2, name: "Hendrix 2400 Edition".into(), price: 330000.0, quantity: 4 };
        store_open_edit(&store, &target);

        let form = store.form().get_untracked();
        assert!(store.modal_open().get_untracked());
        assert_eq!(form.name, "Hendrix 2400 Edition");
        assert_eq!(form.price, 330000.0);
        assert_eq!(form.quantity, 4);
        assert_eq!(form.editing_item_id, Some(2));
    }

    #[test]
    fn test_dismiss_resets_without_touching_items() {
        let store = listed_store(&[1, 2]);
        let before = store.items().get_untracked();
        store_open_edit(&store, &make_item(2, "b"));
        store_edit_form(&store, |form| form.name.push_str(" edited"));
        store_dismiss_modal(&store);

        assert!(!store.modal_open().get_untracked());
        assert_eq!(store.form().get_untracked(), ItemForm::default());
        assert_eq!(store.items().get_untracked(), before);
    }

    #[test]
    fn test_created_item_is_appended_and_modal_closes() {
        let store = listed_store(&[1, 2]);
        store_open_create(&store);
        store_edit_form(&store, |form| form.name = "new".into());
        store_apply_submission(&store, Submission::Created(make_item(3, "new")));

        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert!(!store.modal_open().get_untracked());
        assert_eq!(store.form().get_untracked(), ItemForm::default());
    }

    #[test]
    fn test_update_replaces_only_target() {
        let store = listed_store(&[1, 2, 3]);
        let before = store.items().get_untracked();
        store_open_edit(&store, &before[1]);
        let updated = Item { id: 2, name: "renamed".into(), price: 5.0, quantity: 7 };
        store_apply_submission(&store, Submission::Updated { id: 2, item: updated.clone() });

        let items = store.items().get_untracked();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], before[0]);
        assert_eq!(items[1], updated);
        assert_eq!(items[2], before[2]);
        assert!(!store.modal_open().get_untracked());
    }

    #[test]
    fn test_update_of_unlisted_item_changes_nothing() {
        let store = listed_store(&[1, 2]);
        let before = store.items().get_untracked();
        store_apply_submission(&store, Submission::Updated { id: 8, item: make_item(8, "ghost") });
        assert_eq!(store.items().get_untracked(), before);
    }

    #[test]
    fn test_remove_exact_id() {
        let store = listed_store(&[1, 2, 3]);
        store_remove_item(&store, 2);
        assert_eq!(ids(&store), vec![1, 3]);
        store_remove_item(&store, 42);
        assert_eq!(ids(&store), vec![1, 3]);
    }

    #[test]
    fn test_edited_form_reports_only_changes() {
        let form = ItemForm { price: 1.0, ..Default::default() };
        // `1.` parses back to the stored price
        assert_eq!(edited_form(&form, |f| f.price = 1.0), None);
        let next = edited_form(&form, |f| f.price = 1.5).unwrap();
        assert_eq!(next.price, 1.5);
    }

    #[test]
    fn test_form_field_ignores_other_fields() {
        let store = listed_store(&[]);
        store_open_create(&store);
        let price = form_field(store, |form| form.price);

        let runs = Arc::new(AtomicUsize::new(0));
        let counted = {
            let runs = Arc::clone(&runs);
            Memo::new(move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                price.get()
            })
        };

        assert_eq!(counted.get_untracked(), 0.0);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store_edit_form(&store, |form| form.name = "Bass".into());
        assert_eq!(counted.get_untracked(), 0.0);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        store_edit_form(&store, |form| form.price = 2.5);
        assert_eq!(counted.get_untracked(), 2.5);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
