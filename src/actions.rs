//! View Actions
//!
//! The request side of every user operation. Each action issues at most one
//! request and hands back what the store should apply on success.

use crate::api::{ApiResult, ItemService};
use crate::form::ItemForm;
use crate::models::Item;

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this item?";

/// Acknowledged form submission
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Created(Item),
    /// `id` is the edit target, `item` the server's representation
    Updated { id: u32, item: Item },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted(u32),
}

pub async fn load_items<S: ItemService + ?Sized>(service: &S) -> ApiResult<Vec<Item>> {
    let items = service.list_items().await?;
    log::info!("[APP] Loaded {} items", items.len());
    Ok(items)
}

/// Create or update depending on the form's edit target
pub async fn submit_form<S: ItemService + ?Sized>(service: &S, form: &ItemForm) -> ApiResult<Submission> {
    let payload = form.payload();
    match form.editing_item_id {
        Some(id) => {
            let item = service.update_item(id, &payload).await?;
            log::info!("[APP] Updated item {}", id);
            Ok(Submission::Updated { id, item })
        }
        None => {
            let item = service.create_item(&payload).await?;
            log::info!("[APP] Created item {}", item.id);
            Ok(Submission::Created(item))
        }
    }
}

/// Delete after `confirm` approves. A declined prompt sends nothing.
pub async fn delete_item<S, F>(service: &S, id: u32, confirm: F) -> ApiResult<DeleteOutcome>
where
    S: ItemService + ?Sized,
    F: FnOnce(&str) -> bool,
{
    if !confirm(DELETE_CONFIRM_MESSAGE) {
        return Ok(DeleteOutcome::Cancelled);
    }
    service.delete_item(id).await?;
    log::info!("[APP] Deleted item {}", id);
    Ok(DeleteOutcome::Deleted(id))
}
