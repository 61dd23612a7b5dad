//! Item Service Bindings
//!
//! The four REST endpoints the view talks to, behind a trait so the
//! actions can run against any backend.

mod error;
mod http;

use async_trait::async_trait;

use crate::models::{Item, ItemPayload};

pub use error::{ApiError, ApiResult};
pub use http::{Endpoint, HttpItemService};

/// Remote item store
///
/// Futures are `!Send`: on wasm32 they wrap the browser's `fetch`.
#[async_trait(?Send)]
pub trait ItemService {
    /// `GET /list-items`
    async fn list_items(&self) -> ApiResult<Vec<Item>>;

    /// `POST /create-item`, returns the item with its assigned id
    async fn create_item(&self, item: &ItemPayload) -> ApiResult<Item>;

    /// `PUT /update-item/{id}`, returns the stored representation
    async fn update_item(&self, id: u32, item: &ItemPayload) -> ApiResult<Item>;

    /// `DELETE /delete-item/{id}`
    async fn delete_item(&self, id: u32) -> ApiResult<()>;
}
