//! HTTP Item Service
//!
//! reqwest-backed client for the Item Service REST endpoints.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, ItemService};
use crate::config::Config;
use crate::models::{Item, ItemPayload, UpdatedItem};

/// Item Service routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    List,
    Create,
    Update(u32),
    Delete(u32),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::List => Method::GET,
            Endpoint::Create => Method::POST,
            Endpoint::Update(_) => Method::PUT,
            Endpoint::Delete(_) => Method::DELETE,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::List => "/list-items".to_string(),
            Endpoint::Create => "/create-item".to_string(),
            Endpoint::Update(id) => format!("/update-item/{}", id),
            Endpoint::Delete(id) => format!("/delete-item/{}", id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpItemService {
    client: Client,
    config: Config,
}

impl HttpItemService {
    pub fn new(config: Config) -> Self {
        Self { client: Client::new(), config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send one request and return the raw body of a 2xx response
    async fn send(&self, endpoint: Endpoint, body: Option<&ItemPayload>) -> ApiResult<String> {
        let method = endpoint.method();
        let url = self.config.endpoint(&endpoint.path());
        log::debug!("[API] {} {}", method, url);

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { method, url, status: status.as_u16() });
        }
        Ok(response.text().await?)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    Ok(serde_json::from_str(body)?)
}

/// Unwrap the `{item: ...}` envelope of an update response
fn decode_updated(body: &str) -> ApiResult<Item> {
    let updated: UpdatedItem = decode(body)?;
    if let Some(message) = &updated.message {
        log::debug!("[API] update-item {}: {}", updated.item.id, message);
    }
    Ok(updated.item)
}

#[async_trait(?Send)]
impl ItemService for HttpItemService {
    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        let body = self.send(Endpoint::List, None).await?;
        decode(&body)
    }

    async fn create_item(&self, item: &ItemPayload) -> ApiResult<Item> {
        let body = self.send(Endpoint::Create, Some(item)).await?;
        decode(&body)
    }

    async fn update_item(&self, id: u32, item: &ItemPayload) -> ApiResult<Item> {
        let body = self.send(Endpoint::Update(id), Some(item)).await?;
        decode_updated(&body)
    }

    async fn delete_item(&self, id: u32) -> ApiResult<()> {
        // Response body is unused
        self.send(Endpoint::Delete(id), None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_routes() {
        assert_eq!(Endpoint::List.path(), "/list-items");
        assert_eq!(Endpoint::List.method(), Method::GET);
        assert_eq!(Endpoint::Create.path(), "/create-item");
        assert_eq!(Endpoint::Create.method(), Method::POST);
        assert_eq!(Endpoint::Update(4).path(), "/update-item/4");
        assert_eq!(Endpoint::Update(4).method(), Method::PUT);
        assert_eq!(Endpoint::Delete(9).path(), "/delete-item/9");
        assert_eq!(Endpoint::Delete(9).method(), Method::DELETE);
    }

    #[test]
    fn test_decode_item_list() {
        let items: Vec<Item> = decode(
            r#"[{"id": 1, "name": "A", "price": 1, "quantity": 2},
                {"id": 2, "name": "B", "price": 2.5, "quantity": 0}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].price, 2.5);
    }

    #[test]
    fn test_decode_updated_unwraps_item() {
        let item = decode_updated(
            r#"{"message": "Item updated successfully", "item": {"id": 3, "name": "C", "price": 10, "quantity": 1}}"#,
        )
        .unwrap();
        assert_eq!(item, Item { id: 3, name: "C".into(), price: 10.0, quantity: 1 });
    }

    #[test]
    fn test_decode_updated_not_found_is_error() {
        let err = decode_updated(r#"{"message": "Item not found"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
