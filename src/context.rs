//! Application Context
//!
//! Shared Item Service client provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpItemService;
use crate::config::Config;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Built once; clones share the underlying reqwest client
    service: StoredValue<HttpItemService, LocalStorage>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            service: StoredValue::new_local(HttpItemService::new(config)),
        }
    }

    pub fn config(&self) -> Config {
        self.service.with_value(|service| service.config().clone())
    }

    /// Client for the configured Item Service
    pub fn service(&self) -> HttpItemService {
        self.service.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
