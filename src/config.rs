//! Frontend Configuration
//!
//! Values baked in at build time via `option_env!`.

use log::LevelFilter;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Item Service base address, without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Config {
    /// Read `ITEM_SERVICE_URL` and `ITEM_MANAGER_LOG` captured at compile time
    pub fn from_env() -> Self {
        Self::from_values(option_env!("ITEM_SERVICE_URL"), option_env!("ITEM_MANAGER_LOG"))
    }

    fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self { api_base_url, log_level }
    }

    /// Absolute URL for an API path such as `/list-items`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
