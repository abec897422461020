//! Client Configuration
//!
//! Read once at startup from the optional `window.__PLOG_CONFIG__` object
//! injected by the hosting page. Missing fields fall back to defaults.

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Global the hosting page may define before the bundle loads
const CONFIG_GLOBAL: &str = "__PLOG_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URL of the blog API, without trailing slash
    pub api_base_url: String,
    /// Postings requested per page
    pub page_size: u32,
    /// `log` level name for the console logger
    pub log_level: String,
    /// Blog shown when the location path carries none
    pub default_blog_id: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            page_size: 15,
            log_level: "info".to_string(),
            default_blog_id: 1,
        }
    }
}

impl ClientConfig {
    /// Load from `window.__PLOG_CONFIG__`, or defaults when absent/malformed
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value::<ClientConfig>(raw) {
            Ok(config) => config.normalized(),
            Err(e) => {
                // Logger is not installed yet at this point
                web_sys::console::warn_1(&format!("[CONFIG] Ignoring malformed {}: {}", CONFIG_GLOBAL, e).into());
                Self::default()
            }
        }
    }

    /// Strip trailing slashes and keep the page size positive
    pub fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim_end_matches('/').len();
        self.api_base_url.truncate(trimmed);
        if self.page_size == 0 {
            self.page_size = Self::default().page_size;
        }
        self
    }

    /// Console log level; unknown names fall back to Info, "off" disables logging
    pub fn log_level(&self) -> Option<log::Level> {
        self.log_level
            .trim()
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Info)
            .to_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"apiBaseUrl": "https://plog.example/api/"}"#).unwrap();
        let config = config.normalized();
        assert_eq!(config.api_base_url, "https://plog.example/api");
        assert_eq!(config.page_size, 15);
        assert_eq!(config.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn test_log_level() {
        let with_level = |name: &str| ClientConfig { log_level: name.to_string(), ..Default::default() };
        assert_eq!(with_level("debug").log_level(), Some(log::Level::Debug));
        assert_eq!(with_level(" WARN ").log_level(), Some(log::Level::Warn));
        assert_eq!(with_level("loud").log_level(), Some(log::Level::Info));
        assert_eq!(with_level("off").log_level(), None);
    }

    #[test]
    fn test_zero_page_size_is_replaced() {
        let config = ClientConfig { page_size: 0, ..Default::default() }.normalized();
        assert_eq!(config.page_size, 15);
    }
}
