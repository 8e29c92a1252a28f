//! Runtime Configuration
//!
//! Read once at startup from an optional
//! `<script type="application/json" id="app-config">` block in the host page.

use serde::Deserialize;

use crate::browser;
use crate::error::AppError;

const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Backend origin; empty means "same origin as the page"
    pub api_base: String,
    pub open_library_base: String,
    pub covers_base: String,
    /// Passcode gating the admin ISBN tool
    pub admin_passcode: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            open_library_base: "https://openlibrary.org".to_string(),
            covers_base: "https://covers.openlibrary.org".to_string(),
            admin_passcode: "12345".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load from the page, falling back to defaults. `api_base` is filled
    /// from `window.location.origin` when not configured.
    pub fn load() -> Self {
        let mut config = match browser::element_text(CONFIG_ELEMENT_ID) {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                tracing::warn!("[CONFIG] {}, using defaults", e);
                Self::default()
            }),
            None => Self::default(),
        };
        if config.api_base.is_empty() {
            config.api_base = browser::origin().unwrap_or_default();
        }
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        tracing::debug!("[CONFIG] api_base={}", config.api_base);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"apiBase":"https://api.example.com"}"#).unwrap();
        assert_eq!(config.api_base, "https://api.example.com");
        assert_eq!(config.open_library_base, "https://openlibrary.org");
        assert_eq!(config.admin_passcode, "12345");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = AppConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
