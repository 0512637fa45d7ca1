//! Application configuration
//!
//! Built once at the root component and shared through Dioxus context.

use crate::shared::constants::{
    ACCESS_TOKEN_KEY, API_BASE_URL_ENV, BRAND_NAME, DEFAULT_API_BASE_URL, TOKEN_KEY_ENV,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin, without trailing path
    pub api_base_url: String,
    /// Storage key holding the bearer token
    pub token_key: String,
    pub brand: String,
}

impl AppConfig {
    /// Defaults, with `FALCON_API_BASE_URL` / `FALCON_TOKEN_KEY` applied when set
    pub fn from_env() -> Self {
        Self::default().with_overrides(env_var)
    }

    fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = self;
        if let Some(api_base_url) = lookup(API_BASE_URL_ENV) {
            config = config.with_api_base_url(api_base_url);
        }
        if let Some(token_key) = lookup(TOKEN_KEY_ENV) {
            config = config.with_token_key(token_key);
        }
        config
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn with_token_key(mut self, token_key: impl Into<String>) -> Self {
        self.token_key = token_key.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_key: ACCESS_TOKEN_KEY.to_string(),
            brand: BRAND_NAME.to_string(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

// No process environment in the browser
#[cfg(target_arch = "wasm32")]
fn env_var(_name: &str) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://0.0.0.0:3232");
        assert_eq!(config.token_key, "accessToken");
        assert_eq!(config.brand, "Falcon Panel");
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::default()
            .with_api_base_url("http://localhost:8080")
            .with_token_key("token");
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.token_key, "token");
        assert_eq!(config.brand, "Falcon Panel");
    }

    #[test]
    fn test_overrides_apply_only_when_present() {
        let config = AppConfig::default().with_overrides(|name| match name {
            "FALCON_API_BASE_URL" => Some("https://api.example.com".to_string()),
            _ => None,
        });
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.token_key, "accessToken");

        let config = AppConfig::default().with_overrides(|_| None);
        assert_eq!(config, AppConfig::default());
    }
}
