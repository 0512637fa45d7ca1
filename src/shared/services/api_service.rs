use std::future::Future;

use serde::de::DeserializeOwned;

use crate::domain::models::UserProfile;
use crate::shared::constants::{CURRENT_USER_ENDPOINT, DEFAULT_API_BASE_URL};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::log_profile_fetch_start;

/// Source of the authenticated user profile
pub trait UserApi {
    fn fetch_current_user(&self, token: &str) -> impl Future<Output = Result<UserProfile>>;
}

// API Service for authenticated HTTP requests against the Falcon backend
#[derive(Debug, Clone)]
pub struct ApiService {
    base_url: String,
}

impl ApiService {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    // Generic authenticated GET request (browser fetch)
    #[cfg(target_arch = "wasm32")]
    pub async fn get_authenticated<T: DeserializeOwned>(&self, endpoint: &str, token: &str) -> Result<T> {
        use gloo_net::http::Request;

        let url = self.url(endpoint);
        let response = Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if let Some(err) = AppError::from_status(response.status(), &response.status_text()) {
            return Err(err);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }

    // Generic authenticated GET request (native reqwest)
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn get_authenticated<T: DeserializeOwned>(&self, endpoint: &str, token: &str) -> Result<T> {
        let url = self.url(endpoint);
        let response = reqwest::Client::new()
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, bearer(token))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if let Some(err) = AppError::from_status(status.as_u16(), status.canonical_reason().unwrap_or_default()) {
            return Err(err);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

impl UserApi for ApiService {
    async fn fetch_current_user(&self, token: &str) -> Result<UserProfile> {
        log_profile_fetch_start(&self.url(CURRENT_USER_ENDPOINT));
        self.get_authenticated(CURRENT_USER_ENDPOINT, token).await
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new()
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
