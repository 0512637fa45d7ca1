//! Dashboard session resolution
//!
//! Token lookup, profile fetch and the phase the dashboard page renders from.
//! Every failure ends in `DashboardPhase::Redirecting`; the error class is only
//! reported through logs.

use std::cell::Cell;
use std::rc::Rc;

use crate::domain::models::UserProfile;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{
    log_auth_redirect, log_logout, log_profile_loaded, log_session_resolve_start, log_storage_error,
};
use crate::shared::services::{KeyValueStore, UserApi};

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardPhase {
    Loading,
    Authenticated(UserProfile),
    Redirecting,
}

impl DashboardPhase {
    pub fn from_result(result: Result<UserProfile>) -> Self {
        match result {
            Ok(user) => {
                log_profile_loaded(&user.email);
                DashboardPhase::Authenticated(user)
            }
            Err(err) => {
                log_auth_redirect(&err);
                DashboardPhase::Redirecting
            }
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            DashboardPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_redirecting(&self) -> bool {
        matches!(self, DashboardPhase::Redirecting)
    }
}

/// Reads a non-empty token from the store
pub fn read_token(store: &dyn KeyValueStore, token_key: &str) -> Result<String> {
    store
        .get(token_key)?
        .filter(|token| !token.trim().is_empty())
        .ok_or(AppError::MissingToken)
}

/// Looks up the token and, only if one exists, fetches the profile with it
pub async fn load_current_user<A: UserApi>(
    store: &dyn KeyValueStore,
    api: &A,
    token_key: &str,
) -> Result<UserProfile> {
    log_session_resolve_start(token_key);
    let token = read_token(store, token_key)?;
    api.fetch_current_user(&token).await
}

/// Drops the stored token. Storage failures are logged; the caller navigates
/// to the root either way.
pub fn logout(store: &dyn KeyValueStore, token_key: &str) {
    if let Err(err) = store.remove(token_key) {
        log_storage_error("remove", &err);
    }
    log_logout(token_key);
}

/// Cleared when the owning component unmounts
#[derive(Debug, Clone)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn release(&self) {
        self.0.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::services::MemoryStore;
    use std::cell::RefCell;

    struct MockApi {
        response: Result<UserProfile>,
        tokens: RefCell<Vec<String>>,
    }

    impl MockApi {
        fn returning(response: Result<UserProfile>) -> Self {
            Self {
                response,
                tokens: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.tokens.borrow().len()
        }
    }

    impl UserApi for MockApi {
        async fn fetch_current_user(&self, token: &str) -> Result<UserProfile> {
            self.tokens.borrow_mut().push(token.to_string());
            self.response.clone()
        }
    }

    fn store_with_token(token: &str) -> MemoryStore {
        MemoryStore::new().with_entry("accessToken", token)
    }

    #[tokio::test]
    async fn test_missing_token_redirects_without_fetch() {
        let store = MemoryStore::new();
        let api = MockApi::returning(Ok(UserProfile::new("a@b.com")));

        let result = load_current_user(&store, &api, "accessToken").await;

        assert_eq!(result, Err(AppError::MissingToken));
        assert_eq!(api.calls(), 0);
        assert!(DashboardPhase::from_result(result).is_redirecting());
    }

    #[tokio::test]
    async fn test_blank_token_counts_as_missing() {
        let store = store_with_token("   ");
        let api = MockApi::returning(Ok(UserProfile::new("a@b.com")));

        let result = load_current_user(&store, &api, "accessToken").await;

        assert_eq!(result, Err(AppError::MissingToken));
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_token_is_forwarded_and_profile_loaded() {
        let store = store_with_token("abc123");
        let api = MockApi::returning(Ok(UserProfile::new("a@b.com")));

        let phase = DashboardPhase::from_result(load_current_user(&store, &api, "accessToken").await);

        assert_eq!(api.tokens.borrow().as_slice(), ["abc123".to_string()]);
        assert_eq!(phase.user().map(|u| u.email.as_str()), Some("a@b.com"));
        assert!(!phase.is_redirecting());
    }

    #[tokio::test]
    async fn test_unauthorized_redirects() {
        let store = store_with_token("expired");
        let api = MockApi::returning(Err(AppError::Unauthorized { status: 401 }));

        let phase = DashboardPhase::from_result(load_current_user(&store, &api, "accessToken").await);

        assert_eq!(api.calls(), 1);
        assert_eq!(phase, DashboardPhase::Redirecting);
    }

    #[tokio::test]
    async fn test_network_failure_redirects() {
        let store = store_with_token("abc123");
        let api = MockApi::returning(Err(AppError::Network("connection refused".to_string())));

        let phase = DashboardPhase::from_result(load_current_user(&store, &api, "accessToken").await);

        assert_eq!(phase, DashboardPhase::Redirecting);
    }

    #[tokio::test]
    async fn test_server_error_and_decode_error_redirect() {
        let store = store_with_token("abc123");
        for err in [
            AppError::Http { status: 500, status_text: "Internal Server Error".to_string() },
            AppError::Decode("missing field `email`".to_string()),
        ] {
            let api = MockApi::returning(Err(err));
            let phase = DashboardPhase::from_result(load_current_user(&store, &api, "accessToken").await);
            assert!(phase.is_redirecting());
        }
    }

    #[test]
    fn test_logout_removes_token() {
        let store = store_with_token("abc123");
        logout(&store, "accessToken");
        assert_eq!(store.get("accessToken").unwrap(), None);
    }

    #[test]
    fn test_logout_without_token_is_ok() {
        let store = MemoryStore::new();
        logout(&store, "accessToken");
        assert_eq!(store.get("accessToken").unwrap(), None);
    }

    #[test]
    fn test_mount_guard_release_is_shared() {
        let guard = MountGuard::new();
        let held_by_task = guard.clone();
        assert!(held_by_task.is_mounted());

        guard.release();
        assert!(!held_by_task.is_mounted());
    }
}
