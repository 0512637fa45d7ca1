//! Structured logging module for Falcon Panel
//!
//! Provides consistent, contextual logging across the application.
//! Every event carries an `operation` field so logs can be filtered per flow.

use crate::shared::errors::AppError;

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    SessionResolve,
    ProfileFetch,
    AuthRedirect,
    Logout,
    Navigation,
    OutsideClick,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::SessionResolve => "session_resolve",
            LogOperation::ProfileFetch => "profile_fetch",
            LogOperation::AuthRedirect => "auth_redirect",
            LogOperation::Logout => "logout",
            LogOperation::Navigation => "navigation",
            LogOperation::OutsideClick => "outside_click",
        }
    }
}

/// Log session resolution start
pub fn log_session_resolve_start(token_key: &str) {
    tracing::debug!(
        operation = LogOperation::SessionResolve.as_str(),
        token_key = token_key,
        "Resolving dashboard session"
    );
}

/// Log profile request
pub fn log_profile_fetch_start(url: &str) {
    tracing::debug!(
        operation = LogOperation::ProfileFetch.as_str(),
        url = url,
        "Fetching current user"
    );
}

/// Log profile loaded
pub fn log_profile_loaded(email: &str) {
    tracing::info!(
        operation = LogOperation::ProfileFetch.as_str(),
        email = email,
        "Current user loaded"
    );
}

/// Log redirect to root after a failed session resolution
pub fn log_auth_redirect(error: &AppError) {
    match error {
        AppError::MissingToken => tracing::info!(
            operation = LogOperation::AuthRedirect.as_str(),
            error_kind = error.kind(),
            "No access token, redirecting to sign in"
        ),
        _ => tracing::error!(
            operation = LogOperation::AuthRedirect.as_str(),
            error_kind = error.kind(),
            error = %error,
            "Error fetching user data, redirecting to sign in"
        ),
    }
}

/// Log a resolved session dropped because the page unmounted
pub fn log_unmounted_skip() {
    tracing::debug!(
        operation = LogOperation::SessionResolve.as_str(),
        "Dashboard unmounted before session resolved, skipping update"
    );
}

/// Log logout
pub fn log_logout(token_key: &str) {
    tracing::info!(
        operation = LogOperation::Logout.as_str(),
        token_key = token_key,
        "Access token removed, logging out"
    );
}

/// Log storage failure
pub fn log_storage_error(action: &str, error: &AppError) {
    tracing::warn!(
        operation = LogOperation::Logout.as_str(),
        action = action,
        error = %error,
        "Storage operation failed"
    );
}

/// Log navigation triggered by the shell
pub fn log_navigation(to: &str) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        to = to,
        "Navigating"
    );
}

/// Log sidebar closed by a pointer press outside of it
pub fn log_outside_click_close() {
    tracing::trace!(
        operation = LogOperation::OutsideClick.as_str(),
        "Pointer down outside sidebar, closing"
    );
}

/// Log listener registration failure
pub fn log_listener_error(event: &str, detail: &str) {
    tracing::warn!(
        operation = LogOperation::OutsideClick.as_str(),
        event = event,
        detail = detail,
        "Failed to update document listener"
    );
}
