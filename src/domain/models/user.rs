use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Authenticated user as returned by `GET /api/v1/auth/users/me`
///
/// Only `email` is required; any other field the backend sends is kept in
/// `extra` so new profile attributes can be rendered without a model change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: Map::new(),
        }
    }
}
