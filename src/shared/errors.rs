use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("No access token in storage")]
    MissingToken,

    #[error("Unauthorized: HTTP {status}")]
    Unauthorized { status: u16 },

    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Stable label used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::MissingToken => "missing_token",
            AppError::Unauthorized { .. } => "unauthorized",
            AppError::Http { .. } => "http",
            AppError::Network(_) => "network",
            AppError::Decode(_) => "decode",
            AppError::Storage(_) => "storage",
        }
    }

    /// Maps a response status to an error, `None` for 2xx
    pub fn from_status(status: u16, status_text: &str) -> Option<Self> {
        match status {
            200..=299 => None,
            401 | 403 => Some(AppError::Unauthorized { status }),
            _ => Some(AppError::Http {
                status,
                status_text: status_text.to_string(),
            }),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
