use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("request failed"))]
    Http { status: u16, detail: Option<String> },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error body returned by the backend (`{"error": "..."}`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl AppError {
    /// Build an HTTP error from a non-success status and its raw body
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|e| !e.trim().is_empty());
        AppError::Http { status, detail }
    }

    /// The backend-provided error message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text for the alert after a failed mutation: the backend's own message
    /// when it sent one, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        let text = match self {
            AppError::Http { detail: Some(detail), .. } => detail.as_str(),
            AppError::Validation(message) => message.as_str(),
            _ => fallback,
        };
        format!("Erreur: {}", text)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
