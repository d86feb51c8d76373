//! Gateway error taxonomy
//!
//! Distinguishes transport failures, non-success statuses, malformed
//! payloads, and the one conflict the UI treats specially: saving a dish
//! that is already in the user's collection.

use thiserror::Error;

/// Errors that can occur when calling the GeoDish backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The dish is already in the user's saved collection
    #[error("Already saved: {0}")]
    AlreadySaved(String),
}

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error body shape the backend uses for failures
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn text(&self) -> &str {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("")
    }
}

impl ApiError {
    /// Classify a non-success save response.
    ///
    /// A 400 whose error text mentions "already saved" is the duplicate
    /// conflict; everything else is a plain status error.
    pub fn from_save_failure(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.text().to_string())
            .unwrap_or_default();
        let message = if message.is_empty() {
            body.to_string()
        } else {
            message
        };

        if status == 400 && message.contains("already saved") {
            ApiError::AlreadySaved(message)
        } else {
            ApiError::Status { status, message }
        }
    }

    /// Classify any other non-success response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.text().to_string())
            .unwrap_or_default();
        let message = if message.is_empty() {
            body.to_string()
        } else {
            message
        };

        ApiError::Status { status, message }
    }

    /// Whether this error is the duplicate-save conflict.
    pub fn is_already_saved(&self) -> bool {
        matches!(self, ApiError::AlreadySaved(_))
    }
}
