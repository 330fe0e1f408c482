//! Error type for REST round-trips.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is terminal for the attempted operation. Pages turn the error
//! into a notification, preferring the server's own message when it sent one.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("record not found")]
    NotFound,
    /// Server refused the payload with a user-facing reason.
    #[error("{0}")]
    Validation(String),
    /// Server answered with a non-success status.
    #[error("request failed with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// Request never completed (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// Request body could not be built.
    #[error("could not encode request: {0}")]
    Encode(String),
    /// Sign-in succeeded but no bearer token came back.
    #[error("response did not include a valid token")]
    MissingToken,
}

impl SyncError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match (status, message) {
            (404, _) => Self::NotFound,
            (400 | 409 | 422, Some(message)) => Self::Validation(message),
            (status, message) => Self::Rejected { status, message },
        }
    }

    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        let message = match self {
            Self::Validation(message) => Some(message.as_str()),
            Self::Rejected { message, .. } => message.as_deref(),
            Self::NotFound | Self::Network(_) | Self::Encode(_) | Self::MissingToken => None,
        };
        message.filter(|m| !m.trim().is_empty())
    }

    /// Text for a failure notification.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// Longest plain-text body shown verbatim to the user.
const MAX_PLAIN_MESSAGE_LEN: usize = 200;

/// Pull a user-facing message out of an error response body.
///
/// Understands `{"message": "..."}` JSON and short plain-text bodies.
pub fn extract_server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(str::to_owned),
        Ok(serde_json::Value::String(text)) => Some(text).filter(|t| !t.trim().is_empty()),
        Ok(_) => None,
        Err(_) if trimmed.len() <= MAX_PLAIN_MESSAGE_LEN && !trimmed.starts_with('<') => Some(trimmed.to_owned()),
        Err(_) => None,
    }
}
