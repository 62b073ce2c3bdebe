use serde::Deserialize;
use thiserror::Error;

use crate::utils::FALLBACK_ERROR_MESSAGE;

/// Failure of a call through the data layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    /// 401; the session has already been cleared
    #[error("Session expired, please sign in again")]
    Unauthorized { server_message: Option<String> },
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        server_message: Option<String>,
    },
    #[error("Parse error: {0}")]
    Decode(String),
    #[error("Serialization error: {0}")]
    Encode(String),
    #[error("Storage error: {0}")]
    Storage(String),
    /// Failure raised by caller code rather than the transport
    #[error("{0}")]
    Other(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Message the backend put in the error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { server_message } | ApiError::Status { server_message, .. } => {
                server_message.as_deref()
            }
            _ => None,
        }
    }
}

/// Error body shape: `{"message": "..."}` or `{"error": "..."}`
#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Extracts the server-provided message from an error response body
pub fn parse_server_message(body: &str) -> Option<String> {
    let parsed: ServerErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .filter(|m| !m.trim().is_empty())
        .or_else(|| parsed.error.filter(|m| !m.trim().is_empty()))
}

/// Human readable message: server message, then the error's own message, then a fixed fallback
pub fn describe_error(error: &ApiError) -> String {
    if let Some(message) = error.server_message().filter(|m| !m.trim().is_empty()) {
        return message.to_string();
    }
    let generic = error.to_string();
    if !generic.trim().is_empty() {
        return generic;
    }
    FALLBACK_ERROR_MESSAGE.to_string()
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}
