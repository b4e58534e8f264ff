//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`TransportError`] - failures of the underlying HTTP exchange
//! - [`ApiError`] - the single rejection type of every API call
//! - [`StorageError`] - localStorage operations

use serde_json::Value;
use thiserror::Error;

use crate::config::{REQUEST_TIMEOUT_MS, SUCCESS_CODE, messages};

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// Browser window not available
    #[error("Browser window not available")]
    Unavailable,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestBuild,
    /// Network request failed (CORS, offline, DNS, ...)
    #[error("{0}")]
    Network(String),
    /// Request did not settle within the configured timeout
    #[error("timeout of {}ms exceeded", REQUEST_TIMEOUT_MS)]
    Timeout,
    /// Non-2xx HTTP status other than 401
    #[error("Request failed with status code {0}")]
    Status(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ReadBody,
}

impl TransportError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(msg) if msg.trim().is_empty() => messages::NETWORK_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}

/// Error returned by every API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with an envelope whose code is not the success code.
    #[error("{}", domain_message(.message))]
    Domain {
        code: i64,
        message: Option<String>,
        data: Value,
    },
    /// The server rejected the session (HTTP 401).
    #[error("{}", messages::SESSION_EXPIRED)]
    SessionExpired,
    /// The request never produced a usable HTTP response.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The response body was not the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
}

fn domain_message(message: &Option<String>) -> &str {
    match message.as_deref() {
        Some(msg) if !msg.is_empty() => msg,
        _ => messages::REQUEST_FAILED,
    }
}

impl ApiError {
    /// Envelope code carried by a domain failure.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Domain { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// Text shown to the user when this error surfaces.
    pub fn user_message(&self) -> String {
        match self {
            Self::Domain { message, .. } => domain_message(message).to_string(),
            Self::SessionExpired => messages::SESSION_EXPIRED.to_string(),
            Self::Transport(err) => err.user_message(),
            Self::Decode(_) | Self::Encode(_) => messages::REQUEST_FAILED.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Builds the domain error for an envelope that did not carry [`SUCCESS_CODE`].
pub(crate) fn domain_error(code: i64, message: Option<String>, data: Value) -> ApiError {
    debug_assert_ne!(code, SUCCESS_CODE);
    ApiError::Domain {
        code,
        message,
        data,
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// localStorage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available.
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to save to localStorage.
    #[error("failed to save to localStorage")]
    WriteFailed,
    /// Failed to remove from localStorage.
    #[error("failed to remove from localStorage")]
    RemoveFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_message_fallback() {
        let err = domain_error(500, None, Value::Null);
        assert_eq!(err.user_message(), messages::REQUEST_FAILED);

        let err = domain_error(500, Some(String::new()), Value::Null);
        assert_eq!(err.to_string(), messages::REQUEST_FAILED);

        let err = domain_error(400, Some("用户名已存在".into()), Value::Null);
        assert_eq!(err.user_message(), "用户名已存在");
        assert_eq!(err.code(), Some(400));
    }

    #[test]
    fn test_transport_messages() {
        assert_eq!(
            TransportError::Network(String::new()).user_message(),
            messages::NETWORK_ERROR
        );
        assert_eq!(
            TransportError::Network("Failed to fetch".into()).user_message(),
            "Failed to fetch"
        );
        assert_eq!(
            TransportError::Status(502).user_message(),
            "Request failed with status code 502"
        );
        assert_eq!(
            TransportError::Timeout.to_string(),
            "timeout of 10000ms exceeded"
        );
    }

    #[test]
    fn test_session_expired() {
        let err = ApiError::SessionExpired;
        assert!(err.is_session_expired());
        assert_eq!(err.code(), None);
        assert_eq!(err.user_message(), messages::SESSION_EXPIRED);
    }
}
