//! Error types for backend calls

use thiserror::Error;

/// Failure of a single backend request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        ApiError::Network(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        ApiError::Decode(msg.into())
    }

    /// Create an encode error
    pub fn encode(msg: impl Into<String>) -> Self {
        ApiError::Encode(msg.into())
    }

    /// Create a non-success status error, keeping the backend message if any
    pub fn status(status: u16, message: Option<String>) -> Self {
        ApiError::Status {
            status,
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    /// Message supplied by the backend in a non-2xx `{ message }` body
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text shown to the user: the backend message when present, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }
}
