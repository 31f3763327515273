//! Like errors - every way a like or unlike can fail
//!
//! Transport and server failures are classified instead of collapsing into a
//! single "no result" outcome, so callers can tell a dropped connection from a
//! rejected request.

use thiserror::Error;

use crate::value_objects::{LikeId, MessageId};

/// Result type for like operations
pub type LikeResult<T> = Result<T, LikeError>;

/// Like operation errors
#[derive(Debug, Error)]
pub enum LikeError {
    // =========================================================================
    // Transport Errors
    // =========================================================================
    #[error("Request failed without a response: {0}")]
    Network(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    // =========================================================================
    // Server Responses
    // =========================================================================
    #[error("Like record not found: {0}")]
    NotFound(LikeId),

    #[error("Request rejected ({status}): {message}")]
    Client { status: u16, message: String },

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    // =========================================================================
    // Toggle Errors
    // =========================================================================
    #[error("A submit is already in flight for message {0}")]
    SubmitInFlight(MessageId),

    #[error("No like form for message {0}")]
    UnknownMessage(MessageId),

    // =========================================================================
    // Setup Errors
    // =========================================================================
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LikeError {
    /// Classify a non-success HTTP status into an error
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status >= 500 {
            Self::Server { status, message }
        } else {
            Self::Client { status, message }
        }
    }

    /// Get an error code string for logs and callers
    pub fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "NETWORK_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::NotFound(_) => "UNKNOWN_LIKE",
            Self::Client { .. } => "REQUEST_REJECTED",
            Self::Server { .. } => "SERVER_ERROR",
            Self::SubmitInFlight(_) => "SUBMIT_IN_FLIGHT",
            Self::UnknownMessage(_) => "UNKNOWN_MESSAGE",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }

    /// HTTP status the server answered with, if it answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(404),
            Self::Client { status, .. } | Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the server rejected the request (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Client { .. })
    }

    /// Check if the server failed (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    /// Check if the record is already gone on the server
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if repeating the same request later could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Server { .. } | Self::SubmitInFlight(_)
        )
    }
}
