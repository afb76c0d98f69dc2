//! API error types.

use thiserror::Error;

/// Errors that can occur when talking to the prova backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Sign-in was refused by the server.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The server answered with a non-success status and an error body.
    ///
    /// The body text is meant to be surfaced to the user verbatim.
    #[error("server rejected the request ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// The server answered with a non-success status and no body.
    ///
    /// Treated like a network failure when mapped to user messaging.
    #[error("server returned {status} with no error body")]
    EmptyFailure { status: u16 },

    /// HTTP transport error — no response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// Structured error text from the server, if any.
    ///
    /// Callers surface this verbatim; when absent they fall back to a fixed
    /// generic message.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }

    /// True when no usable response was received.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::EmptyFailure { .. })
    }
}
