//! Error types for the Game Jolt client.

use thiserror::Error;

/// Boxed cause carried by [`GameJoltError::Transport`].
pub type TransportCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when using the Game Jolt client.
#[derive(Debug, Error)]
pub enum GameJoltError {
    /// The caller supplied data that violates a documented precondition.
    ///
    /// Always raised before any network call is attempted.
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        /// Wire name of the offending parameter (e.g. `"username"`).
        field: &'static str,
        /// Human-readable description of the violation.
        reason: String,
    },

    /// The transport failed to deliver the request or read the response.
    #[error("transport error: {0}")]
    Transport(#[source] TransportCause),

    /// The platform answered with a non-success HTTP status.
    #[error("HTTP status {status}")]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
        /// Response body, if it could be read.
        body: String,
    },

    /// Bytes were received but do not follow the platform's envelope format.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The platform explicitly reported failure.
    #[error("platform error: {}", message.as_deref().unwrap_or("no message"))]
    Platform {
        /// Message supplied by the platform, if any.
        message: Option<String>,
    },

    /// A single-result query matched nothing.
    #[error("empty result for `{field}`")]
    EmptyResult {
        /// Name of the response field that was empty or missing.
        field: String,
    },

    /// The blocking client could not start its runtime.
    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

impl GameJoltError {
    /// Shorthand for an [`InvalidParameter`](GameJoltError::InvalidParameter) error.
    pub fn invalid_parameter(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Wrap any error type as a [`Transport`](GameJoltError::Transport) error.
    pub fn transport(cause: impl Into<TransportCause>) -> Self {
        Self::Transport(cause.into())
    }

    /// Returns `true` for errors raised before the request left the client.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Returns `true` if the platform itself reported the failure.
    pub fn is_platform(&self) -> bool {
        matches!(self, Self::Platform { .. })
    }
}

/// A specialized [`Result`] type for Game Jolt client operations.
pub type Result<T> = std::result::Result<T, GameJoltError>;
