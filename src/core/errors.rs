//! Shared error types for the application

use thiserror::Error;

/// Default message shown when the backend gives no detail of its own.
pub const DEFAULT_FAILURE_MESSAGE: &str = "The appointment service reported an error";

/// Main error type for citadash operations
#[derive(Debug, Error)]
pub enum Error {
    /// Network/transport failures: unreachable backend, timeouts,
    /// malformed responses.
    #[error("Could not reach the appointment service: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server-side validation rejection (malformed phone, past
    /// datetime, unknown doctor, ...).
    #[error("{message}")]
    Validation { message: String },

    /// State conflicts, e.g. cancelling an appointment that is already
    /// cancelled or completed.
    #[error("{message}")]
    Conflict { message: String },

    /// Any other non-success response from the backend.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error, falling back to the fixed default
    /// message when the server supplied none.
    pub fn validation(message: Option<String>) -> Self {
        Self::Validation {
            message: message.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
        }
    }

    /// Create a state-conflict error with the same fallback rule.
    pub fn conflict(message: Option<String>) -> Self {
        Self::Conflict {
            message: message.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
        }
    }

    /// Map a non-success HTTP status and optional server message to
    /// the error taxonomy.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            400 => Self::validation(message),
            409 | 422 => Self::conflict(message),
            _ => Self::Api {
                status,
                message: message.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            },
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_validation() {
        let err = Error::from_status(400, Some("El teléfono es requerido".into()));
        assert!(matches!(err, Error::Validation { .. }));
        assert_eq!(err.to_string(), "El teléfono es requerido");
    }

    #[test]
    fn conflict_statuses_map_to_conflict() {
        for status in [409, 422] {
            let err = Error::from_status(status, None);
            assert!(matches!(err, Error::Conflict { .. }));
            assert_eq!(err.to_string(), DEFAULT_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn other_statuses_keep_the_code() {
        let err = Error::from_status(500, None);
        match err {
            Error::Api { status, .. } => assert_eq!(status, 500),
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
