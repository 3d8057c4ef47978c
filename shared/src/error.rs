//! Error types surfaced to the page controllers.
//!
//! `Display` on [`RequestError`] is the text shown in the error alert, so
//! transport internals stay in the variant fields and only reach the console.

use thiserror::Error;

/// Fallback shown when the failure carries no usable server message.
pub const GENERIC_ERROR_MESSAGE: &str = "Une erreur inattendue est survenue";

/// Shown when a request is aborted by the client-side timeout.
pub const TIMEOUT_ERROR_MESSAGE: &str = "La requête a expiré. Veuillez réessayer.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Connectivity failure before any response was received.
    #[error("{}", GENERIC_ERROR_MESSAGE)]
    Network { detail: String },

    /// The request was aborted after `after_ms` milliseconds.
    #[error("{}", TIMEOUT_ERROR_MESSAGE)]
    Timeout { after_ms: u32 },

    /// The body was not JSON, or not the JSON the endpoint promises.
    #[error("{}", GENERIC_ERROR_MESSAGE)]
    Malformed { detail: String },

    /// Non-success status, or an `error` field in the body.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl RequestError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network { detail: detail.into() }
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed { detail: detail.into() }
    }

    /// Rejection without a server-provided message.
    pub fn http_status(status: u16) -> Self {
        Self::Rejected {
            status,
            message: format!("Erreur HTTP: {}", status),
        }
    }

    /// Detail for the console; never shown in the UI.
    pub fn detail(&self) -> String {
        match self {
            Self::Network { detail } => format!("network: {}", detail),
            Self::Timeout { after_ms } => format!("timeout after {}ms", after_ms),
            Self::Malformed { detail } => format!("malformed response: {}", detail),
            Self::Rejected { status, message } => format!("rejected ({}): {}", status, message),
        }
    }
}

/// Constraint failure caught before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} does not match the expected format")]
    Pattern { field: &'static str },

    #[error("{field} must be {max} characters or less")]
    TooLong { field: &'static str, max: usize },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::Pattern { field } | Self::TooLong { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            RequestError::network("Failed to fetch").to_string(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            RequestError::malformed("expected value at line 1").to_string(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            RequestError::Timeout { after_ms: 30_000 }.to_string(),
            TIMEOUT_ERROR_MESSAGE
        );
        assert_eq!(RequestError::http_status(502).to_string(), "Erreur HTTP: 502");
    }

    #[test]
    fn test_detail_keeps_transport_cause() {
        let err = RequestError::network("Failed to fetch");
        assert!(err.detail().contains("Failed to fetch"));
        assert!(!err.to_string().contains("Failed to fetch"));
    }

    #[test]
    fn test_validation_error_field() {
        let err = ValidationError::TooLong { field: "code_2fa", max: 6 };
        assert_eq!(err.field(), "code_2fa");
        assert_eq!(err.to_string(), "code_2fa must be 6 characters or less");
    }
}
