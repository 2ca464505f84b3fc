use reqwest::StatusCode;
use thiserror::Error;

/// Failure below the envelope layer. Passed through to the caller untouched.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Transport error: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum EtsError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with `success=false`; `message` is its text verbatim.
    #[error("ETS request failed: {message}")]
    Api { message: String },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for EtsError {
    fn from(err: reqwest::Error) -> Self {
        EtsError::Transport(TransportError::Http(err))
    }
}

impl EtsError {
    /// True for failures reported by the server through the envelope.
    pub fn is_api_error(&self) -> bool {
        matches!(self, EtsError::Api { .. } | EtsError::Authentication(_))
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, EtsError::Transport(_))
    }

    /// The server-supplied message, if this error carries one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            EtsError::Api { message } | EtsError::Authentication(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_classification() {
        let err = EtsError::Api {
            message: "Fatura bulunamadi".to_string(),
        };
        assert!(err.is_api_error());
        assert!(!err.is_transport_error());
        assert_eq!(err.server_message(), Some("Fatura bulunamadi"));
        assert_eq!(err.to_string(), "ETS request failed: Fatura bulunamadi");
    }

    #[test]
    fn test_authentication_counts_as_api_error() {
        let err = EtsError::Authentication("Invalid credentials".to_string());
        assert!(err.is_api_error());
        assert_eq!(err.server_message(), Some("Invalid credentials"));
    }

    #[test]
    fn test_transport_error_is_transparent() {
        let err = EtsError::from(TransportError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream down".to_string(),
        });
        assert!(err.is_transport_error());
        assert!(err.server_message().is_none());
        assert_eq!(
            err.to_string(),
            "Unexpected HTTP status 502 Bad Gateway: upstream down"
        );
    }
}
