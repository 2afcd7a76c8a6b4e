//! Error taxonomy for API calls.
//!
//! # Design
//! `ApiError` is a closed enum: every way a call can fail maps to exactly
//! one variant, decided by the client's validation pipeline. Variants carry
//! their cause as plain data (`String` forms, status codes) rather than
//! source errors, which keeps the enum `Clone + PartialEq + Eq` so tests
//! and callers can compare errors structurally.
//!
//! `Api` is the only variant produced from a well-formed server reply; the
//! rest describe failures on the way to or from one.

use serde::Deserialize;
use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by `HttpClient::execute` and everything built on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The transport completed without yielding a response at all.
    #[error("no response from server")]
    NoResponse,

    /// A response arrived but carried no body.
    #[error("response carried no body")]
    NoData,

    /// The server answered with a non-2xx status. `message` is populated
    /// when the error body parsed as the API's error shape.
    #[error("api rejected request: status={} message={}", .status, .message.as_deref().unwrap_or("none provided"))]
    Api { message: Option<String>, status: u16 },

    /// A 2xx body could not be decoded into the descriptor's model.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The request never completed; the underlying failure is classified
    /// by the transport.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The call infrastructure itself fell apart before delivering a result.
    #[error("unknown client failure")]
    Unknown,
}

/// Shape of the API's error bodies, e.g. `{"message": "Unauthorized"}`.
///
/// Parsed opportunistically from non-2xx bodies; a body that does not
/// match simply leaves `ApiError::Api::message` empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorMessage {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportErrorKind;

    #[test]
    fn equality_is_structural_per_variant() {
        assert_eq!(ApiError::NoResponse, ApiError::NoResponse);
        assert_ne!(ApiError::NoResponse, ApiError::NoData);

        let a = ApiError::Api {
            message: Some("Unauthorized".to_string()),
            status: 401,
        };
        let b = ApiError::Api {
            message: Some("Unauthorized".to_string()),
            status: 401,
        };
        assert_eq!(a, b);

        let other_status = ApiError::Api {
            message: Some("Unauthorized".to_string()),
            status: 403,
        };
        assert_ne!(a, other_status);

        let other_message = ApiError::Api {
            message: None,
            status: 401,
        };
        assert_ne!(a, other_message);
    }

    #[test]
    fn display_mentions_status_and_message() {
        let err = ApiError::Api {
            message: Some("Unauthorized".to_string()),
            status: 401,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("401"));
        assert!(rendered.contains("Unauthorized"));

        let bare = ApiError::Api {
            message: None,
            status: 500,
        };
        assert!(bare.to_string().contains("none provided"));
    }

    #[test]
    fn transport_errors_convert_via_from() {
        let cause = TransportError::new(TransportErrorKind::Timeout, "deadline elapsed");
        let err: ApiError = cause.clone().into();
        assert_eq!(err, ApiError::Transport(cause));
    }

    #[test]
    fn error_message_tolerates_null_and_absent_message() {
        let parsed: ErrorMessage = serde_json::from_str(r#"{"message":null}"#).unwrap();
        assert_eq!(parsed.message, None);

        let parsed: ErrorMessage = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.message, None);

        let parsed: ErrorMessage = serde_json::from_str(r#"{"message":"Unauthorized"}"#).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("Unauthorized"));
    }
}
