//! Error types for the teams API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers distinguish "the team
//! does not exist" from "the server returned an unexpected status." All other
//! non-2xx responses land in `HttpError` with the raw status code and body.
//! The body is kept for diagnostics only; the wire contract is status-code
//! only, so it is never parsed.

use thiserror::Error;

/// Errors returned by `TeamsClient` and by hosts executing its requests.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server returned 404: the requested team does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response (connection refused, DNS, reset).
    /// The core never constructs this itself; hosts do.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The collection URL is not an absolute http(s) URL.
    #[error("invalid collection url: {0}")]
    InvalidUrl(String),

    /// Rejected before anything was sent: a blank form field or team id.
    #[error("invalid team: {0}")]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}

/// Client-side checks on a team draft before it is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field '{0}' must not be empty")]
    MissingField(&'static str),

    /// An item URL would collapse onto the collection URL.
    #[error("team id must not be empty")]
    EmptyId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_exposed_for_server_errors_only() {
        assert_eq!(ApiError::NotFound.status(), Some(404));
        let err = ApiError::HttpError {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(ApiError::Transport("refused".to_string()).status(), None);
    }

    #[test]
    fn display_includes_status_and_body() {
        let err = ApiError::HttpError {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn validation_error_converts() {
        let err: ApiError = ValidationError::MissingField("logo").into();
        assert_eq!(err.to_string(), "invalid team: field 'logo' must not be empty");
        let err: ApiError = ValidationError::EmptyId.into();
        assert_eq!(err.to_string(), "invalid team: team id must not be empty");
        assert_eq!(err.status(), None);
    }
}
