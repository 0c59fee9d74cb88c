//! Error types for the Coveralls client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Coveralls client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response could be read
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The repository does not exist (404)
    #[error("repo was not found (status code 404)")]
    RepoNotFound,

    /// The repository name is already registered (422 on create)
    #[error("repo name has already been taken (status code 422)")]
    NameAlreadyTaken,

    /// The server rejected the request body (422)
    #[error("unprocessable entity (status code 422): {body}")]
    UnprocessableEntity {
        /// Raw response body, usually a JSON list of validation messages
        body: String,
    },

    /// The server answered with a status the operation does not expect
    #[error("unexpected status code {status}: {body}")]
    UnexpectedStatusCode {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// A successful response carried a body that could not be decoded
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl ClientError {
    /// Create an unexpected status error from status code and body
    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatusCode {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code behind this error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RepoNotFound => Some(404),
            Self::NameAlreadyTaken | Self::UnprocessableEntity { .. } => Some(422),
            Self::UnexpectedStatusCode { status, .. } => Some(*status),
            Self::RequestFailed(err) => err.status().map(|s| s.as_u16()),
            Self::ParseError(_) => None,
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RepoNotFound) || self.status() == Some(404)
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_of_classified_errors() {
        assert_eq!(ClientError::RepoNotFound.status(), Some(404));
        assert_eq!(ClientError::NameAlreadyTaken.status(), Some(422));
        assert_eq!(
            ClientError::UnprocessableEntity {
                body: "bad".to_string()
            }
            .status(),
            Some(422)
        );
        assert_eq!(ClientError::unexpected_status(503, "").status(), Some(503));
        let parse_err = serde_json::from_str::<u64>("not json").unwrap_err();
        assert_eq!(ClientError::from(parse_err).status(), None);
    }

    #[test]
    fn test_error_predicates() {
        assert!(ClientError::RepoNotFound.is_not_found());
        assert!(ClientError::RepoNotFound.is_client_error());
        assert!(!ClientError::RepoNotFound.is_server_error());

        let err = ClientError::unexpected_status(500, "server error");
        assert!(err.is_server_error());
        assert!(!err.is_client_error());
        assert!(!err.is_not_found());

        assert!(ClientError::unexpected_status(401, "").is_client_error());
    }

    #[test]
    fn test_parse_error_keeps_source() {
        use std::error::Error as _;

        let err = ClientError::from(serde_json::from_str::<u64>("{").unwrap_err());
        let source = err.source().expect("parse error should expose its source");
        assert!(source.downcast_ref::<serde_json::Error>().is_some());
    }

    #[test]
    fn test_display_carries_body() {
        let err = ClientError::unexpected_status(500, "server error");
        assert_eq!(err.to_string(), "unexpected status code 500: server error");

        let err = ClientError::UnprocessableEntity {
            body: "Service is invalid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unprocessable entity (status code 422): Service is invalid"
        );
    }
}
