//! Response classification
//!
//! Maps the status code and body of a repository API response onto
//! [`ClientError`]. Kept free of I/O so every mapping can be tested on its own.

use crate::error::ClientError;

/// Text the API puts in a 422 body when the repository name is registered
pub const NAME_TAKEN_MARKER: &str = "Name has already been taken";

/// Repository operations, each with its own success status and error mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `GET /api/repos/{service}/{name}`
    Fetch,
    /// `POST /api/repos`
    Create,
    /// `PUT /api/repos/{service}/{name}`
    Update,
}

impl Operation {
    /// Status code the API answers with when the operation succeeds
    pub fn success_status(self) -> u16 {
        match self {
            Operation::Create => 201,
            Operation::Fetch | Operation::Update => 200,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Fetch => write!(f, "fetch"),
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
        }
    }
}

/// Classify a response
///
/// Returns `Ok(())` when `status` is the operation's success status, otherwise
/// the single error the response maps to. Only `Create` refines a 422 into
/// [`ClientError::NameAlreadyTaken`]; `Fetch` has no 422 case at all.
pub fn classify(operation: Operation, status: u16, body: &str) -> Result<(), ClientError> {
    if status == operation.success_status() {
        return Ok(());
    }

    let err = match (operation, status) {
        (Operation::Fetch | Operation::Update, 404) => ClientError::RepoNotFound,
        (Operation::Create, 422) if body.contains(NAME_TAKEN_MARKER) => {
            ClientError::NameAlreadyTaken
        }
        (Operation::Create | Operation::Update, 422) => ClientError::UnprocessableEntity {
            body: body.to_string(),
        },
        _ => ClientError::unexpected_status(status, body),
    };

    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses() {
        assert!(classify(Operation::Fetch, 200, "").is_ok());
        assert!(classify(Operation::Create, 201, "").is_ok());
        assert!(classify(Operation::Update, 200, "").is_ok());
    }

    #[test]
    fn test_success_status_is_per_operation() {
        // 200 on create and 201 on update are not what the API promises
        assert!(matches!(
            classify(Operation::Create, 200, "{}"),
            Err(ClientError::UnexpectedStatusCode { status: 200, .. })
        ));
        assert!(matches!(
            classify(Operation::Update, 201, "{}"),
            Err(ClientError::UnexpectedStatusCode { status: 201, .. })
        ));
    }

    #[test]
    fn test_fetch_not_found() {
        assert!(matches!(
            classify(Operation::Fetch, 404, "not found"),
            Err(ClientError::RepoNotFound)
        ));
    }

    #[test]
    fn test_fetch_server_error_keeps_body() {
        match classify(Operation::Fetch, 500, "server error") {
            Err(ClientError::UnexpectedStatusCode { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "server error");
            }
            other => panic!("unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn test_fetch_422_is_unexpected() {
        assert!(matches!(
            classify(Operation::Fetch, 422, "Name has already been taken"),
            Err(ClientError::UnexpectedStatusCode { status: 422, .. })
        ));
    }

    #[test]
    fn test_create_name_taken() {
        let body = r#"{"message":["Name has already been taken"]}"#;
        assert!(matches!(
            classify(Operation::Create, 422, body),
            Err(ClientError::NameAlreadyTaken)
        ));
    }

    #[test]
    fn test_create_other_validation_error() {
        match classify(Operation::Create, 422, "Service is invalid") {
            Err(ClientError::UnprocessableEntity { body }) => {
                assert_eq!(body, "Service is invalid");
            }
            other => panic!("unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn test_create_404_is_unexpected() {
        assert!(matches!(
            classify(Operation::Create, 404, ""),
            Err(ClientError::UnexpectedStatusCode { status: 404, .. })
        ));
    }

    #[test]
    fn test_update_does_not_refine_name_taken() {
        match classify(Operation::Update, 422, "Name has already been taken") {
            Err(ClientError::UnprocessableEntity { body }) => {
                assert_eq!(body, "Name has already been taken");
            }
            other => panic!("unexpected classification: {:?}", other),
        }
    }

    #[test]
    fn test_update_not_found() {
        assert!(matches!(
            classify(Operation::Update, 404, ""),
            Err(ClientError::RepoNotFound)
        ));
    }
}
