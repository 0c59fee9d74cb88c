//! Repository DTOs
//!
//! Write models for creating and updating repositories.

use serde::{Deserialize, Serialize};

use crate::domain::repository::Repository;

/// Settings sent when creating or updating a repository
///
/// Unset optional fields are left out of the request body so the server
/// keeps its own defaults for them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Git provider tag (github, bitbucket, gitlab, stash, manual)
    pub service: String,

    /// Repository name. With GitHub this is `owner/repo`.
    pub name: String,

    /// Whether comments should be posted on pull requests (server default: true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_on_pull_requests: Option<bool>,

    /// Whether build status should be sent to the git provider (server default: true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_build_status: Option<bool>,

    /// Minimum coverage a build needs to pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_status_fail_threshold: Option<f64>,

    /// Maximum coverage decrease a build may have and still pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_status_fail_change_threshold: Option<f64>,
}

impl RepositoryConfig {
    /// Creates a config with only the provider and name set
    pub fn new(service: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_comment_on_pull_requests(mut self, enabled: bool) -> Self {
        self.comment_on_pull_requests = Some(enabled);
        self
    }

    pub fn with_send_build_status(mut self, enabled: bool) -> Self {
        self.send_build_status = Some(enabled);
        self
    }

    pub fn with_fail_threshold(mut self, threshold: f64) -> Self {
        self.commit_status_fail_threshold = Some(threshold);
        self
    }

    pub fn with_fail_change_threshold(mut self, threshold: f64) -> Self {
        self.commit_status_fail_change_threshold = Some(threshold);
        self
    }
}

impl From<&Repository> for RepositoryConfig {
    fn from(repo: &Repository) -> Self {
        RepositoryConfig {
            service: repo.service.clone(),
            name: repo.name.clone(),
            comment_on_pull_requests: repo.comment_on_pull_requests,
            send_build_status: repo.send_build_status,
            commit_status_fail_threshold: repo.commit_status_fail_threshold,
            commit_status_fail_change_threshold: repo.commit_status_fail_change_threshold,
        }
    }
}

/// Request body wrapper for write operations: `{"repo": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryEnvelope<'a> {
    pub repo: &'a RepositoryConfig,
}

impl<'a> RepositoryEnvelope<'a> {
    pub fn new(repo: &'a RepositoryConfig) -> Self {
        Self { repo }
    }
}
