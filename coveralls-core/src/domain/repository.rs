//! Repository domain model
//!
//! Represents a repository registered in Coveralls, as returned by
//! `GET /api/repos/{service}/{name}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository known to Coveralls
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Repository {
    /// Server-assigned identifier
    #[serde(default)]
    pub id: u64,

    /// Repository name (for GitHub, `owner/repo`)
    #[serde(default)]
    pub name: String,

    /// Git provider tag (github, bitbucket, gitlab, stash, manual)
    #[serde(default)]
    pub service: String,

    /// Whether comments are posted on pull requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_on_pull_requests: Option<bool>,

    /// Whether build status is sent to the git provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_build_status: Option<bool>,

    /// Minimum coverage a build needs to pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_status_fail_threshold: Option<f64>,

    /// Maximum coverage decrease a build may have and still pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_status_fail_change_threshold: Option<f64>,

    /// Whether a coverage badge has been set up
    #[serde(default)]
    pub has_badge: bool,

    /// Repository token used when uploading coverage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
