//! Coveralls HTTP Client
//!
//! A small, type-safe client for the Coveralls repository API.
//!
//! Every request carries `Accept: application/json` and
//! `Authorization: token <t>`. Responses are classified into
//! [`ClientError`] variants so callers can tell a missing repository from a
//! taken name or a validation failure without inspecting status codes.
//!
//! # Example
//!
//! ```no_run
//! use coveralls_client::{CoverallsClient, RepositoryService};
//! use coveralls_core::dto::repository::RepositoryConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = CoverallsClient::new("my-api-token");
//!
//!     let config = RepositoryConfig::new("github", "loadsmart/service")
//!         .with_fail_threshold(80.0);
//!     let created = client.create_repository(&config).await?;
//!
//!     println!("Created repo: {}", created.name);
//!     Ok(())
//! }
//! ```

mod classify;
pub mod error;
mod repositories;

// Re-export commonly used types
pub use classify::{NAME_TAKEN_MARKER, Operation, classify};
pub use coveralls_core::domain::repository::Repository;
pub use coveralls_core::dto::repository::RepositoryConfig;
pub use error::{ClientError, Result};
pub use repositories::RepositoryService;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Public Coveralls endpoint used unless overridden
pub const DEFAULT_BASE_URL: &str = "https://coveralls.io";

/// HTTP client for the Coveralls API
///
/// The client is immutable after construction; clone it or share it behind
/// an `Arc` to issue calls from several tasks.
#[derive(Clone)]
pub struct CoverallsClient {
    /// Base URL of the Coveralls server (e.g., "https://coveralls.io")
    base_url: String,
    /// Value of the `Authorization` header
    auth_header: String,
    /// HTTP client instance
    client: Client,
}

impl std::fmt::Debug for CoverallsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoverallsClient")
            .field("base_url", &self.base_url)
            .field("auth_header", &"token <redacted>")
            .finish()
    }
}

impl CoverallsClient {
    /// Create a new client for the public Coveralls server
    ///
    /// # Arguments
    /// * `token` - Coveralls API token (from the account settings page)
    ///
    /// # Example
    /// ```
    /// use coveralls_client::CoverallsClient;
    ///
    /// let client = CoverallsClient::new("my-api-token");
    /// assert_eq!(client.base_url(), "https://coveralls.io");
    /// ```
    pub fn new(token: impl AsRef<str>) -> Self {
        Self::with_client(token, Client::new())
    }

    /// Create a new client on top of a caller-built reqwest Client
    ///
    /// Use this when talking to a private Coveralls deployment that needs a
    /// tighter request deadline than reqwest's default (none). The timeout
    /// of `client` bounds every repository call.
    ///
    /// # Arguments
    /// * `token` - Coveralls API token
    /// * `client` - reqwest Client used for every request
    ///
    /// # Example
    /// ```
    /// use coveralls_client::CoverallsClient;
    /// use std::time::Duration;
    ///
    /// # fn main() -> Result<(), reqwest::Error> {
    /// let http_client = reqwest::Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    ///
    /// let client = CoverallsClient::with_client("my-api-token", http_client)
    ///     .with_base_url("https://coveralls.internal.example.com");
    /// assert_eq!(client.base_url(), "https://coveralls.internal.example.com");
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_client(token: impl AsRef<str>, client: Client) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_header: format!("token {}", token.as_ref()),
            client,
        }
    }

    /// Point the client at another Coveralls server (e.g. a private deployment)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL of the Coveralls server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Plumbing
    // =============================================================================

    /// Attach the headers every Coveralls request carries
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, &self.auth_header)
    }

    fn repos_url(&self) -> String {
        format!("{}/api/repos", self.base_url)
    }

    fn repo_url(&self, service: &str, name: &str) -> String {
        format!("{}/api/repos/{}/{}", self.base_url, service, name)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Classify an API response and deserialize its JSON body
    ///
    /// The body is read in full first so that error variants can carry it.
    /// Transport errors while reading it are returned as-is.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        operation: Operation,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status().as_u16();
        let body = response.text().await?;

        if let Err(err) = classify(operation, status, &body) {
            warn!(%operation, status, "Coveralls request failed: {}", err);
            return Err(err);
        }

        debug!(%operation, status, "Coveralls request succeeded");

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CoverallsClient::new("abc");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.auth_header, "token abc");
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let client = CoverallsClient::new("abc").with_base_url("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = CoverallsClient::with_client("abc", http_client);
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_urls() {
        let client = CoverallsClient::new("abc").with_base_url("https://coveralls.example.com");
        assert_eq!(client.repos_url(), "https://coveralls.example.com/api/repos");
        assert_eq!(
            client.repo_url("github", "loadsmart/service"),
            "https://coveralls.example.com/api/repos/github/loadsmart/service"
        );
    }

    fn assert_shareable<T: Clone + Send + Sync + 'static>() {}

    #[test]
    fn test_client_is_shareable_across_tasks() {
        assert_shareable::<CoverallsClient>();
    }

    #[test]
    fn test_debug_hides_token() {
        let client = CoverallsClient::new("very-secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("very-secret"));
    }
}
