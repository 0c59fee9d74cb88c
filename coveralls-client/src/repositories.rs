//! Repository-related API endpoints

use async_trait::async_trait;
use coveralls_core::domain::repository::Repository;
use coveralls_core::dto::repository::{RepositoryConfig, RepositoryEnvelope};
use tracing::debug;

use crate::CoverallsClient;
use crate::classify::Operation;
use crate::error::Result;

/// Operations on Coveralls repositories
///
/// Each call is one request/response exchange. Nothing is retried; the
/// caller decides what to do with a classified error.
#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// Get information about a repository already in Coveralls
    ///
    /// # Arguments
    /// * `service` - Git provider tag, e.g. "github", "bitbucket" or "manual"
    /// * `name` - Repository name; with GitHub this is `owner/repo`
    ///
    /// # Errors
    /// [`RepoNotFound`](crate::ClientError::RepoNotFound) on 404,
    /// [`UnexpectedStatusCode`](crate::ClientError::UnexpectedStatusCode) on
    /// anything but 200.
    async fn get_repository(&self, service: &str, name: &str) -> Result<Repository>;

    /// Add a repository to Coveralls
    ///
    /// # Errors
    /// [`NameAlreadyTaken`](crate::ClientError::NameAlreadyTaken) when the
    /// name is registered, [`UnprocessableEntity`](crate::ClientError::UnprocessableEntity)
    /// for other validation failures,
    /// [`UnexpectedStatusCode`](crate::ClientError::UnexpectedStatusCode) on
    /// anything but 201 or 422.
    async fn create_repository(&self, config: &RepositoryConfig) -> Result<RepositoryConfig>;

    /// Update the configuration of a repository in Coveralls
    ///
    /// # Errors
    /// [`RepoNotFound`](crate::ClientError::RepoNotFound) on 404,
    /// [`UnprocessableEntity`](crate::ClientError::UnprocessableEntity) on 422,
    /// [`UnexpectedStatusCode`](crate::ClientError::UnexpectedStatusCode) on
    /// anything else but 200.
    async fn update_repository(
        &self,
        service: &str,
        name: &str,
        config: &RepositoryConfig,
    ) -> Result<RepositoryConfig>;
}

#[async_trait]
impl RepositoryService for CoverallsClient {
    async fn get_repository(&self, service: &str, name: &str) -> Result<Repository> {
        let url = self.repo_url(service, name);
        debug!("GET {}", url);

        let response = self.authorized(self.client.get(&url)).send().await?;

        self.handle_response(Operation::Fetch, response).await
    }

    async fn create_repository(&self, config: &RepositoryConfig) -> Result<RepositoryConfig> {
        let url = self.repos_url();
        debug!("POST {} ({}/{})", url, config.service, config.name);

        let response = self
            .authorized(self.client.post(&url))
            .json(&RepositoryEnvelope::new(config))
            .send()
            .await?;

        self.handle_response(Operation::Create, response).await
    }

    async fn update_repository(
        &self,
        service: &str,
        name: &str,
        config: &RepositoryConfig,
    ) -> Result<RepositoryConfig> {
        let url = self.repo_url(service, name);
        debug!("PUT {}", url);

        let response = self
            .authorized(self.client.put(&url))
            .json(&RepositoryEnvelope::new(config))
            .send()
            .await?;

        self.handle_response(Operation::Update, response).await
    }
}
