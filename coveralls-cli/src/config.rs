//! Configuration module
//!
//! Handles CLI configuration: API token, server URL and request timeout.

use std::time::Duration;

use anyhow::{Context, Result};
use coveralls_client::CoverallsClient;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Coveralls API token
    pub api_token: String,

    /// Base URL of the Coveralls server
    pub base_url: String,

    /// Maximum time a single request may take
    pub timeout: Duration,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() {
            anyhow::bail!("api token cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base url must start with http:// or https://");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }

    /// Builds a Coveralls client honouring the configured URL and timeout
    pub fn build_client(&self) -> Result<CoverallsClient> {
        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(CoverallsClient::with_client(&self.api_token, http_client).with_base_url(&self.base_url))
    }
}
