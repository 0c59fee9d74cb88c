//! Repository command handlers
//!
//! Handles repository-related CLI commands: viewing, adding and updating
//! repositories in Coveralls.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::*;
use coveralls_client::{ClientError, RepositoryService};
use coveralls_core::domain::repository::Repository;
use coveralls_core::dto::repository::RepositoryConfig;
use tracing::info;

use crate::config::Config;

/// Repository subcommands
#[derive(Subcommand)]
pub enum RepoCommands {
    /// Show a repository
    Get {
        /// Git provider (github, bitbucket, gitlab, stash, manual)
        service: String,

        /// Repository name, e.g. owner/repo
        name: String,
    },
    /// Add a repository to Coveralls
    Add {
        /// Git provider (github, bitbucket, gitlab, stash, manual)
        service: String,

        /// Repository name, e.g. owner/repo
        name: String,

        #[command(flatten)]
        settings: RepoSettings,
    },
    /// Update a repository's settings
    Update {
        /// Git provider (github, bitbucket, gitlab, stash, manual)
        service: String,

        /// Repository name, e.g. owner/repo
        name: String,

        #[command(flatten)]
        settings: RepoSettings,
    },
}

/// Optional repository settings; anything not given is left to the server
#[derive(Args, Debug, Default)]
pub struct RepoSettings {
    /// Post coverage comments on pull requests
    #[arg(long, value_name = "BOOL")]
    pub comment_on_pull_requests: Option<bool>,

    /// Send build status to the git provider
    #[arg(long, value_name = "BOOL")]
    pub send_build_status: Option<bool>,

    /// Minimum coverage for a build to pass
    #[arg(long, value_name = "PERCENT")]
    pub fail_threshold: Option<f64>,

    /// Maximum coverage decrease allowed for a build to pass
    #[arg(long, value_name = "PERCENT")]
    pub fail_change_threshold: Option<f64>,
}

impl RepoSettings {
    /// Build the request config for `service`/`name` with these settings
    pub fn into_config(self, service: &str, name: &str) -> RepositoryConfig {
        RepositoryConfig {
            comment_on_pull_requests: self.comment_on_pull_requests,
            send_build_status: self.send_build_status,
            commit_status_fail_threshold: self.fail_threshold,
            commit_status_fail_change_threshold: self.fail_change_threshold,
            ..RepositoryConfig::new(service, name)
        }
    }
}

/// Handle repository commands
///
/// Routes repository subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The repository command to execute
/// * `config` - The CLI configuration
pub async fn handle_repo_command(command: RepoCommands, config: &Config) -> Result<()> {
    let client = config.build_client()?;

    match command {
        RepoCommands::Get { service, name } => get_repo(&client, &service, &name).await,
        RepoCommands::Add {
            service,
            name,
            settings,
        } => add_repo(&client, settings.into_config(&service, &name)).await,
        RepoCommands::Update {
            service,
            name,
            settings,
        } => update_repo(&client, &service, &name, settings.into_config(&service, &name)).await,
    }
}

/// Get and display a single repository
async fn get_repo(client: &dyn RepositoryService, service: &str, name: &str) -> Result<()> {
    let repo = client
        .get_repository(service, name)
        .await
        .with_context(|| format!("Failed to fetch {}/{}", service, name))?;

    print_repo_details(&repo);

    Ok(())
}

/// Add a repository
async fn add_repo(client: &dyn RepositoryService, config: RepositoryConfig) -> Result<()> {
    info!("Adding {}/{}", config.service, config.name);

    let created = match client.create_repository(&config).await {
        Ok(created) => created,
        Err(ClientError::NameAlreadyTaken) => {
            anyhow::bail!(
                "{}/{} is already registered in Coveralls; use `repo update` instead",
                config.service,
                config.name
            );
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to add {}/{}", config.service, config.name));
        }
    };

    println!("{}", "✓ Repository added successfully!".green().bold());
    print_repo_config(&created);

    Ok(())
}

/// Update a repository's settings
async fn update_repo(
    client: &dyn RepositoryService,
    service: &str,
    name: &str,
    config: RepositoryConfig,
) -> Result<()> {
    info!("Updating {}/{}", service, name);

    let updated = client
        .update_repository(service, name, &config)
        .await
        .with_context(|| format!("Failed to update {}/{}", service, name))?;

    println!("{}", "✓ Repository updated successfully!".green().bold());
    print_repo_config(&updated);

    Ok(())
}

/// Render an optional setting, marking absent values as server defaults
fn display_setting<T: std::fmt::Display>(value: Option<T>) -> ColoredString {
    match value {
        Some(v) => v.to_string().normal(),
        None => "(server default)".dimmed(),
    }
}

/// Print detailed repository information
fn print_repo_details(repo: &Repository) {
    println!("{}", "Repository Details:".bold());
    println!("  ID:                 {}", repo.id.to_string().cyan());
    println!("  Name:               {}", repo.name.bold());
    println!("  Service:            {}", repo.service);
    println!(
        "  Comment on PRs:     {}",
        display_setting(repo.comment_on_pull_requests)
    );
    println!(
        "  Send build status:  {}",
        display_setting(repo.send_build_status)
    );
    println!(
        "  Fail threshold:     {}",
        display_setting(repo.commit_status_fail_threshold)
    );
    println!(
        "  Fail change:        {}",
        display_setting(repo.commit_status_fail_change_threshold)
    );
    println!("  Badge:              {}", repo.has_badge);
    if let Some(created_at) = repo.created_at {
        println!(
            "  Created:            {}",
            created_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
    if let Some(updated_at) = repo.updated_at {
        println!(
            "  Updated:            {}",
            updated_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
}

/// Print the settings the server echoed back
fn print_repo_config(config: &RepositoryConfig) {
    println!("  Name:               {}", config.name.cyan());
    println!("  Service:            {}", config.service.dimmed());
    println!(
        "  Comment on PRs:     {}",
        display_setting(config.comment_on_pull_requests)
    );
    println!(
        "  Send build status:  {}",
        display_setting(config.send_build_status)
    );
    println!(
        "  Fail threshold:     {}",
        display_setting(config.commit_status_fail_threshold)
    );
    println!(
        "  Fail change:        {}",
        display_setting(config.commit_status_fail_change_threshold)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_settings_stay_absent() {
        let config = RepoSettings::default().into_config("github", "a/b");
        assert_eq!(config, RepositoryConfig::new("github", "a/b"));
    }

    #[test]
    fn test_settings_map_onto_config() {
        let settings = RepoSettings {
            comment_on_pull_requests: Some(false),
            send_build_status: None,
            fail_threshold: Some(80.0),
            fail_change_threshold: Some(0.0),
        };

        let config = settings.into_config("gitlab", "group/project");
        assert_eq!(config.service, "gitlab");
        assert_eq!(config.name, "group/project");
        assert_eq!(config.comment_on_pull_requests, Some(false));
        assert_eq!(config.send_build_status, None);
        assert_eq!(config.commit_status_fail_threshold, Some(80.0));
        assert_eq!(config.commit_status_fail_change_threshold, Some(0.0));
    }
}
