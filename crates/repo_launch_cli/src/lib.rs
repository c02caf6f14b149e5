//! repo-launch CLI library exports for integration testing.
//!
//! This module exposes the configuration, prompt and exit-code handling used
//! by the `repo-launch` binary.

use github_client::{create_token_client, GitHubClient, RepositoryClient};
use repo_launch_core::{LaunchReport, PushOutcome};
use tracing::{error, info};
use url::Url;

pub mod config;
pub mod errors;
pub mod prompt;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Environment variable holding the log filter, e.g. `REPO_LAUNCH_LOG=debug`.
pub const LOG_ENV: &str = "REPO_LAUNCH_LOG";

/// Builds a GitHub client for `token` against `api_url`.
pub fn create_repository_client(
    token: &str,
    api_url: &Url,
) -> Result<Box<dyn RepositoryClient>, github_client::Error> {
    let octocrab = create_token_client(token, api_url)?;
    Ok(Box::new(GitHubClient::new(octocrab)))
}

/// Maps the outcome of a launch onto the process exit code.
///
/// Only a missing account name fails the process. Every other failure is
/// logged and the exit code stays 0, including a closed output stream, a
/// failed repository creation or a failed push.
pub fn exit_code(result: &Result<LaunchReport, repo_launch_core::Error>) -> i32 {
    match result {
        Ok(report) => {
            match &report.push {
                PushOutcome::Pushed { branch } => info!(
                    repository = %report.target.full_name(),
                    branch = %branch,
                    "Launch finished"
                ),
                PushOutcome::Failed { branch, .. } => info!(
                    repository = %report.target.full_name(),
                    branch = %branch,
                    "Launch finished without a successful push"
                ),
            }
            0
        }
        Err(repo_launch_core::Error::MissingAccountName) => 1,
        Err(e) => {
            error!("Error: {e}");
            0
        }
    }
}
