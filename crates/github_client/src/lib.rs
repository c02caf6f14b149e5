//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides a client for creating repositories on behalf of the
//! user that owns a personal access token.

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

pub mod errors;
pub use errors::Error;

pub mod models;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// The public GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// A client for interacting with the GitHub API, authenticated with a personal token.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Wraps an already configured `Octocrab` instance.
    ///
    /// Use [`create_token_client`] to build one from a personal access token.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    /// Creates a new repository for the authenticated user using the REST API directly.
    ///
    /// The response is classified by its status code alone; the body is only
    /// parsed when GitHub reports success. Any 2xx answer counts as created,
    /// even when the body does not describe a repository.
    ///
    /// # Arguments
    ///
    /// * `payload` - A `RepositoryCreatePayload` struct containing the repository details.
    ///
    /// # Errors
    /// Returns `Error::Unauthorized` for a rejected token, `Error::UnprocessableEntity`
    /// when GitHub refuses the payload (usually because the name is taken),
    /// `Error::HttpStatus` with the raw response body for any other error status
    /// and `Error::Transport` when no response was received.
    #[instrument(skip(self, payload), fields(repo = %payload.name))]
    async fn create_user_repository(
        &self,
        payload: &RepositoryCreatePayload,
    ) -> Result<models::Repository, Error> {
        let path = "/user/repos";
        let response = match self.client._post(path, Some(payload)).await {
            Ok(r) => r,
            Err(e) => {
                log_octocrab_error("Failed to create repository for user", &e);
                return Err(Error::Transport(e.to_string()));
            }
        };

        let status = response.status();
        let body = match self.client.body_to_string(response).await {
            Ok(body) => body,
            Err(e) => {
                warn!(status = status.as_u16(), error = %e, "Failed to read response body");
                String::new()
            }
        };

        if status.is_success() {
            info!(repo = %payload.name, status = status.as_u16(), "Repository created for user");
            return Ok(created_repository(payload, &body));
        }

        error!(
            status = status.as_u16(),
            body = %body,
            "Failed to create repository for user. Received an error from GitHub"
        );
        Err(classify_error_status(status.as_u16(), body))
    }
}

/// Reads the created repository from a success body.
///
/// Falls back to the requested name and visibility when the body cannot be
/// parsed.
fn created_repository(payload: &RepositoryCreatePayload, body: &str) -> models::Repository {
    match serde_json::from_str::<models::Repository>(body) {
        Ok(repo) => repo,
        Err(e) => {
            debug!(error = %e, "Unexpected repository body, using the request values");
            models::Repository::new(
                payload.name.clone(),
                payload.name.clone(),
                payload.private.unwrap_or(false),
                None,
            )
        }
    }
}

/// Maps a non-success status onto the matching [`Error`] variant.
fn classify_error_status(status: u16, body: String) -> Error {
    match status {
        401 => Error::Unauthorized,
        422 => Error::UnprocessableEntity(github_error_message(&body).unwrap_or(body)),
        status => Error::HttpStatus { status, body },
    }
}

/// The `message` field of a GitHub error document, if the body is one.
fn github_error_message(body: &str) -> Option<String> {
    let document: serde_json::Value = serde_json::from_str(body).ok()?;
    document
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

/// Represents the payload for creating a new repository via the REST API.
/// Use `Default::default()` and modify fields as needed.
#[derive(Serialize, Default, Debug, Clone)]
pub struct RepositoryCreatePayload {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>, // Defaults to false if None

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_init: Option<bool>, // Defaults to false if None
}

/// Trait for repository operations.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Creates a repository owned by the authenticated user.
    async fn create_user_repository(
        &self,
        payload: &RepositoryCreatePayload,
    ) -> Result<models::Repository, Error>;
}

/// Creates an `Octocrab` client that authenticates with a personal access token.
///
/// # Arguments
///
/// * `token` - The personal access token. It is sent in the `Authorization` header.
/// * `api_url` - Base URL of the REST API, normally [`DEFAULT_API_URL`].
///
/// # Errors
///
/// Returns `Error::AuthError` if the base URL is rejected or the client cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_token_client, GitHubClient, DEFAULT_API_URL};
/// use url::Url;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api_url = Url::parse(DEFAULT_API_URL)?;
/// let client = GitHubClient::new(create_token_client("ghp_example", &api_url)?);
/// # Ok(())
/// # }
/// ```
#[instrument(skip(token), fields(api_url = %api_url))]
pub fn create_token_client(token: &str, api_url: &Url) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .base_uri(api_url.as_str().trim_end_matches('/'))
        .map_err(|e| {
            error!(error = %e, "Failed to use the GitHub API base URL");
            Error::AuthError(format!("Invalid GitHub API URL '{}': {}", api_url, e))
        })?
        .build()
        .map_err(|e| {
            error!(error = %e, "Failed to build Octocrab client with personal token");
            Error::AuthError(format!("Failed to build the GitHub client: {}", e))
        })
}

fn log_octocrab_error(message: &str, e: &octocrab::Error) {
    match e {
        octocrab::Error::UriParse { source, backtrace } => error!(
            error_message = %source,
            backtrace = %backtrace,
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::Uri { source, backtrace } => error!(
            error_message = %source,
            backtrace = %backtrace,
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::InvalidHeaderValue { source, backtrace } => error!(
            error_message = %source,
            backtrace = %backtrace,
            "{}. One of the header values was invalid.",
            message
        ),
        _ => error!(error_message = %e, "{}", message),
    };
}
