//! # Models
//!
//! Data returned by the GitHub API, reduced to the fields the launcher reads.

use serde::{Deserialize, Serialize};
use url::Url;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a GitHub repository.
///
/// # Examples
///
/// ```rust
/// use github_client::models::Repository;
///
/// let repo = Repository::new(
///     "my-repo".to_string(),
///     "octocat/my-repo".to_string(),
///     false,
///     None,
/// );
///
/// println!("Repository: {}", repo.name());
/// println!("Is private: {}", repo.is_private());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Repository {
    /// The full name of the repository (owner/name)
    full_name: String,
    /// The name of the repository
    name: String,
    /// Whether the repository is private
    private: bool,
    /// The web page of the repository, when GitHub reported one
    html_url: Option<Url>,
}

impl Repository {
    /// Returns the full name of the repository, `owner/name`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the web page of the repository, if known.
    pub fn html_url(&self) -> Option<&Url> {
        self.html_url.as_ref()
    }

    /// Returns whether the repository is private.
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Returns the name of the repository (without owner).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates a new Repository instance.
    pub fn new(name: String, full_name: String, private: bool, html_url: Option<Url>) -> Self {
        Self {
            full_name,
            name,
            private,
            html_url,
        }
    }
}
