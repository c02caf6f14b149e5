//! Configuration management for the repo-launch CLI.
//!
//! The configuration is an optional TOML file. Every value has a built-in
//! default, so a launch works without any file at all; the file only exists to
//! change the suggested repository name, the description and visibility of
//! created repositories, or to point at a GitHub Enterprise host.

use std::{
    fs,
    path::{Path, PathBuf},
};

use repo_launch_core::settings::{
    LaunchSettings, DEFAULT_BRANCH, DEFAULT_DESCRIPTION, DEFAULT_REPOSITORY_NAME,
    DEFAULT_WEB_HOST,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "repo-launch.toml";

/// Environment variable holding an explicit configuration file path
pub const CONFIG_PATH_ENV: &str = "REPO_LAUNCH_CONFIG";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the repo-launch CLI.
///
/// # Example TOML Configuration
///
/// ```toml
/// [repository]
/// default_name = "my-site"
/// description = "My personal site"
/// private = false
/// default_branch = "main"
///
/// [github]
/// api_url = "https://api.github.com"
/// web_host = "github.com"
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Settings for the repository being launched
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// Where the GitHub API and web pages live
    #[serde(default)]
    pub github: GitHubConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read or
    /// does not contain a valid configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use repo_launch_cli::config::AppConfig;
    ///
    /// let config_path = Path::new("./repo-launch.toml");
    /// match AppConfig::load(&config_path) {
    ///     Ok(config) => println!("Default name: {}", config.repository.default_name),
    ///     Err(e) => eprintln!("Failed to load config: {}", e),
    /// }
    /// ```
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Loads the configuration, falling back to the defaults.
    ///
    /// A missing file is the normal case and is not reported. A file that
    /// exists but cannot be used is logged as a warning; the launch then
    /// continues with the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!("No configuration file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                info!("Configuration loaded from {:?}", path);
                config
            }
            Err(e) => {
                warn!(path = ?path, error = %e, "Ignoring unusable configuration file");
                Self::default()
            }
        }
    }

    /// Saves the configuration to a TOML file at the specified path.
    ///
    /// Parent directories are created when missing and an existing file is
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        debug!("Saving configuration to {:?}", path);

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create directory: {}", e)))?;
        }

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write configuration file: {}", e)))?;

        info!("Configuration saved to {:?}", path);
        Ok(())
    }

    /// The core settings described by this configuration.
    pub fn launch_settings(&self) -> LaunchSettings {
        LaunchSettings {
            default_repository_name: self.repository.default_name.clone(),
            description: self.repository.description.clone(),
            private: self.repository.private,
            default_branch: self.repository.default_branch.clone(),
            web_host: self.github.web_host.clone(),
        }
    }
}

/// Configuration for the repository being launched.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Name offered when the repository name prompt is left empty.
    pub default_name: String,

    /// Description of the created repository.
    pub description: String,

    /// Whether the created repository is private.
    pub private: bool,

    /// Branch pushed when the current branch cannot be determined.
    pub default_branch: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_REPOSITORY_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            private: false,
            default_branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

/// Configuration for the GitHub endpoints.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Base URL of the REST API.
    pub api_url: Url,

    /// Host name used for remote and web URLs.
    pub web_host: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            web_host: DEFAULT_WEB_HOST.to_string(),
        }
    }
}

fn default_api_url() -> Url {
    Url::parse(github_client::DEFAULT_API_URL).expect("default GitHub API URL is valid")
}

/// Resolves the path to the configuration file.
///
/// - If `config_path` is `Some(path)`, returns that path
/// - Otherwise returns `./repo-launch.toml` in the current directory
/// - Falls back to the relative path if the working directory is unavailable
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path.filter(|p| !p.trim().is_empty()) {
        PathBuf::from(path)
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
