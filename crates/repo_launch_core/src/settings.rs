//! Values that shape a launch: the defaults offered to the user and the
//! hosts the generated URLs point at.

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;

/// Repository name used when the user leaves the prompt empty.
pub const DEFAULT_REPOSITORY_NAME: &str = "3d-data-grid-visualization";

/// Description sent with the repository creation request.
pub const DEFAULT_DESCRIPTION: &str =
    "Animated 3D grid visualization with data-related terms in checkerboard pattern";

/// Branch pushed when the current branch cannot be determined.
pub const DEFAULT_BRANCH: &str = "main";

/// Host serving the repository web pages and git remotes.
pub const DEFAULT_WEB_HOST: &str = "github.com";

/// Settings for a single launch.
///
/// Built from the CLI configuration file, or from [`LaunchSettings::default`]
/// when there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    /// Substituted when the repository name prompt is left empty.
    pub default_repository_name: String,

    /// Description of the repository created through the API.
    pub description: String,

    /// Visibility of the repository created through the API.
    pub private: bool,

    /// Fallback for the branch to push.
    pub default_branch: String,

    /// Host name used for remote and web URLs, e.g. `github.com`.
    pub web_host: String,
}

impl LaunchSettings {
    /// The git remote URL, `https://<host>/<account>/<repository>.git`.
    pub fn remote_url(&self, target: &LaunchTarget) -> String {
        format!("{}.git", self.repository_url(target))
    }

    /// The repository web page, `https://<host>/<account>/<repository>`.
    pub fn repository_url(&self, target: &LaunchTarget) -> String {
        format!(
            "https://{}/{}/{}",
            self.web_host, target.account, target.repository
        )
    }

    /// Where the repository is served once GitHub Pages is enabled.
    pub fn pages_url(&self, target: &LaunchTarget) -> String {
        format!(
            "https://{}.github.io/{}",
            target.account, target.repository
        )
    }

    /// The page for creating a repository by hand.
    pub fn new_repository_url(&self) -> String {
        format!("https://{}/new", self.web_host)
    }
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            default_repository_name: DEFAULT_REPOSITORY_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            private: false,
            default_branch: DEFAULT_BRANCH.to_string(),
            web_host: DEFAULT_WEB_HOST.to_string(),
        }
    }
}

/// The account and repository a launch publishes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    pub account: String,
    pub repository: String,
}

impl LaunchTarget {
    pub fn new(account: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            repository: repository.into(),
        }
    }

    /// `account/repository`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.account, self.repository)
    }
}
