//! The interactive launch workflow.
//!
//! A launch asks for an account and a repository name, optionally creates the
//! repository through the GitHub API, points the `origin` remote at it and
//! pushes the current branch. Every failure after the account name has been
//! entered is reported to the user and the workflow moves on to the next
//! step; the user is left with instructions rather than an error status.
//!
//! All side effects are injected so the workflow can be exercised without a
//! terminal, a network connection or a git binary:
//!
//! - `ask_user_for_value` prompts for and returns one trimmed answer
//! - `create_client` turns an access token into a [`RepositoryClient`]
//! - `git` runs git subcommands
//! - `out` receives everything shown to the user

use std::io::Write;

use colored::Colorize;
use github_client::{RepositoryClient, RepositoryCreatePayload};
use tracing::{debug, info, instrument, warn};

use crate::errors::Error;
use crate::git::{self, GitOutput, GitRunner, REMOTE_NAME};
use crate::settings::{LaunchSettings, LaunchTarget};

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;

/// Where users create a personal access token.
pub const TOKEN_SETTINGS_URL: &str = "https://github.com/settings/tokens";

/// Outcome of the repository creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    /// No token was supplied, so no request was made.
    Skipped,

    /// GitHub created the repository.
    Created,

    /// GitHub rejected the token (HTTP 401).
    InvalidCredential,

    /// GitHub refused the request, most likely because the repository
    /// already exists (HTTP 422).
    AlreadyExists,

    /// GitHub answered with any other error status.
    HttpError { status: u16, body: String },

    /// The request could not be made or produced no status.
    Failed(String),
}

/// Outcome of the final push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed { branch: String },
    Failed { branch: String, error: String },
}

/// Summary of a launch that got past the account prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub target: LaunchTarget,
    pub api: ApiOutcome,
    /// `false` when adding the remote failed for a reason other than the
    /// remote already existing.
    pub remote_configured: bool,
    pub push: PushOutcome,
    pub repository_url: String,
}

/// Runs the complete launch workflow.
///
/// # Arguments
///
/// * `settings` - Defaults and hosts used for the launch
/// * `ask_user_for_value` - Function that prompts the user and returns the answer
/// * `create_client` - Function that builds a repository client from a token
/// * `git` - Runner for the local git commands
/// * `out` - Destination for everything shown to the user
///
/// # Returns
///
/// A [`LaunchReport`] describing each step. HTTP and git failures are part of
/// the report, not errors.
///
/// # Errors
///
/// - `Error::MissingAccountName` if the account name is left empty
/// - `Error::Output` if writing to `out` fails for any other message
pub async fn handle_launch<AskFn, ClientFn, W>(
    settings: &LaunchSettings,
    ask_user_for_value: AskFn,
    create_client: ClientFn,
    git: &dyn GitRunner,
    out: &mut W,
) -> Result<LaunchReport, Error>
where
    AskFn: Fn(&str) -> Result<String, Error>,
    ClientFn: Fn(&str) -> Result<Box<dyn RepositoryClient>, github_client::Error>,
    W: Write,
{
    writeln!(out, "{}", "🚀 GitHub Repository Setup".bold())?;
    writeln!(out, "{}", "=".repeat(50))?;

    let target = collect_target(settings, &ask_user_for_value, out)?;
    info!(repository = %target.full_name(), "Launch target selected");

    let api = match collect_token(&ask_user_for_value, out)? {
        Some(token) => {
            create_remote_repository(settings, &target, &token, &create_client, out).await?
        }
        None => {
            debug!("No token supplied, skipping repository creation");
            ApiOutcome::Skipped
        }
    };

    let remote_configured = configure_remote(settings, &target, git, out)?;
    let push = push_branch(settings, &target, git, out)?;

    Ok(LaunchReport {
        repository_url: settings.repository_url(&target),
        target,
        api,
        remote_configured,
        push,
    })
}

/// Prompts through `ask_user_for_value`, treating a failed read as an empty answer.
fn ask_or_empty<AskFn>(ask_user_for_value: &AskFn, request: &str) -> String
where
    AskFn: Fn(&str) -> Result<String, Error>,
{
    match ask_user_for_value(request) {
        Ok(answer) => answer.trim().to_string(),
        Err(e) => {
            warn!(error = %e, "Failed to read answer, treating it as empty");
            String::new()
        }
    }
}

/// Asks for the account and repository names.
pub(crate) fn collect_target<AskFn, W>(
    settings: &LaunchSettings,
    ask_user_for_value: &AskFn,
    out: &mut W,
) -> Result<LaunchTarget, Error>
where
    AskFn: Fn(&str) -> Result<String, Error>,
    W: Write,
{
    let account = ask_or_empty(ask_user_for_value, "Enter your GitHub username: ");
    if account.is_empty() {
        if let Err(e) = writeln!(out, "{}", "❌ Username is required!".red()) {
            warn!(error = %e, "Failed to report the missing account name");
        }
        return Err(Error::MissingAccountName);
    }

    let request = format!(
        "Enter repository name (default: {}): ",
        settings.default_repository_name
    );
    let mut repository = ask_or_empty(ask_user_for_value, &request);
    if repository.is_empty() {
        debug!(
            default = %settings.default_repository_name,
            "Using default repository name"
        );
        repository = settings.default_repository_name.clone();
    }

    let target = LaunchTarget::new(account, repository);
    writeln!(out, "\n📋 Repository: {}", target.full_name())?;
    Ok(target)
}

/// Asks whether the user has a token and, if so, for the token itself.
///
/// Returns `None` when the answer is anything but yes or the token is empty.
pub(crate) fn collect_token<AskFn, W>(
    ask_user_for_value: &AskFn,
    out: &mut W,
) -> Result<Option<String>, Error>
where
    AskFn: Fn(&str) -> Result<String, Error>,
    W: Write,
{
    writeln!(
        out,
        "\n{}",
        "⚠️  To create the repository automatically, you need a GitHub Personal Access Token."
            .yellow()
    )?;
    writeln!(out, "   Get one at: {}", TOKEN_SETTINGS_URL)?;
    writeln!(out, "   Required scope: 'repo'")?;

    let answer = ask_or_empty(ask_user_for_value, "\nDo you have a token? (y/n): ");
    if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
        return Ok(None);
    }

    let token = ask_or_empty(ask_user_for_value, "Enter your GitHub token: ");
    if token.is_empty() {
        debug!("Empty token entered");
        return Ok(None);
    }
    Ok(Some(token))
}

/// Creates the repository through the API and reports the result.
///
/// Never fails on API errors; they are classified into an [`ApiOutcome`].
#[instrument(skip(settings, token, create_client, out), fields(repository = %target.full_name()))]
pub(crate) async fn create_remote_repository<ClientFn, W>(
    settings: &LaunchSettings,
    target: &LaunchTarget,
    token: &str,
    create_client: &ClientFn,
    out: &mut W,
) -> Result<ApiOutcome, Error>
where
    ClientFn: Fn(&str) -> Result<Box<dyn RepositoryClient>, github_client::Error>,
    W: Write,
{
    let payload = RepositoryCreatePayload {
        name: target.repository.clone(),
        description: Some(settings.description.clone()),
        private: Some(settings.private),
        auto_init: Some(false),
        ..Default::default()
    };

    let result = match create_client(token) {
        Ok(client) => client.create_user_repository(&payload).await,
        Err(e) => Err(e),
    };

    let outcome = match result {
        Ok(repo) => {
            info!(full_name = repo.full_name(), "Repository created");
            ApiOutcome::Created
        }
        Err(github_client::Error::Unauthorized) => ApiOutcome::InvalidCredential,
        Err(github_client::Error::UnprocessableEntity(message)) => {
            debug!(reason = %message, "Repository creation was refused");
            ApiOutcome::AlreadyExists
        }
        Err(github_client::Error::HttpStatus { status, body }) => {
            ApiOutcome::HttpError { status, body }
        }
        Err(e) => ApiOutcome::Failed(e.to_string()),
    };

    match &outcome {
        ApiOutcome::Skipped => {}
        ApiOutcome::Created => {
            writeln!(out, "{}", "✅ Repository created successfully!".green())?
        }
        ApiOutcome::InvalidCredential => writeln!(
            out,
            "{}",
            "❌ Invalid token. Please check your token.".red()
        )?,
        ApiOutcome::AlreadyExists => writeln!(
            out,
            "{}",
            "⚠️  Repository might already exist. Continuing...".yellow()
        )?,
        ApiOutcome::HttpError { status, body } => {
            writeln!(out, "{}", format!("❌ Error: {} - {}", status, body).red())?
        }
        ApiOutcome::Failed(message) => {
            writeln!(out, "{}", format!("❌ Error: {}", message).red())?
        }
    }

    Ok(outcome)
}

/// Replaces the `origin` remote with one pointing at the target repository.
///
/// Returns whether the remote is in place. A remote that already exists
/// counts as configured.
pub(crate) fn configure_remote<W>(
    settings: &LaunchSettings,
    target: &LaunchTarget,
    git: &dyn GitRunner,
    out: &mut W,
) -> Result<bool, Error>
where
    W: Write,
{
    writeln!(out, "\n🔗 Setting up remote...")?;
    let remote_url = settings.remote_url(target);

    // Removal fails when there is no remote yet, which is the common case.
    let _ = git::remove_remote(git, REMOTE_NAME);

    let added =
        git::add_remote(git, REMOTE_NAME, &remote_url).unwrap_or_else(GitOutput::from_error);
    if !added.success && !added.stderr.contains("already exists") {
        warn!(stderr = %added.stderr, "Failed to add remote");
        writeln!(out, "{}", format!("⚠️  {}", added.stderr).yellow())?;
        return Ok(false);
    }

    writeln!(out, "{}", "✅ Remote added".green())?;
    Ok(true)
}

/// Pushes the current branch and prints either the follow-up steps for
/// GitHub Pages or the manual fallback.
pub(crate) fn push_branch<W>(
    settings: &LaunchSettings,
    target: &LaunchTarget,
    git: &dyn GitRunner,
    out: &mut W,
) -> Result<PushOutcome, Error>
where
    W: Write,
{
    writeln!(out, "\n📤 Pushing to GitHub...")?;
    let branch = git::current_branch(git, &settings.default_branch);

    let pushed = git::push_with_upstream(git, REMOTE_NAME, &branch)
        .unwrap_or_else(GitOutput::from_error);

    if pushed.success {
        writeln!(out, "{}", "✅ Code pushed successfully!".green())?;
        writeln!(
            out,
            "\n🌐 Repository URL: {}",
            settings.repository_url(target)
        )?;
        writeln!(out, "\n📝 Next steps:")?;
        writeln!(out, "   1. Go to Settings > Pages")?;
        writeln!(out, "   2. Source: Deploy from a branch")?;
        writeln!(out, "   3. Branch: {}, Folder: / (root)", branch)?;
        writeln!(
            out,
            "   4. Your site will be at: {}",
            settings.pages_url(target)
        )?;
        return Ok(PushOutcome::Pushed { branch });
    }

    warn!(branch = %branch, stderr = %pushed.stderr, "Push failed");
    writeln!(
        out,
        "{}",
        format!("⚠️  Push failed: {}", pushed.stderr).yellow()
    )?;
    writeln!(out, "\n💡 Manual steps:")?;
    writeln!(
        out,
        "   1. Create repo at: {}",
        settings.new_repository_url()
    )?;
    writeln!(
        out,
        "   2. Then run: git push -u {} {}",
        REMOTE_NAME, branch
    )?;

    Ok(PushOutcome::Failed {
        branch,
        error: pushed.stderr,
    })
}
