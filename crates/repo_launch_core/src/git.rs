//! Local Git repository operations.
//!
//! Remote configuration and pushing shell out to the `git` binary so that the
//! user's own credential helpers, SSH keys and proxy settings apply. The
//! [`GitRunner`] trait is the seam that lets the workflow run against a
//! recorded fake in tests.
//!
//! For GitHub API operations (creating repositories), see the
//! `github_client` crate.

use std::path::PathBuf;
use std::process::Command;

use crate::errors::Error;
use tracing::{debug, info, instrument, warn};

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;

/// Name of the remote the launcher manages.
pub const REMOTE_NAME: &str = "origin";

/// Captured result of one `git` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    /// Whether git exited with status zero.
    pub success: bool,
    /// Trimmed standard output.
    pub stdout: String,
    /// Trimmed standard error.
    pub stderr: String,
}

impl GitOutput {
    /// A failed invocation whose error text is the display form of `error`.
    ///
    /// Used when git could not be started, so the failure is reported the
    /// same way as one git itself produced.
    pub fn from_error(error: Error) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: error.to_string(),
        }
    }
}

/// Runs git subcommands.
pub trait GitRunner {
    /// Runs `git <args>` and captures its output.
    ///
    /// # Errors
    ///
    /// Returns `Error::GitSpawn` if the process could not be started. A git
    /// command that runs and fails is an `Ok` with `success == false`.
    fn run(&self, args: &[&str]) -> Result<GitOutput, Error>;
}

/// [`GitRunner`] backed by the `git` executable on the `PATH`.
#[derive(Debug, Clone)]
pub struct GitCli {
    working_dir: PathBuf,
}

impl GitCli {
    /// Runs git inside `working_dir`.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }
}

impl GitRunner for GitCli {
    #[instrument(skip(self), fields(working_dir = ?self.working_dir))]
    fn run(&self, args: &[&str]) -> Result<GitOutput, Error> {
        debug!("Running git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| {
                warn!(error = %e, "Failed to start git. Is git installed?");
                Error::GitSpawn(e.to_string())
            })?;

        let result = GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        };

        debug!(
            success = result.success,
            exit_code = ?output.status.code(),
            "git {} finished",
            args.first().copied().unwrap_or_default()
        );

        Ok(result)
    }
}

/// `git remote remove <name>`
pub fn remove_remote(git: &dyn GitRunner, name: &str) -> Result<GitOutput, Error> {
    let output = git.run(&["remote", "remove", name])?;
    if output.success {
        info!(remote = name, "Existing remote removed");
    } else {
        debug!(remote = name, stderr = %output.stderr, "No remote removed");
    }
    Ok(output)
}

/// `git remote add <name> <url>`
pub fn add_remote(git: &dyn GitRunner, name: &str, url: &str) -> Result<GitOutput, Error> {
    let output = git.run(&["remote", "add", name, url])?;
    if output.success {
        info!(remote = name, url = url, "Remote added");
    }
    Ok(output)
}

/// `git push -u <remote> <branch>`
pub fn push_with_upstream(
    git: &dyn GitRunner,
    remote: &str,
    branch: &str,
) -> Result<GitOutput, Error> {
    info!(remote = remote, branch = branch, "Pushing branch");
    git.run(&["push", "-u", remote, branch])
}

/// Name of the checked out branch, or `fallback` when there is none.
///
/// An unborn branch (no commits yet), a detached `HEAD` or a git failure all
/// resolve to `fallback`.
pub fn current_branch(git: &dyn GitRunner, fallback: &str) -> String {
    match git.run(&["rev-parse", "--abbrev-ref", "HEAD"]) {
        Ok(output) if output.success && !output.stdout.is_empty() && output.stdout != "HEAD" => {
            output.stdout
        }
        Ok(output) => {
            debug!(
                stderr = %output.stderr,
                fallback = fallback,
                "No current branch, using fallback"
            );
            fallback.to_string()
        }
        Err(e) => {
            warn!(error = %e, fallback = fallback, "Could not determine current branch");
            fallback.to_string()
        }
    }
}
