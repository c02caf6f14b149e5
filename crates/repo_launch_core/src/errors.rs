use std::io;

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can end or interrupt a launch.
///
/// Only [`Error::MissingAccountName`] stops the workflow. The remaining
/// variants describe failures that are reported to the user and absorbed.
#[derive(Error, Debug)]
pub enum Error {
    /// The `git` binary could not be started at all.
    #[error("Failed to run git: {0}")]
    GitSpawn(String),

    /// No account name was entered.
    #[error("An account name is required.")]
    MissingAccountName,

    /// Writing to the user facing output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    /// Reading an answer from the user failed.
    #[error("Failed to read input: {0}")]
    Prompt(String),
}
