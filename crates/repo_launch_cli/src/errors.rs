use std::io;

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the repo-launch CLI application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading or saving the configuration file.
    ///
    /// The launch itself never fails on these; an unusable file is reported
    /// and the defaults are used instead.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading an answer from standard input failed.
    #[error("Failed to read from standard input.")]
    ReadInput(io::Error),

    /// Failed to flush the standard output buffer.
    ///
    /// This error occurs when the CLI cannot write a prompt to the terminal,
    /// typically due to broken pipes or terminal issues.
    #[error("Failed to flush the std out buffer.")]
    StdOutFlushFailed,
}
