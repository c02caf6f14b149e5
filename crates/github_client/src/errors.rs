//! Error types for GitHub client operations.
//!
//! The variants mirror the way callers react to a failed request: a rejected
//! credential, a payload GitHub refused to process, any other HTTP status, or
//! a failure that never produced an HTTP status at all.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.create_user_repository(&payload).await {
///     Ok(repo) => println!("Repository created: {}", repo.name()),
///     Err(Error::Unauthorized) => eprintln!("The token was rejected"),
///     Err(Error::UnprocessableEntity(msg)) => eprintln!("GitHub refused the request: {}", msg),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The GitHub client could not be constructed.
    ///
    /// Raised while building the underlying `Octocrab` instance, for instance
    /// when the API base URL cannot be used.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// GitHub answered with a status other than 401 or 422.
    ///
    /// `body` holds the response body exactly as GitHub returned it.
    #[error("GitHub returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The request failed before GitHub produced a status code.
    ///
    /// Covers DNS and connection failures, invalid URIs and similar
    /// transport level problems.
    #[error("Request to GitHub failed: {0}")]
    Transport(String),

    /// GitHub rejected the credential (HTTP 401).
    #[error("GitHub rejected the provided credentials")]
    Unauthorized,

    /// GitHub could not process the request (HTTP 422).
    ///
    /// For repository creation this almost always means a repository with the
    /// same name already exists for the account.
    #[error("GitHub could not process the request: {0}")]
    UnprocessableEntity(String),
}
