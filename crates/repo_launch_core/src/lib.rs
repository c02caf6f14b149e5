//! Core logic for launching a local repository onto GitHub.
//!
//! The [`workflow`] module drives the interactive launch, [`git`] wraps the
//! local git commands it needs and [`settings`] holds the defaults that shape
//! a launch. Repository creation itself goes through the `github_client`
//! crate.

pub mod errors;
pub mod git;
pub mod settings;
pub mod workflow;

pub use errors::Error;
pub use git::{GitCli, GitOutput, GitRunner};
pub use settings::{LaunchSettings, LaunchTarget};
pub use workflow::{handle_launch, ApiOutcome, LaunchReport, PushOutcome};
