use std::io;
use std::path::PathBuf;

use clap::Parser;
use repo_launch_cli::{
    config::{get_config_path, AppConfig, CONFIG_PATH_ENV},
    create_repository_client, exit_code,
    prompt::ask_user_for_value,
    LOG_ENV,
};
use repo_launch_core::{handle_launch, GitCli};
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// repo-launch: create a GitHub repository and push the local repository to it
#[derive(Parser)]
#[command(name = "repo-launch", version)]
#[command(
    about = "Create a GitHub repository and push the local repository to it",
    long_about = "Interactively asks for a GitHub account and repository name, optionally \
                  creates the repository with a personal access token, points the 'origin' \
                  remote at it and pushes the current branch."
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logging goes to stderr so it never mixes with the prompts.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::OFF.into())
                .with_env_var(LOG_ENV)
                .from_env_lossy(),
        )
        .init();

    let _cli = Cli::parse();

    let config_path = get_config_path(std::env::var(CONFIG_PATH_ENV).ok().as_deref());
    let config = AppConfig::load_or_default(&config_path);
    let settings = config.launch_settings();
    let api_url = config.github.api_url.clone();

    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    debug!(working_dir = ?working_dir, "Using working directory");
    let git = GitCli::new(working_dir);

    let ask = |request: &str| {
        ask_user_for_value(request)
            .map_err(|e| repo_launch_core::Error::Prompt(e.to_string()))
    };
    let create_client = |token: &str| create_repository_client(token, &api_url);

    let mut stdout = io::stdout();
    let result = handle_launch(&settings, ask, create_client, &git, &mut stdout).await;

    std::process::exit(exit_code(&result));
}
