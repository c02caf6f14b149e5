//! Tests for git module

use super::*;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::process::Command;
use tempfile::TempDir;

/// Fake runner that records every invocation and replays queued results.
struct ScriptedGit {
    calls: RefCell<Vec<Vec<String>>>,
    responses: RefCell<VecDeque<Result<GitOutput, Error>>>,
}

impl ScriptedGit {
    fn new(responses: Vec<Result<GitOutput, Error>>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            responses: RefCell::new(responses.into()),
        }
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }
}

impl GitRunner for ScriptedGit {
    fn run(&self, args: &[&str]) -> Result<GitOutput, Error> {
        self.calls
            .borrow_mut()
            .push(args.iter().map(|a| a.to_string()).collect());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ok("")))
    }
}

fn ok(stdout: &str) -> GitOutput {
    GitOutput {
        success: true,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

fn failed(stderr: &str) -> GitOutput {
    GitOutput {
        success: false,
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn init_repo() -> (TempDir, GitCli) {
    let temp_dir = TempDir::new().unwrap();
    let git = GitCli::new(temp_dir.path());
    let init = git.run(&["init", "--quiet"]).unwrap();
    assert!(init.success, "git init failed: {}", init.stderr);
    (temp_dir, git)
}

#[test]
fn test_remove_remote_issues_remote_remove() {
    let git = ScriptedGit::new(vec![Ok(failed("error: No such remote: 'origin'"))]);

    let output = remove_remote(&git, REMOTE_NAME).unwrap();

    assert!(!output.success);
    assert_eq!(git.calls(), vec![vec!["remote", "remove", "origin"]]);
}

#[test]
fn test_add_remote_issues_remote_add() {
    let git = ScriptedGit::new(vec![Ok(ok(""))]);

    let output = add_remote(&git, REMOTE_NAME, "https://github.com/octocat/demo.git").unwrap();

    assert!(output.success);
    assert_eq!(
        git.calls(),
        vec![vec![
            "remote",
            "add",
            "origin",
            "https://github.com/octocat/demo.git"
        ]]
    );
}

#[test]
fn test_push_with_upstream_sets_tracking() {
    let git = ScriptedGit::new(vec![Ok(ok(""))]);

    push_with_upstream(&git, REMOTE_NAME, "main").unwrap();

    assert_eq!(git.calls(), vec![vec!["push", "-u", "origin", "main"]]);
}

#[test]
fn test_spawn_failure_propagates() {
    let git = ScriptedGit::new(vec![Err(Error::GitSpawn("not found".to_string()))]);

    let result = push_with_upstream(&git, REMOTE_NAME, "main");

    assert!(matches!(result, Err(Error::GitSpawn(_))));
}

#[test]
fn test_current_branch_reads_head() {
    let git = ScriptedGit::new(vec![Ok(ok("develop"))]);

    assert_eq!(current_branch(&git, "main"), "develop");
    assert_eq!(
        git.calls(),
        vec![vec!["rev-parse", "--abbrev-ref", "HEAD"]]
    );
}

#[test]
fn test_current_branch_falls_back_when_detached() {
    let git = ScriptedGit::new(vec![Ok(ok("HEAD"))]);

    assert_eq!(current_branch(&git, "main"), "main");
}

#[test]
fn test_current_branch_falls_back_on_failure() {
    let git = ScriptedGit::new(vec![Ok(failed(
        "fatal: ambiguous argument 'HEAD': unknown revision",
    ))]);

    assert_eq!(current_branch(&git, "trunk"), "trunk");
}

#[test]
fn test_current_branch_falls_back_when_git_missing() {
    let git = ScriptedGit::new(vec![Err(Error::GitSpawn("not found".to_string()))]);

    assert_eq!(current_branch(&git, "main"), "main");
}

#[test]
fn test_git_output_from_error() {
    let output = GitOutput::from_error(Error::GitSpawn("No such file or directory".to_string()));

    assert!(!output.success);
    assert!(output.stdout.is_empty());
    assert_eq!(output.stderr, "Failed to run git: No such file or directory");
}

#[test]
fn test_git_cli_missing_working_directory_is_spawn_error() {
    let temp_dir = TempDir::new().unwrap();
    let git = GitCli::new(temp_dir.path().join("does-not-exist"));

    let result = git.run(&["status"]);

    assert!(matches!(result, Err(Error::GitSpawn(_))));
}

#[test]
fn test_git_cli_adding_existing_remote_reports_already_exists() {
    if !git_available() {
        eprintln!("git is not installed, skipping");
        return;
    }
    let (_temp_dir, git) = init_repo();
    let url = "https://github.com/octocat/demo.git";

    let first = add_remote(&git, REMOTE_NAME, url).unwrap();
    let second = add_remote(&git, REMOTE_NAME, url).unwrap();

    assert!(first.success, "first add failed: {}", first.stderr);
    assert!(!second.success);
    assert!(
        second.stderr.contains("already exists"),
        "unexpected stderr: {}",
        second.stderr
    );
}

#[test]
fn test_git_cli_remove_then_add_replaces_remote() {
    if !git_available() {
        eprintln!("git is not installed, skipping");
        return;
    }
    let (_temp_dir, git) = init_repo();
    add_remote(&git, REMOTE_NAME, "https://github.com/octocat/old.git").unwrap();

    let removed = remove_remote(&git, REMOTE_NAME).unwrap();
    let added = add_remote(&git, REMOTE_NAME, "https://github.com/octocat/new.git").unwrap();

    assert!(removed.success, "remove failed: {}", removed.stderr);
    assert!(added.success, "add failed: {}", added.stderr);
    let url = git.run(&["remote", "get-url", REMOTE_NAME]).unwrap();
    assert_eq!(url.stdout, "https://github.com/octocat/new.git");
}

#[test]
fn test_git_cli_remove_missing_remote_fails_quietly() {
    if !git_available() {
        eprintln!("git is not installed, skipping");
        return;
    }
    let (_temp_dir, git) = init_repo();

    let output = remove_remote(&git, REMOTE_NAME).unwrap();

    assert!(!output.success);
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_git_cli_current_branch_on_unborn_repository_uses_fallback() {
    if !git_available() {
        eprintln!("git is not installed, skipping");
        return;
    }
    let (_temp_dir, git) = init_repo();

    assert_eq!(current_branch(&git, "fallback-branch"), "fallback-branch");
}

#[test]
fn test_git_cli_current_branch_after_commit() {
    if !git_available() {
        eprintln!("git is not installed, skipping");
        return;
    }
    let (_temp_dir, git) = init_repo();
    let checkout = git.run(&["checkout", "--quiet", "-b", "trunk"]).unwrap();
    assert!(checkout.success, "checkout failed: {}", checkout.stderr);
    let commit = git
        .run(&[
            "-c",
            "user.name=Repo Launch",
            "-c",
            "user.email=repo-launch@example.com",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "--quiet",
            "--allow-empty",
            "-m",
            "Initial commit",
        ])
        .unwrap();
    assert!(commit.success, "commit failed: {}", commit.stderr);

    assert_eq!(current_branch(&git, "main"), "trunk");
}
