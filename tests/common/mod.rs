//! Common test utilities

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

fn git(path: &Path, args: &[&str]) -> Output {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE")
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

/// Initialize a git repository with one commit and an `origin` remote.
/// Returns the full commit id.
pub fn setup_git_repo(temp_dir: &TempDir, remote_url: &str) -> String {
    let path = temp_dir.path();
    git(path, &["init", "--quiet"]);
    git(path, &["config", "user.email", "test@test.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
    git(path, &["remote", "add", "origin", remote_url]);
    std::fs::create_dir_all(path.join("src")).expect("Failed to create src/");
    std::fs::write(path.join("src/lib.rs"), "pub fn answer() -> u32 {\n    42\n}\n")
        .expect("Failed to write file");
    git(path, &["add", "."]);
    git(path, &["commit", "--quiet", "-m", "Initial commit"]);
    let head = git(path, &["rev-parse", "HEAD"]);
    String::from_utf8(head.stdout)
        .expect("commit id should be UTF-8")
        .trim()
        .to_string()
}

/// Run the `git-weblink` binary with an empty config
pub fn run_weblink(repo: &Path, config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_git-weblink"))
        .arg("-C")
        .arg(repo)
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("GIT_WEBLINK_REMOTE")
        .output()
        .expect("Failed to run git-weblink")
}

/// Write a config file into `dir` and return its path
pub fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    path
}

pub fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "git-weblink failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
