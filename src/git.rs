//! Git integration utilities.
//!
//! This module gathers the inputs a web link needs from a local checkout:
//! - The URL of a remote
//! - The commit a revision points at
//! - Repository-relative paths for files named relative to a directory

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found in PATH")]
    GitNotFound,

    #[error("Not a git repository")]
    NotGitRepository,

    #[error("Failed to execute git command: {0}")]
    CommandError(String),

    #[error("Remote '{0}' not found")]
    RemoteNotFound(String),

    #[error("Revision '{0}' does not name a commit")]
    RevisionNotFound(String),

    #[error("Git command output was not valid UTF-8")]
    InvalidUtf8,

    #[error("Path '{0}' is outside the repository")]
    PathOutsideRepository(String),
}

fn run_git(repo_dir: &Path, args: &[&str]) -> Result<Output, GitError> {
    let git = which::which("git").map_err(|_| GitError::GitNotFound)?;
    Command::new(git)
        .args(args)
        .current_dir(repo_dir)
        // Clear GIT_DIR to avoid being affected by git hooks environment
        .env_remove("GIT_DIR")
        .env_remove("GIT_WORK_TREE")
        .output()
        .map_err(|e| GitError::CommandError(e.to_string()))
}

fn stdout_of(output: Output) -> Result<String, GitError> {
    String::from_utf8(output.stdout)
        .map_err(|_| GitError::InvalidUtf8)
        .map(|s| s.trim().to_string())
}

/// Map a failed invocation to `NotGitRepository`, or to `otherwise`.
fn failure(output: &Output, otherwise: GitError) -> GitError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.contains("not a git repository") {
        return GitError::NotGitRepository;
    }
    otherwise
}

/// Get the URL of a remote.
///
/// Runs `git remote get-url <remote>` in the given repository.
#[instrument(level = "debug", skip(repo_dir))]
pub fn remote_url(repo_dir: &Path, remote: &str) -> Result<String, GitError> {
    let output = run_git(repo_dir, &["remote", "get-url", remote])?;
    if !output.status.success() {
        return Err(failure(&output, GitError::RemoteNotFound(remote.to_string())));
    }
    let url = stdout_of(output)?;
    debug!(%url, "Resolved remote URL");
    Ok(url)
}

/// Resolve a revision (`HEAD`, a branch, a tag, an abbreviated id) to a full commit id.
///
/// Runs `git rev-parse --verify <rev>^{commit}`.
#[instrument(level = "debug", skip(repo_dir))]
pub fn resolve_commit(repo_dir: &Path, rev: &str) -> Result<String, GitError> {
    let spec = format!("{rev}^{{commit}}");
    let output = run_git(repo_dir, &["rev-parse", "--verify", "--quiet", &spec])?;
    if !output.status.success() {
        return Err(failure(&output, GitError::RevisionNotFound(rev.to_string())));
    }
    stdout_of(output)
}

fn rev_parse(repo_dir: &Path, flag: &str) -> Result<String, GitError> {
    let output = run_git(repo_dir, &["rev-parse", flag])?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(failure(&output, GitError::CommandError(stderr)));
    }
    stdout_of(output)
}

/// Path of `repo_dir` relative to the top of its work tree ("" at the top).
pub fn show_prefix(repo_dir: &Path) -> Result<String, GitError> {
    rev_parse(repo_dir, "--show-prefix")
}

/// Absolute path of the top of the work tree containing `repo_dir`.
pub fn show_toplevel(repo_dir: &Path) -> Result<PathBuf, GitError> {
    rev_parse(repo_dir, "--show-toplevel").map(PathBuf::from)
}

/// Turn `path` into a repository-relative path.
///
/// Relative paths are taken relative to `repo_dir`; absolute paths must lie
/// inside the work tree.
pub fn resolve_repo_path(repo_dir: &Path, path: &str) -> Result<String, GitError> {
    let resolved = if Path::new(path).is_absolute() {
        let toplevel = show_toplevel(repo_dir)?;
        let toplevel = toplevel.canonicalize().unwrap_or(toplevel);
        let file = Path::new(path);
        let file = file.canonicalize().unwrap_or_else(|_| file.to_path_buf());
        let relative = file
            .strip_prefix(&toplevel)
            .map_err(|_| GitError::PathOutsideRepository(path.to_string()))?;
        repo_relative_path("", relative.to_str().ok_or(GitError::InvalidUtf8)?)?
    } else {
        repo_relative_path(&show_prefix(repo_dir)?, path)?
    };
    debug!(%path, %resolved, "Resolved repository path");
    Ok(resolved)
}

/// Join a work-tree `prefix` (as printed by `--show-prefix`) with a relative
/// `path`, resolving `.` and `..` lexically.
pub fn repo_relative_path(prefix: &str, path: &str) -> Result<String, GitError> {
    if path.starts_with('/') {
        return Err(GitError::PathOutsideRepository(path.to_string()));
    }
    let mut parts: Vec<&str> = prefix.split('/').filter(|s| !s.is_empty()).collect();
    for component in path.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                if parts.pop().is_none() {
                    return Err(GitError::PathOutsideRepository(path.to_string()));
                }
            }
            name => parts.push(name),
        }
    }
    Ok(parts.join("/"))
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
