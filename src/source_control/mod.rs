//! Source control integration for generating URLs to view code in web UI.
//!
//! This module provides utilities for:
//! - Normalizing git remotes into a canonical `https://host/owner/repo` form
//! - Detecting which hosting software serves a host (GitHub, GitLab, cgit, ...)
//! - Generating host-specific commit, file, line and range URLs
//!
//! Normalization and link rendering are pure functions of their inputs: no
//! git, no network, no logging. [`HostRegistry`] layers user host mappings on top.

mod detection;
mod platforms;
mod registry;
mod remote;

pub use detection::{
    detect_host_kind, host_from_base_url, host_matches, match_profile, HostKind, HostProfile,
    HOST_PROFILES,
};
pub use platforms::{
    commit_link, file_link, line_link, range_link, render, LinkKind, ViewCoordinates,
};
pub use registry::{HostRegistry, ResolvedRepo};
pub use remote::{normalize, CanonicalRepoRef};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeblinkError {
    #[error("Unrecognized git remote format: {0}")]
    UnrecognizedRemoteFormat(String),

    #[error("No host profile matches '{0}'")]
    UnknownHost(String),

    #[error("{kind} links are not supported on {host} hosts")]
    UnsupportedLinkKind { kind: LinkKind, host: HostKind },
}

/// Canonical `https://<host>/<owner_path>` URL for a git remote.
///
/// ```
/// assert_eq!(
///     git_weblink::get_repo_url("git@github.com:git/git.git").unwrap(),
///     "https://github.com/git/git"
/// );
/// ```
pub fn get_repo_url(remote: &str) -> Result<String, WeblinkError> {
    Ok(normalize(remote)?.to_string())
}

/// Link to a commit on the host serving `base_url`.
pub fn get_commit_link(
    base_url: &str,
    owner_path: &str,
    commit_id: &str,
) -> Result<String, WeblinkError> {
    let kind = detect_host_kind(&host_from_base_url(base_url)?);
    Ok(commit_link(kind, base_url, owner_path, commit_id))
}

/// Link to a file at a commit. An empty `path` yields the commit link.
pub fn get_file_link(
    base_url: &str,
    owner_path: &str,
    commit_id: &str,
    path: &str,
) -> Result<String, WeblinkError> {
    let kind = detect_host_kind(&host_from_base_url(base_url)?);
    Ok(file_link(kind, base_url, owner_path, commit_id, Some(path)))
}

/// Link to a single line of a file at a commit.
pub fn get_line_link(
    base_url: &str,
    owner_path: &str,
    commit_id: &str,
    path: &str,
    line: u32,
) -> Result<String, WeblinkError> {
    let kind = detect_host_kind(&host_from_base_url(base_url)?);
    line_link(kind, base_url, owner_path, commit_id, Some(path), line)
}

/// Link to a line range of a file at a commit.
pub fn get_range_link(
    base_url: &str,
    owner_path: &str,
    commit_id: &str,
    path: &str,
    start_line: u32,
    end_line: u32,
) -> Result<String, WeblinkError> {
    let kind = detect_host_kind(&host_from_base_url(base_url)?);
    range_link(kind, base_url, owner_path, commit_id, Some(path), start_line, end_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_repo_url_strips_git_suffix() {
        assert_eq!(
            get_repo_url("git@github.com:git/git.git"),
            Ok("https://github.com/git/git".to_string())
        );
        assert_eq!(
            get_repo_url("git@github.com:git/git"),
            Ok("https://github.com/git/git".to_string())
        );
    }

    #[test]
    fn test_get_repo_url_rejects_garbage() {
        assert_eq!(
            get_repo_url("not-a-url"),
            Err(WeblinkError::UnrecognizedRemoteFormat("not-a-url".to_string()))
        );
    }

    #[test]
    fn test_get_commit_link_unknown_host_falls_back_to_github_style() {
        assert_eq!(
            get_commit_link("https://git.example.com", "team/tool", "abc123").as_deref(),
            Ok("https://git.example.com/team/tool/commit/abc123")
        );
    }

    #[test]
    fn test_get_commit_link_rejects_base_without_scheme() {
        assert_eq!(
            get_commit_link("github.com", "git/git", "abc123"),
            Err(WeblinkError::UnknownHost("github.com".to_string()))
        );
    }

    #[test]
    fn test_get_file_link_empty_path_is_commit_link() {
        for base in [
            "https://github.com",
            "https://gitlab.com",
            "https://git.kernel.org",
            "https://codeberg.org",
            "https://gerrit.googlesource.com",
        ] {
            assert_eq!(
                get_file_link(base, "a/b", "abc123", ""),
                get_commit_link(base, "a/b", "abc123"),
                "file link without a path should degenerate on {base}"
            );
        }
    }

    #[test]
    fn test_line_link_on_gerrit_is_unsupported() {
        let err = get_line_link("https://gerrit.googlesource.com", "jgit", "abc123", "README.md", 3)
            .unwrap_err();
        assert_eq!(
            err,
            WeblinkError::UnsupportedLinkKind {
                kind: LinkKind::Line,
                host: HostKind::Gerrit,
            }
        );
        assert_eq!(err.to_string(), "line links are not supported on Gerrit hosts");
    }

    #[test]
    fn test_range_link_on_gerrit_is_unsupported() {
        assert!(matches!(
            get_range_link(
                "https://android.googlesource.com",
                "platform/bionic",
                "abc",
                "libc/Android.bp",
                1,
                9
            ),
            Err(WeblinkError::UnsupportedLinkKind { kind: LinkKind::Range, .. })
        ));
    }
}
