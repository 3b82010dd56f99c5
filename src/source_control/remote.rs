//! Git remote URL normalization.
//!
//! Supports the remote formats git itself accepts for network transports:
//! - SCP-like SSH: `git@github.com:org-name/repo.git`
//! - SSH URLs: `ssh://user@gerrit.googlesource.com:29418/plugins/lfs`
//! - HTTPS, HTTP and git protocol: `https://git.kernel.org/pub/scm/utils/b4/b4.git`
//!
//! Normalization is purely syntactic. Hosts whose clone path differs from
//! their web path are corrected by host mappings, not here.

use std::fmt;

use url::Url;

use super::WeblinkError;

/// Schemes accepted in `scheme://` remotes. Everything normalizes to `https`.
const SCHEMES: &[&str] = &["ssh", "git+ssh", "ssh+git", "git", "http", "https"];

/// A repository identified by its web host and the path under it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalRepoRef {
    /// Lowercased host, without user-info or port (e.g. "github.com")
    pub host: String,
    /// Slash-separated repository path without surrounding slashes or `.git`
    pub owner_path: String,
}

impl CanonicalRepoRef {
    #[must_use]
    pub fn new(host: &str, owner_path: &str) -> Self {
        Self {
            host: host.to_ascii_lowercase(),
            owner_path: owner_path.trim_matches('/').to_string(),
        }
    }

    /// The browser-facing base URL, always `https://<host>`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}", self.host)
    }
}

impl fmt::Display for CanonicalRepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "https://{}/{}", self.host, self.owner_path)
    }
}

/// Parse a git remote into its canonical web form.
///
/// Explicit `scheme://` URLs are recognized before the SCP-like
/// `user@host:path` shorthand, which never contains `://`.
pub fn normalize(remote: &str) -> Result<CanonicalRepoRef, WeblinkError> {
    let remote = remote.trim();
    let parsed = if remote.contains("://") {
        parse_scheme_url(remote)
    } else {
        parse_scp_like(remote)
    };
    parsed.ok_or_else(|| WeblinkError::UnrecognizedRemoteFormat(remote.to_string()))
}

/// Query and fragment are not part of the repository path.
fn parse_scheme_url(remote: &str) -> Option<CanonicalRepoRef> {
    let url = Url::parse(remote).ok()?;
    if !SCHEMES.contains(&url.scheme()) {
        return None;
    }
    canonical(url.host_str()?, url.path())
}

fn parse_scp_like(remote: &str) -> Option<CanonicalRepoRef> {
    let (user, host_and_path) = remote.split_once('@')?;
    if user.is_empty() || user.contains('/') {
        return None;
    }
    let (host, path) = split_scp_host(host_and_path)?;
    if host.contains(['/', '@']) {
        return None;
    }
    canonical(host, path)
}

/// Split `host:path`, keeping a bracketed IPv6 host (`[::1]:path`) whole.
fn split_scp_host(host_and_path: &str) -> Option<(&str, &str)> {
    if !host_and_path.starts_with('[') {
        return host_and_path.split_once(':');
    }
    let end = host_and_path.find("]:")?;
    let host = host_and_path.get(..=end)?;
    let path = host_and_path.get(end.checked_add(2)?..)?;
    Some((host, path))
}

fn canonical(host: &str, path: &str) -> Option<CanonicalRepoRef> {
    let path = path.trim_matches('/');
    let owner_path = path.strip_suffix(".git").unwrap_or(path);
    if host.is_empty() || owner_path.is_empty() {
        return None;
    }
    Some(CanonicalRepoRef::new(host, owner_path))
}

#[cfg(test)]
#[path = "remote_tests_1.rs"]
mod tests_1;
#[cfg(test)]
#[path = "remote_tests_2.rs"]
mod tests_2;
