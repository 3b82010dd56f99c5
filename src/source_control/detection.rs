//! Host detection logic for source control web frontends.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use super::WeblinkError;

/// Hosting software families, each with its own view URL grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    /// GitHub, and the fallback for hosts nobody told us about
    GitHub,
    GitLab,
    /// cgit, as run by git.kernel.org
    Cgit,
    #[serde(alias = "gitea", alias = "codeberg")]
    Forgejo,
    /// Gerrit's gitiles frontend (`*.googlesource.com`)
    #[serde(alias = "gitiles", alias = "googlesource")]
    Gerrit,
}

impl HostKind {
    /// Get human-readable name for the host family
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::GitLab => "GitLab",
            Self::Cgit => "cgit",
            Self::Forgejo => "Forgejo",
            Self::Gerrit => "Gerrit",
        }
    }

    /// Whether file views on this host can be anchored to a line or range
    #[must_use]
    pub fn supports_line_anchors(self) -> bool {
        !matches!(self, Self::Gerrit)
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the host table: a host pattern and the grammar it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostProfile {
    /// Matches the host itself and any of its subdomains
    pub pattern: &'static str,
    pub kind: HostKind,
}

/// Known hosts, in match order. Adding a host is adding a row.
pub const HOST_PROFILES: &[HostProfile] = &[
    HostProfile { pattern: "github.com", kind: HostKind::GitHub },
    HostProfile { pattern: "gitlab.com", kind: HostKind::GitLab },
    HostProfile { pattern: "gitlab.gnome.org", kind: HostKind::GitLab },
    HostProfile { pattern: "gitlab.freedesktop.org", kind: HostKind::GitLab },
    HostProfile { pattern: "salsa.debian.org", kind: HostKind::GitLab },
    HostProfile { pattern: "git.kernel.org", kind: HostKind::Cgit },
    HostProfile { pattern: "git.zx2c4.com", kind: HostKind::Cgit },
    HostProfile { pattern: "codeberg.org", kind: HostKind::Forgejo },
    HostProfile { pattern: "googlesource.com", kind: HostKind::Gerrit },
];

/// Exact or subdomain match, ignoring ASCII case and a trailing root dot.
#[must_use]
pub fn host_matches(host: &str, pattern: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    let pattern = pattern.to_ascii_lowercase();
    host == pattern
        || host
            .strip_suffix(pattern.as_str())
            .is_some_and(|rest| rest.ends_with('.'))
}

/// First profile in [`HOST_PROFILES`] matching `host`.
#[must_use]
pub fn match_profile(host: &str) -> Option<&'static HostProfile> {
    HOST_PROFILES.iter().find(|profile| host_matches(host, profile.pattern))
}

/// Detect the host family, falling back to GitHub-style URLs for unknown hosts.
#[must_use]
pub fn detect_host_kind(host: &str) -> HostKind {
    match_profile(host).map_or(HostKind::GitHub, |profile| profile.kind)
}

/// Extract the host from a `scheme://host[:port][/...]` base URL.
pub fn host_from_base_url(base_url: &str) -> Result<String, WeblinkError> {
    Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().filter(|host| !host.is_empty()).map(str::to_string))
        .ok_or_else(|| WeblinkError::UnknownHost(base_url.to_string()))
}
