//! Host resolution layered over the built-in host table.
//!
//! User mappings are consulted first, in the order they were written, then
//! [`HOST_PROFILES`](super::HOST_PROFILES), then the fallback policy.

use tracing::debug;

use super::detection::{host_matches, match_profile, HostKind};
use super::platforms::{render, ViewCoordinates};
use super::remote::CanonicalRepoRef;
use super::WeblinkError;
use crate::user_config::{HostMapping, UserConfig};

/// Maps hosts to URL grammars, honoring user-configured overrides.
#[derive(Debug, Clone)]
pub struct HostRegistry {
    mappings: Vec<HostMapping>,
    fallback: bool,
}

impl Default for HostRegistry {
    fn default() -> Self {
        Self {
            mappings: Vec::new(),
            fallback: true,
        }
    }
}

/// A repository rewritten to its web location, with the grammar to render it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRepo {
    pub kind: HostKind,
    pub repo: CanonicalRepoRef,
}

impl ResolvedRepo {
    pub fn render(&self, coords: &ViewCoordinates) -> Result<String, WeblinkError> {
        render(self.kind, &self.repo.base_url(), &self.repo.owner_path, coords)
    }
}

impl HostRegistry {
    #[must_use]
    pub fn from_config(config: &UserConfig) -> Self {
        Self {
            mappings: config.hosts.clone(),
            fallback: config.fallback,
        }
    }

    /// Pick the grammar for `repo` and apply any configured path rewrites.
    pub fn resolve(&self, repo: &CanonicalRepoRef) -> Result<ResolvedRepo, WeblinkError> {
        if let Some(mapping) = self
            .mappings
            .iter()
            .find(|mapping| host_matches(&repo.host, &mapping.host))
        {
            debug!(host = %repo.host, kind = %mapping.kind, "Matched configured host mapping");
            return Ok(ResolvedRepo {
                kind: mapping.kind,
                repo: rewrite(mapping, repo),
            });
        }
        if let Some(profile) = match_profile(&repo.host) {
            debug!(host = %repo.host, kind = %profile.kind, "Matched built-in host profile");
            return Ok(ResolvedRepo {
                kind: profile.kind,
                repo: repo.clone(),
            });
        }
        if !self.fallback {
            return Err(WeblinkError::UnknownHost(repo.host.clone()));
        }
        debug!(host = %repo.host, "Unknown host; using GitHub-style links");
        Ok(ResolvedRepo {
            kind: HostKind::GitHub,
            repo: repo.clone(),
        })
    }
}

fn rewrite(mapping: &HostMapping, repo: &CanonicalRepoRef) -> CanonicalRepoRef {
    let host = mapping.web_host.as_deref().unwrap_or(&repo.host);
    let mut owner_path = repo.owner_path.as_str();
    if let Some(prefix) = mapping.strip_prefix.as_deref().map(|p| p.trim_matches('/')) {
        if let Some(rest) = owner_path
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            owner_path = rest;
        }
    }
    match mapping.add_prefix.as_deref().map(|p| p.trim_matches('/')) {
        Some(prefix) if !prefix.is_empty() => {
            CanonicalRepoRef::new(host, &format!("{prefix}/{owner_path}"))
        }
        _ => CanonicalRepoRef::new(host, owner_path),
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
