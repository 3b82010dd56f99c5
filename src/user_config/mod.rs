//! User configuration: host mappings for self-hosted and mirrored forges.

mod loader;
pub use loader::{load_user_config, read_user_config};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::source_control::HostKind;

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("web_host for '{host}' must be a bare host name, got '{web_host}'")]
    InvalidWebHost { host: String, web_host: String },
}

fn default_fallback() -> bool {
    true
}

/// A `[[hosts]]` entry: which grammar a host speaks, and how to rewrite its
/// clone coordinates into web coordinates.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HostMapping {
    /// Host pattern, matched exactly or as a parent domain
    pub host: String,
    pub kind: HostKind,
    /// Web frontend host, when it differs from the clone host
    #[serde(default)]
    pub web_host: Option<String>,
    /// Leading path segments present in clone URLs but not in web URLs
    #[serde(default)]
    pub strip_prefix: Option<String>,
    /// Leading path segments present in web URLs but not in clone URLs
    #[serde(default)]
    pub add_prefix: Option<String>,
}

/// Top-level user configuration, deserialized from `config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    /// Render unmatched hosts GitHub-style instead of failing
    #[serde(default = "default_fallback")]
    pub fallback: bool,
    #[serde(default)]
    pub hosts: Vec<HostMapping>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
            hosts: Vec::new(),
        }
    }
}

impl UserConfig {
    /// Check that every `web_host` is a bare host, without scheme or path.
    pub fn validate(&self) -> Result<(), UserConfigError> {
        for mapping in &self.hosts {
            let Some(web_host) = mapping.web_host.as_deref() else {
                continue;
            };
            if web_host.is_empty() || web_host.contains(['/', '@']) {
                return Err(UserConfigError::InvalidWebHost {
                    host: mapping.host.clone(),
                    web_host: web_host.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Resolve the default path for the user config file.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("git-weblink").join("config.toml"))
}

#[cfg(test)]
#[path = "../user_config_tests.rs"]
mod user_config_tests;
