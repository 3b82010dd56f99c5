use std::path::Path;
use tracing::{debug, warn};
use super::{user_config_path, UserConfig, UserConfigError};
/// Load the user configuration.
///
/// An explicit `path` must exist. Without one, the default location from
/// [`user_config_path`] is used and a missing file yields `UserConfig::default()`.
///
/// # Errors
///
/// Returns [`UserConfigError`] if the file cannot be read or parsed.
pub fn load_user_config(path: Option<&Path>) -> Result<UserConfig, UserConfigError> {
    if let Some(path) = path {
        return read_user_config(path);
    }
    let Some(path) = user_config_path() else {
        warn!("Could not determine user config directory; using defaults");
        return Ok(UserConfig::default());
    };
    if !path.exists() {
        debug!("User config not found at {}; using defaults", path.display());
        return Ok(UserConfig::default());
    }
    read_user_config(&path)
}
/// Read and parse a config file at `path`.
pub fn read_user_config(path: &Path) -> Result<UserConfig, UserConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: UserConfig = toml::from_str(&content)?;
    config.validate()?;
    debug!(
        hosts = config.hosts.len(),
        "Loaded user config from {}",
        path.display()
    );
    Ok(config)
}
