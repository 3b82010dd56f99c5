use super::*;

#[test]
fn test_log_config_default() {
    let config = LogConfig::default();
    assert_eq!(config.log_level, Level::WARN);
    assert!(!config.json_format);
    assert!(config.log_dir.is_none());
}

#[test]
fn test_parse_rotation_hourly() {
    assert_eq!(parse_rotation("hourly"), Rotation::HOURLY);
}

#[test]
fn test_parse_rotation_daily_case_insensitive() {
    assert_eq!(parse_rotation("DAILY"), Rotation::DAILY);
}

#[test]
fn test_parse_rotation_unknown_defaults_to_never() {
    assert_eq!(parse_rotation("weekly"), Rotation::NEVER);
}

#[test]
fn test_env_filter_builds_for_every_level() {
    for level in [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE] {
        let filter = init::env_filter(level);
        assert!(!filter.to_string().is_empty());
    }
}

#[test]
fn test_log_filename_constant() {
    assert_eq!(LOG_FILENAME, "git-weblink.log");
}
