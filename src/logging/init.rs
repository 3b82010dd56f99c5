use color_eyre::eyre::Result;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};
use super::{LogConfig, LOG_FILENAME};
/// Build the event filter: `RUST_LOG` if set, else `git_weblink=<level>`.
pub(super) fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("git_weblink={level}")))
}
/// Initialize the logging system with the given configuration.
///
/// Events go to stderr so stdout only ever carries the generated link, plus
/// a rolling file under `log_dir` when one is configured.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let file_appender = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(RollingFileAppender::new(config.rotation, dir, LOG_FILENAME))
        }
        None => None,
    };
    if config.json_format {
        let json_file_layer = file_appender.map(|appender| {
            fmt::layer()
                .json().with_writer(appender).with_span_events(FmtSpan::CLOSE)
                .with_current_span(true).with_target(true)
                .with_filter(env_filter(config.log_level))
        });
        let json_stderr_layer = fmt::layer()
            .json().with_writer(std::io::stderr).with_span_events(FmtSpan::CLOSE)
            .with_current_span(true).with_target(true)
            .with_filter(env_filter(config.log_level));
        tracing_subscriber::registry()
            .with(json_file_layer).with(json_stderr_layer).with(ErrorLayer::default()).try_init()?;
    } else {
        let file_layer = file_appender.map(|appender| {
            fmt::layer()
                .with_writer(appender).with_span_events(FmtSpan::CLOSE)
                .with_target(true).with_ansi(false)
                .with_filter(env_filter(config.log_level))
        });
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr).with_span_events(FmtSpan::CLOSE)
            .with_target(false).with_filter(env_filter(config.log_level));
        tracing_subscriber::registry()
            .with(file_layer).with(stderr_layer).with(ErrorLayer::default()).try_init()?;
    }
    Ok(())
}
/// Parse rotation period from string.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    }
}
