// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used)
)]

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use git_weblink::logging::{init_logging, parse_rotation, LogConfig};
use git_weblink::{
    git, load_user_config, normalize, HostKind, HostRegistry, LinkTarget, ViewCoordinates,
    WeblinkError,
};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn, Level};

const DEFAULT_REMOTE: &str = "origin";

/// Print the web URL of a commit, file, line or line range of a git repository
#[derive(Parser, Debug)]
#[command(name = "git-weblink", author, version, about, long_about = None)]
struct Args {
    /// File to link to, optionally with a line (`path:12`) or range (`path:12-20`).
    /// Without a target the commit itself is linked.
    target: Option<LinkTarget>,

    /// Remote whose URL identifies the hosting platform
    #[arg(short, long, env = "GIT_WEBLINK_REMOTE", default_value = DEFAULT_REMOTE)]
    remote: String,

    /// Revision to link to
    #[arg(short, long, default_value = "HEAD")]
    commit: String,

    /// Use this remote URL instead of asking git for one
    #[arg(long)]
    url: Option<String>,

    /// Repository directory; relative targets are resolved against it
    #[arg(short = 'C', long = "repo", default_value = ".")]
    repo_dir: PathBuf,

    /// Print a JSON object instead of the bare URL
    #[arg(long)]
    json: bool,

    /// Config file with host mappings (default: <config dir>/git-weblink/config.toml)
    #[arg(long, env = "GIT_WEBLINK_CONFIG")]
    config: Option<PathBuf>,

    /// Enable JSON log format
    #[arg(long, env = "GIT_WEBLINK_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "GIT_WEBLINK_LOG_LEVEL", default_value = "warn")]
    log_level: Level,

    /// Also write logs to this directory
    #[arg(long, env = "GIT_WEBLINK_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log file rotation period: daily, hourly, or never
    #[arg(long, env = "GIT_WEBLINK_LOG_ROTATION", default_value = "never")]
    log_rotation: String,
}

#[derive(Debug, Serialize)]
struct LinkOutput {
    url: String,
    host_kind: HostKind,
    repo_url: String,
    commit: String,
}

fn coordinates(args: &Args, commit_id: String) -> Result<ViewCoordinates> {
    let Some(target) = &args.target else {
        return Ok(ViewCoordinates::commit(commit_id));
    };
    let path = git::resolve_repo_path(&args.repo_dir, &target.path)
        .wrap_err_with(|| format!("Failed to resolve path '{}'", target.path))?;
    Ok(target.coordinates(commit_id, path))
}

fn build_link(args: &Args) -> Result<LinkOutput> {
    let config = load_user_config(args.config.as_deref()).wrap_err("Failed to load user config")?;
    let registry = HostRegistry::from_config(&config);

    let remote = match &args.url {
        Some(url) => url.clone(),
        None => git::remote_url(&args.repo_dir, &args.remote)?,
    };
    let resolved = registry.resolve(&normalize(&remote)?)?;
    debug!(kind = %resolved.kind, repo = %resolved.repo, "Resolved repository");

    let commit_id = git::resolve_commit(&args.repo_dir, &args.commit)?;
    let coords = coordinates(args, commit_id)?;

    let url = match resolved.render(&coords) {
        Err(WeblinkError::UnsupportedLinkKind { kind, host }) => {
            warn!("{kind} links are not supported on {host} hosts; linking to the file instead");
            resolved.render(&coords.without_lines())?
        }
        other => other?,
    };

    Ok(LinkOutput {
        url,
        host_kind: resolved.kind,
        repo_url: resolved.repo.to_string(),
        commit: coords.commit_id,
    })
}

fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    let args = Args::parse();

    init_logging(LogConfig {
        log_dir: args.log_dir.clone(),
        log_level: args.log_level,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
    })?;

    let link = build_link(&args)?;

    let mut stdout = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &link)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", link.url)?;
    }
    Ok(())
}
