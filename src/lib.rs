// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]
//! Web links for git repositories.
//!
//! Normalizes git remotes (`git@host:owner/repo.git`, `ssh://`, `git://`,
//! `https://`) to a canonical `https://host/owner/repo` form and renders
//! commit, file, line and range links in the URL grammar of the hosting
//! software: GitHub, GitLab, cgit, Forgejo and Gerrit.
//!
//! ```
//! use git_weblink::{get_line_link, get_repo_url};
//!
//! assert_eq!(
//!     get_repo_url("git@codeberg.org:forgejo/forgejo.git").unwrap(),
//!     "https://codeberg.org/forgejo/forgejo"
//! );
//! assert_eq!(
//!     get_line_link(
//!         "https://codeberg.org",
//!         "forgejo/forgejo",
//!         "d996dfb",
//!         ".editorconfig",
//!         27
//!     )
//!     .unwrap(),
//!     "https://codeberg.org/forgejo/forgejo/src/commit/d996dfb/.editorconfig#L27"
//! );
//! ```

pub mod git;
pub mod logging;
pub mod source_control;
pub mod target;
pub mod user_config;

// Re-export commonly used types
pub use source_control::{
    get_commit_link, get_file_link, get_line_link, get_range_link, get_repo_url, normalize,
    CanonicalRepoRef, HostKind, HostProfile, HostRegistry, LinkKind, ResolvedRepo,
    ViewCoordinates, WeblinkError, HOST_PROFILES,
};
pub use target::{LinkTarget, TargetError};
pub use user_config::{load_user_config, HostMapping, UserConfig, UserConfigError};
