//! Host-specific URL builders for commit, file, line and range views.

use std::fmt;

use super::detection::HostKind;
use super::WeblinkError;

/// The four views a link can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Commit,
    File,
    Line,
    Range,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Commit => "commit",
            Self::File => "file",
            Self::Line => "line",
            Self::Range => "range",
        })
    }
}

/// What to show: a commit, optionally narrowed to a file, line or line range.
///
/// `end_line` only means something together with `line`, and callers are
/// expected to keep `end_line >= line`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCoordinates {
    pub commit_id: String,
    pub path: Option<String>,
    pub line: Option<u32>,
    pub end_line: Option<u32>,
}

impl ViewCoordinates {
    #[must_use]
    pub fn commit(commit_id: impl Into<String>) -> Self {
        Self {
            commit_id: commit_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self.end_line = None;
        self
    }

    #[must_use]
    pub fn with_range(mut self, start_line: u32, end_line: u32) -> Self {
        self.line = Some(start_line);
        self.end_line = Some(end_line);
        self
    }

    /// Same commit and path, no line anchor.
    #[must_use]
    pub fn without_lines(&self) -> Self {
        Self {
            commit_id: self.commit_id.clone(),
            path: self.path.clone(),
            line: None,
            end_line: None,
        }
    }

    /// The view these coordinates select. A range ending on its first line is a line.
    #[must_use]
    pub fn link_kind(&self) -> LinkKind {
        if file_path(self.path.as_deref()).is_none() {
            return LinkKind::Commit;
        }
        match (self.line, self.end_line) {
            (None, _) => LinkKind::File,
            (Some(start), Some(end)) if end != start => LinkKind::Range,
            (Some(_), _) => LinkKind::Line,
        }
    }
}

/// Render the link selected by `coords` using the grammar of `kind`.
pub fn render(
    kind: HostKind,
    base_url: &str,
    owner_path: &str,
    coords: &ViewCoordinates,
) -> Result<String, WeblinkError> {
    let commit_id = coords.commit_id.as_str();
    let path = coords.path.as_deref();
    match (coords.link_kind(), coords.line, coords.end_line) {
        (LinkKind::Range, Some(start), Some(end)) => {
            range_link(kind, base_url, owner_path, commit_id, path, start, end)
        }
        (LinkKind::Line | LinkKind::Range, Some(line), _) => {
            line_link(kind, base_url, owner_path, commit_id, path, line)
        }
        _ => Ok(file_link(kind, base_url, owner_path, commit_id, path)),
    }
}

#[must_use]
pub fn commit_link(kind: HostKind, base_url: &str, owner_path: &str, commit_id: &str) -> String {
    let root = repo_root(base_url, owner_path);
    match kind {
        // GitHub and Forgejo share the commit layout; they differ on file views
        HostKind::GitHub | HostKind::Forgejo => format!("{root}/commit/{commit_id}"),
        HostKind::GitLab => format!("{root}/-/commit/{commit_id}"),
        HostKind::Cgit => format!("{root}.git/commit/?id={commit_id}"),
        HostKind::Gerrit => format!("{root}/+/{commit_id}"),
    }
}

/// Link to `path` at `commit_id`; without a path this is the commit link.
#[must_use]
pub fn file_link(
    kind: HostKind,
    base_url: &str,
    owner_path: &str,
    commit_id: &str,
    path: Option<&str>,
) -> String {
    let Some(path) = file_path(path) else {
        return commit_link(kind, base_url, owner_path, commit_id);
    };
    let root = repo_root(base_url, owner_path);
    match kind {
        HostKind::GitHub => format!("{root}/blob/{commit_id}/{path}"),
        HostKind::GitLab => format!("{root}/-/blob/{commit_id}/{path}"),
        HostKind::Cgit => format!("{root}.git/tree/{path}?id={commit_id}"),
        HostKind::Forgejo => format!("{root}/src/commit/{commit_id}/{path}"),
        HostKind::Gerrit => format!("{root}/+/{commit_id}/{path}"),
    }
}

pub fn line_link(
    kind: HostKind,
    base_url: &str,
    owner_path: &str,
    commit_id: &str,
    path: Option<&str>,
    line: u32,
) -> Result<String, WeblinkError> {
    let file = file_link(kind, base_url, owner_path, commit_id, path);
    if file_path(path).is_none() {
        return Ok(file);
    }
    let anchor = match kind {
        HostKind::GitHub | HostKind::GitLab | HostKind::Forgejo => format!("#L{line}"),
        HostKind::Cgit => format!("#n{line}"),
        HostKind::Gerrit => return Err(unsupported(LinkKind::Line, kind)),
    };
    Ok(format!("{file}{anchor}"))
}

/// cgit has no range anchor, so its ranges point at the first line.
pub fn range_link(
    kind: HostKind,
    base_url: &str,
    owner_path: &str,
    commit_id: &str,
    path: Option<&str>,
    start_line: u32,
    end_line: u32,
) -> Result<String, WeblinkError> {
    let file = file_link(kind, base_url, owner_path, commit_id, path);
    if file_path(path).is_none() {
        return Ok(file);
    }
    let anchor = match kind {
        HostKind::GitHub | HostKind::GitLab | HostKind::Forgejo => {
            format!("#L{start_line}-L{end_line}")
        }
        HostKind::Cgit => format!("#n{start_line}"),
        HostKind::Gerrit => return Err(unsupported(LinkKind::Range, kind)),
    };
    Ok(format!("{file}{anchor}"))
}

fn unsupported(kind: LinkKind, host: HostKind) -> WeblinkError {
    WeblinkError::UnsupportedLinkKind { kind, host }
}

fn repo_root(base_url: &str, owner_path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        owner_path.trim_matches('/')
    )
}

fn file_path(path: Option<&str>) -> Option<&str> {
    path.map(|p| p.trim_start_matches('/')).filter(|p| !p.is_empty())
}

#[cfg(test)]
#[path = "platforms_tests.rs"]
mod tests;
