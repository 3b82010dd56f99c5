//! Command-line link targets: `path`, `path:LINE` or `path:START-END`.

use std::str::FromStr;
use thiserror::Error;

use crate::source_control::ViewCoordinates;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("Empty link target")]
    Empty,

    #[error("Line numbers start at 1: '{0}'")]
    ZeroLine(String),

    #[error("Line range '{0}' ends before it starts")]
    ReversedRange(String),
}

/// A file, optionally narrowed to a line or an inclusive line range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub path: String,
    pub line: Option<u32>,
    pub end_line: Option<u32>,
}

impl LinkTarget {
    /// View coordinates for this target at `commit_id`, with `path` already
    /// made repository-relative.
    #[must_use]
    pub fn coordinates(&self, commit_id: String, path: String) -> ViewCoordinates {
        ViewCoordinates {
            commit_id,
            path: Some(path),
            line: self.line,
            end_line: self.end_line,
        }
    }
}

impl FromStr for LinkTarget {
    type Err = TargetError;

    /// The text after the last `:` is a line spec only if it is all digits,
    /// optionally with one `-`; otherwise the whole string is the path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TargetError::Empty);
        }
        let spec = s
            .rsplit_once(':')
            .filter(|(path, _)| !path.is_empty())
            .and_then(|(path, spec)| parse_line_spec(spec).map(|lines| (path, spec, lines)));
        let Some((path, spec, (line, end_line))) = spec else {
            return Ok(Self {
                path: s.to_string(),
                line: None,
                end_line: None,
            });
        };
        if line == 0 {
            return Err(TargetError::ZeroLine(spec.to_string()));
        }
        match end_line {
            Some(end) if end < line => Err(TargetError::ReversedRange(spec.to_string())),
            _ => Ok(Self {
                path: path.to_string(),
                line: Some(line),
                end_line: end_line.filter(|&end| end != line),
            }),
        }
    }
}

fn parse_line_spec(spec: &str) -> Option<(u32, Option<u32>)> {
    match spec.split_once('-') {
        Some((start, end)) => Some((parse_number(start)?, Some(parse_number(end)?))),
        None => Some((parse_number(spec)?, None)),
    }
}

fn parse_number(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
