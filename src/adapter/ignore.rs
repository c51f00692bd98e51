//! Ignored-error classification.

use regex::Regex;
use std::fmt;

use crate::error::{LoggingError, LoggingResult};

/// Action name prefixed onto errors demoted to the info sink.
pub const IGNORED_ERROR: &str = "IGNORED_ERROR";

/// A compiled pattern matching error messages that should not be reported
/// as errors.
///
/// Matching is an unanchored search: the pattern may match anywhere in the
/// message unless it anchors itself.
#[derive(Debug, Clone)]
pub struct IgnorePattern(Regex);

impl IgnorePattern {
    /// Compile an optional pattern.
    ///
    /// `None`, empty and whitespace-only input all mean "no filter".
    /// Invalid syntax is rejected here rather than at match time.
    pub fn parse(pattern: Option<&str>) -> LoggingResult<Option<IgnorePattern>> {
        let Some(pattern) = pattern.filter(|p| !p.trim().is_empty()) else {
            return Ok(None);
        };
        Regex::new(pattern)
            .map(|regex| Some(IgnorePattern(regex)))
            .map_err(|source| LoggingError::InvalidIgnorePattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn is_match(&self, message: &str) -> bool {
        self.0.is_match(message)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Regex> for IgnorePattern {
    fn from(regex: Regex) -> Self {
        IgnorePattern(regex)
    }
}

impl fmt::Display for IgnorePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
