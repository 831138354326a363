//! Secret path model.
//!
//! A [`SecretPath`] is a `/`-delimited sequence of non-empty segments.
//! Comparisons are segment-wise, so `a/b` is a prefix of `a/b/c` but not
//! of `a/bc`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::PathError;

/// Canonical, immutable secret path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SecretPath {
    segments: Vec<String>,
}

impl SecretPath {
    /// Parse a path, trimming leading and trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns `PathError::Empty` for an empty path and
    /// `PathError::EmptySegment` for paths like `a//b`.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            return Err(PathError::Empty);
        }

        let segments: Vec<String> = trimmed.split('/').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(PathError::EmptySegment(raw.to_string()));
        }

        Ok(Self { segments })
    }

    /// Path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Append one listing entry.
    ///
    /// Store listings mark intermediate nodes with a trailing `/`, which is
    /// stripped here. An entry may itself contain slashes.
    ///
    /// # Errors
    ///
    /// Returns `PathError` if the entry is empty after trimming.
    pub fn child(&self, entry: &str) -> Result<Self, PathError> {
        let tail = Self::parse(entry)?;
        let mut segments = self.segments.clone();
        segments.extend(tail.segments);
        Ok(Self { segments })
    }

    /// Whether `prefix` equals this path or is one of its ancestors.
    pub fn starts_with(&self, prefix: &SecretPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Segments remaining after removing `prefix`, if it is a prefix.
    pub fn strip_prefix(&self, prefix: &SecretPath) -> Option<&[String]> {
        self.segments.strip_prefix(prefix.segments.as_slice())
    }

    /// Move this path from under `from` to under `to`, keeping the suffix.
    ///
    /// `a/b/c` rebased from `a` to `x/y` is `x/y/b/c`.
    ///
    /// # Errors
    ///
    /// Returns `PathError::OutsideRoot` if `from` is not a prefix of `self`.
    pub fn rebase(&self, from: &SecretPath, to: &SecretPath) -> Result<Self, PathError> {
        let suffix = self
            .strip_prefix(from)
            .ok_or_else(|| PathError::OutsideRoot {
                path: self.to_string(),
                root: from.to_string(),
            })?;

        let mut segments = to.segments.clone();
        segments.extend_from_slice(suffix);
        Ok(Self { segments })
    }
}

impl fmt::Display for SecretPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl FromStr for SecretPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SecretPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
