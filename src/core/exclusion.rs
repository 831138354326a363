//! Exclusion prefixes for traversal.

use crate::core::path::SecretPath;
use crate::error::PathError;

/// A set of path prefixes to skip while listing.
///
/// A path is excluded when it equals, or is nested under, any prefix.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    prefixes: Vec<SecretPath>,
}

impl ExclusionSet {
    /// An empty set that excludes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build from already-parsed prefixes.
    pub fn new(prefixes: impl IntoIterator<Item = SecretPath>) -> Self {
        let mut prefixes: Vec<SecretPath> = prefixes.into_iter().collect();
        prefixes.sort();
        prefixes.dedup();
        Self { prefixes }
    }

    /// Parse raw prefix strings.
    ///
    /// # Errors
    ///
    /// Returns `PathError` for the first malformed prefix.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, PathError> {
        let prefixes = raw
            .iter()
            .map(|s| SecretPath::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(prefixes))
    }

    /// Whether `path` falls under any excluded prefix.
    pub fn covers(&self, path: &SecretPath) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }
}
