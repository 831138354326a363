//! Count report type.

use std::collections::BTreeMap;
use std::ops::AddAssign;

use serde::Serialize;

/// Secrets and values found under one root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    /// Number of leaf secrets.
    pub secrets_count: usize,
    /// Sum of the number of keys in every leaf document.
    pub values_count: usize,
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        self.secrets_count += rhs.secrets_count;
        self.values_count += rhs.values_count;
    }
}

/// Per-root breakdown plus grand totals.
///
/// Serializes as `{"paths": {root: counts}, "total": counts}`.
#[derive(Debug, Default, Serialize)]
pub struct CountReport {
    paths: BTreeMap<String, Counts>,
    total: Counts,
}

impl CountReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the counts for a root. Recording the same root twice keeps
    /// only the latest counts in both the breakdown and the totals.
    pub fn record(&mut self, root: impl Into<String>, counts: Counts) {
        if let Some(previous) = self.paths.insert(root.into(), counts) {
            self.total.secrets_count -= previous.secrets_count;
            self.total.values_count -= previous.values_count;
        }
        self.total += counts;
    }

    /// Counts for one root.
    pub fn get(&self, root: &str) -> Option<Counts> {
        self.paths.get(root).copied()
    }

    /// Per-root entries, sorted by root.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Counts)> {
        self.paths.iter().map(|(root, counts)| (root.as_str(), *counts))
    }

    /// Totals across every recorded root.
    pub fn total(&self) -> Counts {
        self.total
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
