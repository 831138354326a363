//! Duplicate value group.

use std::collections::BTreeSet;

use serde::Serialize;

/// Locators (`path:key`) that all hold the same value.
///
/// Only groups with two or more members are ever reported.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DuplicateGroup {
    locators: BTreeSet<String>,
}

impl DuplicateGroup {
    /// Build a group, or `None` if fewer than two locators are given.
    pub fn new(locators: impl IntoIterator<Item = String>) -> Option<Self> {
        let locators: BTreeSet<String> = locators.into_iter().collect();
        (locators.len() > 1).then_some(Self { locators })
    }

    /// Format a locator for one key of one secret.
    pub fn locator(path: &impl std::fmt::Display, key: &str) -> String {
        format!("{}:{}", path, key)
    }

    pub fn locators(&self) -> &BTreeSet<String> {
        &self.locators
    }

    pub fn contains(&self, locator: &str) -> bool {
        self.locators.contains(locator)
    }

    pub fn len(&self) -> usize {
        self.locators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }
}
