//! Category to presentation lookup.
//!
//! The registry is built from the literal table in [`data`](crate::data) and
//! is immutable afterwards. [`PresentationRegistry::global`] builds it once
//! per process; because nothing can mutate it, concurrent readers need no
//! synchronization.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::data::ALERT_PRESENTATIONS;
use crate::record::PresentationRecord;

static GLOBAL_REGISTRY: Lazy<PresentationRegistry> = Lazy::new(PresentationRegistry::build);

/// Maps alert categories to their presentation.
///
/// # Example
///
/// ```rust
/// use richwx_styles::PresentationRegistry;
///
/// let registry = PresentationRegistry::build();
/// let tornado = registry.lookup("Tornado Warning").unwrap();
/// assert_eq!(tornado.color, "red");
///
/// // Lookups are exact: no trimming, no case folding.
/// assert!(registry.lookup("tornado warning").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationRegistry {
    records: HashMap<&'static str, PresentationRecord<'static>>,
}

impl PresentationRegistry {
    /// Builds the registry from the built-in table.
    ///
    /// Every call returns a value-equal registry.
    pub fn build() -> Self {
        Self::from_records(ALERT_PRESENTATIONS.iter().copied())
    }

    /// Builds a registry from arbitrary records.
    ///
    /// A later record replaces an earlier one with the same category.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PresentationRecord<'static>>,
    {
        let records = records
            .into_iter()
            .map(|record| (record.category, record))
            .collect();
        Self { records }
    }

    /// The process-wide registry.
    pub fn global() -> &'static PresentationRegistry {
        &GLOBAL_REGISTRY
    }

    /// Looks up a category by exact string match.
    pub fn lookup(&self, category: &str) -> Option<&PresentationRecord<'static>> {
        self.records.get(category)
    }

    /// Returns true if the category is registered.
    pub fn contains(&self, category: &str) -> bool {
        self.records.contains_key(category)
    }

    /// Number of registered categories.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all records, sorted by category.
    pub fn iter(&self) -> impl Iterator<Item = &PresentationRecord<'static>> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by_key(|record| record.category);
        records.into_iter()
    }

    /// Registered category names, sorted.
    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(|record| record.category)
    }
}

impl Default for PresentationRegistry {
    fn default() -> Self {
        Self::build()
    }
}
