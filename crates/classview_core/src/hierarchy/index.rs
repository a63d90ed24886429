//! Code lookup over one dataset snapshot.
//!
//! # Invariants
//! - Lookups resolve to positions into the borrowed record slice.
//! - On duplicate codes the later record shadows the earlier one.

use crate::model::record::Record;
use std::collections::HashMap;

/// Arena-style index: `code -> position` into the full dataset.
#[derive(Debug, Clone)]
pub struct HierarchyIndex<'a> {
    records: &'a [Record],
    by_code: HashMap<&'a str, usize>,
}

impl<'a> HierarchyIndex<'a> {
    /// Builds the index over the full dataset.
    pub fn build(records: &'a [Record]) -> Self {
        let by_code = records
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.code.as_str(), idx))
            .collect();
        Self { records, by_code }
    }

    /// Looks up a record by code.
    pub fn get(&self, code: &str) -> Option<&'a Record> {
        self.position(code).map(|idx| &self.records[idx])
    }

    /// Returns the arena position for a code.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.by_code.get(code).copied()
    }

    /// Returns whether `code` exists in the dataset.
    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
