//! Tabular view rows.
//!
//! # Invariants
//! - Rows come from the filtered view, not the closure-repaired set.
//! - Rows are sorted by code in locale-aware order.
//! - Absent weights render as empty text; present ones with one decimal.

use crate::model::record::Record;
use crate::view::collate::compare_codes;
use serde::Serialize;

/// Column headers in display order.
pub const TABLE_COLUMNS: [&str; 5] = ["code", "label", "level", "parent", "weight"];
/// Placeholder text for an empty view.
pub const TABLE_EMPTY_MESSAGE: &str = "No rows.";

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub code: String,
    pub label: String,
    pub level: String,
    pub parent: String,
    pub weight: String,
}

impl TableRow {
    /// Cells in `TABLE_COLUMNS` order.
    pub fn cells(&self) -> [&str; 5] {
        [
            self.code.as_str(),
            self.label.as_str(),
            self.level.as_str(),
            self.parent.as_str(),
            self.weight.as_str(),
        ]
    }
}

/// Builds sorted table rows from the filtered records.
pub fn table_rows(filtered: &[&Record]) -> Vec<TableRow> {
    let mut sorted = filtered.to_vec();
    sorted.sort_by(|a, b| compare_codes(&a.code, &b.code));
    sorted
        .into_iter()
        .map(|record| TableRow {
            code: record.code.clone(),
            label: record.label.clone(),
            level: record.level.clone(),
            parent: record.parent.clone(),
            weight: record
                .weight
                .map(|weight| format!("{weight:.1}"))
                .unwrap_or_default(),
        })
        .collect()
}
