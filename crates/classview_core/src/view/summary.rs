//! Headline figures for the filtered view.

use crate::model::record::Record;
use serde::Serialize;

/// Count and weight total of the filtered (pre-closure) records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ViewSummary {
    pub record_count: usize,
    /// Sum of present weights; absent weights contribute nothing.
    pub weight_sum: f64,
}

impl ViewSummary {
    pub fn from_records(filtered: &[&Record]) -> Self {
        Self {
            record_count: filtered.len(),
            weight_sum: filtered.iter().filter_map(|record| record.weight).sum(),
        }
    }

    /// Weight total as a percentage label, e.g. `"60.0 %"`.
    pub fn weight_sum_label(&self) -> String {
        format!("{:.1} %", self.weight_sum)
    }
}
