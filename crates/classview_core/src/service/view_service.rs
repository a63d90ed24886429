//! One recomputation pass per user action.
//!
//! # Responsibility
//! - Run filter, closure and projection for an explicit `ViewRequest`.
//! - Produce chart, table, summary and export payloads.
//!
//! # Invariants
//! - Every function is pure over `(records, request)`.
//! - Export, table and summary reflect the filtered list; the chart reflects
//!   the closure-repaired set.

use crate::codec::csv::encode_records;
use crate::hierarchy::closure::close;
use crate::hierarchy::index::HierarchyIndex;
use crate::model::record::Record;
use crate::search::filter::{filter_records, ALL_ROOTS};
use crate::view::chart::{project, ChartKind, ChartTrace, DepthLimit, ViewProjection};
use crate::view::summary::ViewSummary;
use crate::view::table::{table_rows, TableRow};
use log::debug;

/// UI control state, translated by the adapter layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequest {
    /// Subtree root code, or `ALL_ROOTS`.
    pub root_code: String,
    /// Free-text query, trimmed before use.
    pub search_text: String,
    pub chart_kind: ChartKind,
    pub depth_limit: DepthLimit,
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self {
            root_code: ALL_ROOTS.to_string(),
            search_text: String::new(),
            chart_kind: ChartKind::default(),
            depth_limit: DepthLimit::default(),
        }
    }
}

impl ViewRequest {
    /// Request restricted to one subtree.
    pub fn for_root(root_code: impl Into<String>) -> Self {
        Self {
            root_code: root_code.into(),
            ..Self::default()
        }
    }

    /// Request filtered by search text over all roots.
    pub fn for_search(search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            ..Self::default()
        }
    }
}

/// Everything a renderer needs for one view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOutput {
    pub chart: ChartTrace,
    pub table: Vec<TableRow>,
    pub summary: ViewSummary,
}

/// Filtered (pre-closure) records for `request`.
pub fn filtered_view<'a>(records: &'a [Record], request: &ViewRequest) -> Vec<&'a Record> {
    filter_records(records, &request.root_code, &request.search_text)
}

/// Closure-repaired records for `request`.
pub fn closed_view<'a>(records: &'a [Record], request: &ViewRequest) -> Vec<&'a Record> {
    let filtered = filtered_view(records, request);
    let index = HierarchyIndex::build(records);
    close(&index, &filtered)
}

/// Chart sequences for `request`.
pub fn chart_projection(records: &[Record], request: &ViewRequest) -> ViewProjection {
    project(&closed_view(records, request))
}

/// Full render pass: filter -> closure -> projection, plus table and summary.
pub fn render_view(records: &[Record], request: &ViewRequest) -> ViewOutput {
    let filtered = filtered_view(records, request);
    let index = HierarchyIndex::build(records);
    let closed = close(&index, &filtered);
    let projection = project(&closed);

    debug!(
        "event=view_rendered module=service filtered={} closed={} has_weight={} kind={} depth={}",
        filtered.len(),
        closed.len(),
        projection.has_weight,
        request.chart_kind,
        request.depth_limit
    );

    ViewOutput {
        chart: ChartTrace::new(request.chart_kind, request.depth_limit, projection),
        table: table_rows(&filtered),
        summary: ViewSummary::from_records(&filtered),
    }
}

/// CSV export of the filtered view.
pub fn export_view(records: &[Record], request: &ViewRequest) -> String {
    encode_records(filtered_view(records, request))
}
