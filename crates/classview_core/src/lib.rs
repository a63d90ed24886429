//! Core logic for the classview hierarchical classification viewer.
//! This crate owns every invariant of filtering, ancestor repair and
//! chart projection; front-ends only translate control state and payloads.

pub mod codec;
pub mod config;
pub mod hierarchy;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod source;
pub mod view;

pub use codec::csv::{decode_records, encode_records, parse_weight, CsvDecodeError};
pub use config::{ConfigError, ViewerConfig};
pub use hierarchy::closure::close;
pub use hierarchy::index::HierarchyIndex;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::record::{Record, RecordValidationError, CODE_SEPARATOR};
pub use search::filter::{filter_records, is_all_roots, root_options, ALL_ROOTS};
pub use service::dataset_store::{DatasetStore, LoadOutcome, LoadTicket};
pub use service::debounce::Debouncer;
pub use service::view_service::{
    chart_projection, closed_view, export_view, filtered_view, render_view, ViewOutput,
    ViewRequest,
};
pub use source::dataset_source::{DatasetSource, FileSource, LoadError, LoadResult, TextSource};
pub use view::chart::{
    display_label, project, ChartKind, ChartTrace, DepthLimit, ParseChartKindError,
    ParseDepthLimitError, ViewProjection,
};
pub use view::collate::compare_codes;
pub use view::summary::ViewSummary;
pub use view::table::{table_rows, TableRow, TABLE_COLUMNS, TABLE_EMPTY_MESSAGE};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
