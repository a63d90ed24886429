//! FFI use-case API for the Flutter viewer shell.
//!
//! # Responsibility
//! - Translate control state (strings from widgets) into `ViewRequest`.
//! - Hold the session dataset and flatten core payloads into envelopes.
//! - Collapse bursts of control changes into one recomputation.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - A failed load leaves the session dataset unchanged.
//! - Chart payloads are JSON strings ready for the chart widget.

use classview_core::{
    core_version as core_version_inner, export_view, init_logging as init_logging_inner,
    ping as ping_inner, render_view as render_view_inner, root_options as root_options_inner,
    ChartKind, ConfigError, DatasetSource, DatasetStore, Debouncer, DepthLimit, FileSource,
    LoadOutcome, TextSource, ViewRequest, ViewerConfig, TABLE_EMPTY_MESSAGE,
};
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::Instant;

static SESSION: OnceLock<Mutex<DatasetStore>> = OnceLock::new();
static PENDING_VIEW: OnceLock<Mutex<Debouncer<ViewRequest>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Result envelope for dataset (re)loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResponse {
    pub ok: bool,
    /// Records in the session dataset after the call.
    pub rows: u32,
    /// Root selector options, sentinel first.
    pub root_options: Vec<String>,
    pub message: String,
}

/// One table row, cells in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRowItem {
    pub code: String,
    pub label: String,
    pub level: String,
    pub parent: String,
    pub weight: String,
}

/// Render envelope for one view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewResponse {
    pub ok: bool,
    /// Serialized chart trace; empty on failure.
    pub chart_json: String,
    pub table: Vec<TableRowItem>,
    /// Placeholder shown instead of an empty table.
    pub table_message: String,
    pub record_count: u32,
    pub weight_sum_label: String,
    pub message: String,
}

impl ViewResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            chart_json: String::new(),
            table: Vec::new(),
            table_message: String::new(),
            record_count: 0,
            weight_sum_label: String::new(),
            message: message.into(),
        }
    }
}

/// Export envelope for the filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResponse {
    pub file_name: String,
    /// Always-quoted CSV; empty when the view is empty.
    pub csv: String,
}

/// Loads CSV content already read by the UI (user-picked file).
#[flutter_rust_bridge::frb(sync)]
pub fn load_dataset_text(name: String, text: String) -> LoadResponse {
    load_into_session(&TextSource::new(name, text))
}

/// Loads a CSV file from disk; blank path uses the configured default.
#[flutter_rust_bridge::frb(sync)]
pub fn load_dataset_file(path: String) -> LoadResponse {
    let trimmed = path.trim();
    let source = if trimmed.is_empty() {
        FileSource::new(viewer_config().csv_path)
    } else {
        FileSource::new(trimmed)
    };
    load_into_session(&source)
}

/// Root selector options for the current dataset.
#[flutter_rust_bridge::frb(sync)]
pub fn root_options() -> Vec<String> {
    root_options_inner(session().records())
}

/// Renders chart, table and summary for the given control state.
///
/// `chart_kind` is `sunburst|treemap`; `depth_limit` is `auto` or a positive
/// integer.
#[flutter_rust_bridge::frb(sync)]
pub fn render_view(
    root_code: String,
    search_text: String,
    chart_kind: String,
    depth_limit: String,
) -> ViewResponse {
    match build_request(root_code, search_text, &chart_kind, &depth_limit) {
        Ok(request) => render_request(&request),
        Err(message) => ViewResponse::failure(format!("render_view failed: {message}")),
    }
}

/// Quiet window between the last `submit_view` and a released render.
#[flutter_rust_bridge::frb(sync)]
pub fn view_debounce_ms() -> u64 {
    u64::try_from(pending_view().window().as_millis()).unwrap_or(u64::MAX)
}

/// Queues a recomputation for the given control state, replacing any pending one.
///
/// Returns empty string on success and error message on invalid controls;
/// invalid controls leave the pending state untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn submit_view(
    root_code: String,
    search_text: String,
    chart_kind: String,
    depth_limit: String,
) -> String {
    submit_view_at(root_code, search_text, &chart_kind, &depth_limit, Instant::now())
}

/// Renders the latest submitted state once its quiet window has elapsed.
#[flutter_rust_bridge::frb(sync)]
pub fn poll_view() -> Option<ViewResponse> {
    poll_view_at(Instant::now())
}

/// Renders the pending state immediately, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn flush_view() -> Option<ViewResponse> {
    let request = pending_view().flush()?;
    Some(render_request(&request))
}

fn submit_view_at(
    root_code: String,
    search_text: String,
    chart_kind: &str,
    depth_limit: &str,
    now: Instant,
) -> String {
    match build_request(root_code, search_text, chart_kind, depth_limit) {
        Ok(request) => {
            pending_view().submit(request, now);
            String::new()
        }
        Err(message) => format!("submit_view failed: {message}"),
    }
}

fn poll_view_at(now: Instant) -> Option<ViewResponse> {
    // Release the debouncer before rendering takes the session lock.
    let request = pending_view().poll(now)?;
    Some(render_request(&request))
}

fn render_request(request: &ViewRequest) -> ViewResponse {
    let output = render_view_inner(session().records(), request);
    let chart_json = match serde_json::to_string(&output.chart) {
        Ok(json) => json,
        Err(err) => return ViewResponse::failure(format!("render_view failed: {err}")),
    };

    let table_message = if output.table.is_empty() {
        TABLE_EMPTY_MESSAGE.to_string()
    } else {
        String::new()
    };
    ViewResponse {
        ok: true,
        chart_json,
        table: output
            .table
            .into_iter()
            .map(|row| TableRowItem {
                code: row.code,
                label: row.label,
                level: row.level,
                parent: row.parent,
                weight: row.weight,
            })
            .collect(),
        table_message,
        record_count: clamp_count(output.summary.record_count),
        weight_sum_label: output.summary.weight_sum_label(),
        message: format!("{} record(s) in view.", output.summary.record_count),
    }
}

/// Exports the filtered (pre-closure) view as CSV text.
#[flutter_rust_bridge::frb(sync)]
pub fn export_filtered_csv(root_code: String, search_text: String) -> ExportResponse {
    let request = ViewRequest {
        root_code,
        search_text,
        ..ViewRequest::default()
    };
    ExportResponse {
        file_name: viewer_config().export_file_name,
        csv: export_view(session().records(), &request),
    }
}

fn build_request(
    root_code: String,
    search_text: String,
    chart_kind: &str,
    depth_limit: &str,
) -> Result<ViewRequest, String> {
    let chart_kind = chart_kind
        .parse::<ChartKind>()
        .map_err(|err| err.to_string())?;
    let depth_limit = depth_limit
        .parse::<DepthLimit>()
        .map_err(|err| err.to_string())?;
    Ok(ViewRequest {
        root_code,
        search_text,
        chart_kind,
        depth_limit,
    })
}

fn load_into_session(source: &dyn DatasetSource) -> LoadResponse {
    let ticket = session().begin_load();
    // Decode outside the lock; only the swap holds it.
    let loaded = source.load_records();

    let mut store = session();
    let (ok, message) = match loaded {
        Ok(records) => match store.finish_load(ticket, records) {
            LoadOutcome::Applied { rows } => (true, format!("Loaded {rows} record(s).")),
            LoadOutcome::Stale { .. } => {
                (false, "load superseded by a newer request".to_string())
            }
        },
        Err(err) => {
            log::error!(
                "event=dataset_load module=ffi status=error source={} error={}",
                source.describe(),
                err
            );
            (false, format!("load failed: {err}"))
        }
    };

    LoadResponse {
        ok,
        rows: clamp_count(store.records().len()),
        root_options: root_options_inner(store.records()),
        message,
    }
}

fn session() -> MutexGuard<'static, DatasetStore> {
    SESSION
        .get_or_init(|| Mutex::new(DatasetStore::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn pending_view() -> MutexGuard<'static, Debouncer<ViewRequest>> {
    PENDING_VIEW
        .get_or_init(|| Mutex::new(Debouncer::new(viewer_config().debounce)))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn viewer_config() -> ViewerConfig {
    config_or_default(ViewerConfig::from_env())
}

fn config_or_default(loaded: Result<ViewerConfig, ConfigError>) -> ViewerConfig {
    loaded.unwrap_or_else(|err| {
        log::warn!("event=config_load module=ffi status=fallback error={err}");
        ViewerConfig::default()
    })
}

fn clamp_count(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
