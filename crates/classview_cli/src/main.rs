//! Command-line front-end for classview.
//!
//! # Responsibility
//! - Load one CSV snapshot and run a single view pass over it.
//! - Print the chart payload, table, summary or root options, or write the
//!   filtered export.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use classview_core::{
    export_view, init_logging, render_view, root_options, ChartKind, DatasetStore, DepthLimit,
    FileSource, ViewRequest, ViewerConfig, ALL_ROOTS, TABLE_COLUMNS, TABLE_EMPTY_MESSAGE,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// Chart trace as JSON.
    Chart,
    /// Tab-separated table of the filtered rows.
    Table,
    /// Record count and weight total.
    Summary,
    /// Root selector options.
    Roots,
}

#[derive(Debug, Parser)]
#[command(name = "classview", version, about = "Browse a hierarchical classification CSV")]
struct Cli {
    /// Dataset to load; defaults to CLASSVIEW_CSV_PATH or the bundled example path.
    csv: Option<PathBuf>,

    /// Restrict to one subtree (dotted code prefix).
    #[arg(long, default_value = ALL_ROOTS)]
    root: String,

    /// Case-insensitive search over code and label.
    #[arg(long, default_value = "")]
    search: String,

    /// Chart kind: sunburst or treemap.
    #[arg(long, default_value = "sunburst")]
    kind: ChartKind,

    /// Depth clamp: auto or a positive integer.
    #[arg(long, default_value = "auto")]
    depth: DepthLimit,

    #[arg(long, value_enum, default_value_t = Output::Chart)]
    output: Output,

    /// Write the filtered view as CSV to this path.
    #[arg(long)]
    export: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long)]
    log_dir: Option<String>,

    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ViewerConfig::from_env().context("invalid CLASSVIEW_* environment")?;

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(config.log_level.as_str());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let csv_path = cli.csv.clone().unwrap_or(config.csv_path.clone());
    let mut store = DatasetStore::new();
    store
        .load_from(&FileSource::new(&csv_path))
        .with_context(|| format!("failed to load `{}`", csv_path.display()))?;

    let request = ViewRequest {
        root_code: cli.root.clone(),
        search_text: cli.search.clone(),
        chart_kind: cli.kind,
        depth_limit: cli.depth,
    };

    if let Some(export_path) = cli.export.as_ref() {
        let csv = export_view(store.records(), &request);
        std::fs::write(export_path, csv)
            .with_context(|| format!("failed to write `{}`", export_path.display()))?;
        log::info!(
            "event=view_exported module=cli status=ok path={}",
            export_path.display()
        );
    }

    match cli.output {
        Output::Roots => {
            for option in root_options(store.records()) {
                println!("{option}");
            }
        }
        Output::Chart => {
            let output = render_view(store.records(), &request);
            println!("{}", serde_json::to_string_pretty(&output.chart)?);
        }
        Output::Table => {
            let output = render_view(store.records(), &request);
            if output.table.is_empty() {
                println!("{TABLE_EMPTY_MESSAGE}");
            } else {
                println!("{}", TABLE_COLUMNS.join("\t"));
                for row in &output.table {
                    println!("{}", row.cells().join("\t"));
                }
            }
        }
        Output::Summary => {
            let output = render_view(store.records(), &request);
            println!("records\t{}", output.summary.record_count);
            println!("weight_sum\t{}", output.summary.weight_sum_label());
        }
    }
    Ok(())
}
