//! In-memory dataset snapshot holder.
//!
//! # Responsibility
//! - Own the full dataset for one session.
//! - Swap snapshots wholesale, never partially.
//! - Reject load completions that were overtaken by a newer request.
//!
//! # Invariants
//! - `replace` is the only mutation of the record list.
//! - A failed load leaves the current snapshot authoritative.
//! - Load tickets increase monotonically; only the newest may apply.

use crate::model::record::Record;
use crate::source::dataset_source::{DatasetSource, LoadResult};
use log::{error, info, warn};
use std::time::Instant;

/// Token identifying one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Result of completing a load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Snapshot replaced with `rows` records.
    Applied { rows: usize },
    /// A newer request was issued; snapshot left unchanged.
    Stale { ticket: LoadTicket, latest: LoadTicket },
}

/// Snapshot container with a single replace operation.
#[derive(Debug, Default)]
pub struct DatasetStore {
    records: Vec<Record>,
    generation: u64,
    last_issued: u64,
}

impl DatasetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with one snapshot.
    pub fn with_records(records: Vec<Record>) -> Self {
        let mut store = Self::new();
        store.replace(records);
        store
    }

    /// Current full dataset.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of snapshots applied so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the snapshot unconditionally.
    pub fn replace(&mut self, records: Vec<Record>) {
        self.records = records;
        self.generation += 1;
    }

    /// Issues a ticket for a load that is about to start.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.last_issued += 1;
        LoadTicket(self.last_issued)
    }

    /// Applies `records` when `ticket` is still the newest issued.
    pub fn finish_load(&mut self, ticket: LoadTicket, records: Vec<Record>) -> LoadOutcome {
        let latest = LoadTicket(self.last_issued);
        if ticket != latest {
            warn!(
                "event=load_stale module=service status=skipped ticket={} latest={}",
                ticket.value(),
                latest.value()
            );
            return LoadOutcome::Stale { ticket, latest };
        }
        let rows = records.len();
        self.replace(records);
        LoadOutcome::Applied { rows }
    }

    /// Reads and decodes `source`, then swaps it in.
    ///
    /// # Errors
    /// - Returns the read/decode error; the current snapshot is kept.
    pub fn load_from(&mut self, source: &dyn DatasetSource) -> LoadResult<LoadOutcome> {
        let started_at = Instant::now();
        let ticket = self.begin_load();
        let description = source.describe();

        let records = match source.load_records() {
            Ok(records) => records,
            Err(err) => {
                error!(
                    "event=dataset_load module=service status=error source={} duration_ms={} error={}",
                    description,
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err);
            }
        };

        let roots = records.iter().filter(|record| record.is_root()).count();
        let outcome = self.finish_load(ticket, records);
        if let LoadOutcome::Applied { rows } = outcome {
            info!(
                "event=dataset_loaded module=service status=ok source={} rows={} roots={} generation={} duration_ms={}",
                description,
                rows,
                roots,
                self.generation,
                started_at.elapsed().as_millis()
            );
        }
        Ok(outcome)
    }
}
