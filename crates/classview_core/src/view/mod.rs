//! Render payloads derived from one filtered view.
//!
//! # Responsibility
//! - Project closure-repaired records into chart sequences.
//! - Shape table rows and summary figures from the filtered records.
//!
//! # Invariants
//! - Chart payloads use the closed set; table, summary and export use the
//!   filtered set.

pub mod chart;
pub mod collate;
pub mod summary;
pub mod table;
