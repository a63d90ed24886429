//! View filtering entry points.
//!
//! # Responsibility
//! - Expose the pure filter over a dataset snapshot.
//! - Keep predicate composition inside core, away from UI widgets.

pub mod filter;
