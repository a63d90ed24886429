//! Classification domain model.
//!
//! # Responsibility
//! - Define the record shape consumed by every core algorithm.
//!
//! # Invariants
//! - Records are immutable snapshots; datasets are replaced wholesale.

pub mod record;
