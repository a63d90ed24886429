//! Text codecs at the dataset boundary.
//!
//! # Responsibility
//! - Translate between delimited text and `Record` lists.
//! - Keep parsing permissive: malformed rows are dropped, not reported.

pub mod csv;
