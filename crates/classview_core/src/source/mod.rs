//! Dataset source layer.
//!
//! # Responsibility
//! - Hide where CSV text comes from behind `DatasetSource`.
//! - Keep read and decode failures typed for the service layer.

pub mod dataset_source;
