//! Use-case services above the algorithm layers.
//!
//! # Responsibility
//! - Hold the session snapshot and apply reloads.
//! - Run the per-action recomputation pass.
//! - Debounce keystroke-driven requests.

pub mod dataset_store;
pub mod debounce;
pub mod view_service;
