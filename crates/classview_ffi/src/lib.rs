//! Flutter-facing bindings for classview.

pub mod api;
