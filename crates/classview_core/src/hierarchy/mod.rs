//! Parent-pointer hierarchy utilities.
//!
//! # Responsibility
//! - Index the full dataset by code.
//! - Reconstruct parent-complete subtrees from arbitrary subsets.
//!
//! # Invariants
//! - Input is never assumed acyclic.
//! - Walks are iterative; call-stack depth does not grow with tree depth.

pub mod closure;
pub mod index;
