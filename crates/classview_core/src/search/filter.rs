//! Subtree and free-text filtering over the full dataset.
//!
//! # Responsibility
//! - Compute the candidate view from root selection and search text.
//! - List root codes for the subtree selector.
//!
//! # Invariants
//! - Filtering is pure and preserves input order.
//! - Subtree selection follows the lexical dotted-prefix convention, not the
//!   parent chain.
//! - Search is a trimmed, case-insensitive substring match on code or label.
//! - Both predicates must pass.

use crate::model::record::Record;
use crate::view::collate::compare_codes;
use std::collections::BTreeSet;

/// Root selector sentinel meaning "no subtree restriction".
pub const ALL_ROOTS: &str = "(all)";

/// Returns whether `root_code` selects every record.
pub fn is_all_roots(root_code: &str) -> bool {
    let trimmed = root_code.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_ROOTS)
}

/// Filters `records` by subtree root and search text.
pub fn filter_records<'a>(
    records: &'a [Record],
    root_code: &str,
    search_text: &str,
) -> Vec<&'a Record> {
    let root = (!is_all_roots(root_code)).then(|| root_code.trim());
    let needle = search_text.trim().to_lowercase();

    records
        .iter()
        .filter(|record| root.map_or(true, |root| record.is_lexically_under(root)))
        .filter(|record| needle.is_empty() || matches_search(record, &needle))
        .collect()
}

fn matches_search(record: &Record, needle: &str) -> bool {
    record.code.to_lowercase().contains(needle) || record.label.to_lowercase().contains(needle)
}

/// Returns the root selector options: sentinel first, then unique root codes
/// in locale-aware order.
pub fn root_options(records: &[Record]) -> Vec<String> {
    let mut codes = records
        .iter()
        .filter(|record| record.is_root())
        .map(|record| record.code.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    codes.sort_by(|a, b| compare_codes(a, b));

    std::iter::once(ALL_ROOTS.to_string())
        .chain(codes.into_iter().map(str::to_string))
        .collect()
}
