//! Ancestor closure over a filtered record subset.
//!
//! # Responsibility
//! - Repair a filtered subset so every kept record's parent is also kept.
//!
//! # Invariants
//! - Output contains every input record and only their ancestors.
//! - Output order: deduplicated input order, then ancestors in discovery order.
//! - Dangling parent codes end the walk; the record acts as a root.
//! - Each walk carries its own visited set, so cyclic parent links terminate.

use crate::hierarchy::index::HierarchyIndex;
use crate::model::record::Record;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Returns the minimal parent-complete superset of `subset`.
///
/// Records in `subset` sharing a code collapse to one entry: first position,
/// last value, matching the index shadowing rule.
pub fn close<'a>(index: &HierarchyIndex<'a>, subset: &[&'a Record]) -> Vec<&'a Record> {
    let mut kept: Vec<&'a Record> = Vec::with_capacity(subset.len());
    let mut slot_by_code: HashMap<&'a str, usize> = HashMap::with_capacity(subset.len());

    for &record in subset {
        match slot_by_code.get(record.code.as_str()) {
            Some(&slot) => kept[slot] = record,
            None => {
                slot_by_code.insert(record.code.as_str(), kept.len());
                kept.push(record);
            }
        }
    }

    let seeds = kept.clone();
    for seed in seeds {
        walk_ancestors(index, seed, &mut kept, &mut slot_by_code);
    }
    kept
}

fn walk_ancestors<'a>(
    index: &HierarchyIndex<'a>,
    seed: &'a Record,
    kept: &mut Vec<&'a Record>,
    slot_by_code: &mut HashMap<&'a str, usize>,
) {
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(seed.code.as_str());

    let mut parent_code = seed.parent.as_str();
    while !parent_code.is_empty() {
        if !visited.insert(parent_code) {
            debug!(
                "event=closure_cycle module=hierarchy seed={} code={}",
                seed.code, parent_code
            );
            return;
        }
        let Some(parent) = index.get(parent_code) else {
            return;
        };
        if slot_by_code.contains_key(parent.code.as_str()) {
            // Already kept: its own chain is walked as a seed or was walked before.
            return;
        }
        slot_by_code.insert(parent.code.as_str(), kept.len());
        kept.push(parent);
        parent_code = parent.parent.as_str();
    }
}

#[cfg(test)]
mod tests {
    use super::close;
    use crate::hierarchy::index::HierarchyIndex;
    use crate::model::record::Record;

    fn record(code: &str, parent: &str) -> Record {
        Record::new(code, "", parent).unwrap()
    }

    #[test]
    fn self_parent_terminates() {
        let data = vec![record("A", "A")];
        let index = HierarchyIndex::build(&data);
        let closed = close(&index, &[&data[0]]);
        assert_eq!(closed.len(), 1);
    }

    #[test]
    fn duplicate_subset_codes_keep_first_position_last_value() {
        let first = record("A", "");
        let second = record("A", "").with_level("second");
        let other = record("B", "");
        let data = vec![first.clone(), other.clone(), second.clone()];
        let index = HierarchyIndex::build(&data);

        let closed = close(&index, &[&data[0], &data[1], &data[2]]);
        let codes = closed.iter().map(|r| r.code.as_str()).collect::<Vec<_>>();
        assert_eq!(codes, vec!["A", "B"]);
        assert_eq!(closed[0].level, "second");
    }
}
