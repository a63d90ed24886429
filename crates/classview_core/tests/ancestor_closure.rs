use classview_core::{close, HierarchyIndex, Record};
use std::collections::HashSet;

fn record(code: &str, parent: &str) -> Record {
    Record::new(code, "", parent).unwrap()
}

fn forest() -> Vec<Record> {
    vec![
        record("01", ""),
        record("01.1", "01"),
        record("01.1.1", "01.1"),
        record("01.1.2", "01.1"),
        record("01.2", "01"),
        record("02", ""),
        record("02.1", "02"),
        record("03.1", "99"),
    ]
}

fn codes(records: &[&Record]) -> Vec<String> {
    records.iter().map(|record| record.code.clone()).collect()
}

fn ancestors_of(data: &[Record], code: &str) -> HashSet<String> {
    let index = HierarchyIndex::build(data);
    let mut out = HashSet::new();
    let mut cursor = index.get(code).map(|record| record.parent.clone());
    while let Some(parent) = cursor.filter(|parent| !parent.is_empty()) {
        let Some(found) = index.get(&parent) else {
            break;
        };
        out.insert(found.code.clone());
        cursor = Some(found.parent.clone());
    }
    out
}

/// Every subset of the forest, selected by bitmask.
fn all_subsets(data: &[Record]) -> Vec<Vec<&Record>> {
    (0u32..(1 << data.len()))
        .map(|mask| {
            data.iter()
                .enumerate()
                .filter(|(idx, _)| mask & (1 << idx) != 0)
                .map(|(_, record)| record)
                .collect()
        })
        .collect()
}

#[test]
fn closure_adds_missing_ancestor_chain_in_discovery_order() {
    let data = forest();
    let index = HierarchyIndex::build(&data);

    let closed = close(&index, &[&data[2]]);
    assert_eq!(codes(&closed), vec!["01.1.1", "01.1", "01"]);
}

#[test]
fn closure_keeps_subset_order_before_ancestors() {
    let data = forest();
    let index = HierarchyIndex::build(&data);

    let closed = close(&index, &[&data[6], &data[3], &data[1]]);
    assert_eq!(codes(&closed), vec!["02.1", "01.1.2", "01.1", "02", "01"]);
}

#[test]
fn closure_is_complete_for_every_subset() {
    let data = forest();
    let index = HierarchyIndex::build(&data);

    for subset in all_subsets(&data) {
        let closed = close(&index, &subset);
        let kept = closed
            .iter()
            .map(|record| record.code.as_str())
            .collect::<HashSet<_>>();
        for record in &closed {
            if record.parent.is_empty() || !index.contains(&record.parent) {
                continue;
            }
            assert!(
                kept.contains(record.parent.as_str()),
                "parent {} of {} missing for subset {:?}",
                record.parent,
                record.code,
                codes(&subset)
            );
        }
    }
}

#[test]
fn closure_is_minimal_for_every_subset() {
    let data = forest();
    let index = HierarchyIndex::build(&data);

    for subset in all_subsets(&data) {
        let mut allowed = subset
            .iter()
            .map(|record| record.code.clone())
            .collect::<HashSet<_>>();
        for record in &subset {
            allowed.extend(ancestors_of(&data, &record.code));
        }

        let closed = close(&index, &subset);
        let closed_codes = codes(&closed).into_iter().collect::<HashSet<_>>();
        assert_eq!(closed_codes, allowed, "subset {:?}", codes(&subset));
        assert_eq!(closed.len(), closed_codes.len(), "no duplicates expected");
    }
}

#[test]
fn closure_is_idempotent_for_every_subset() {
    let data = forest();
    let index = HierarchyIndex::build(&data);

    for subset in all_subsets(&data) {
        let once = close(&index, &subset);
        let twice = close(&index, &once);
        assert_eq!(codes(&twice), codes(&once));
    }
}

#[test]
fn dangling_parent_acts_as_root() {
    let data = forest();
    let index = HierarchyIndex::build(&data);

    let closed = close(&index, &[&data[7]]);
    assert_eq!(codes(&closed), vec!["03.1"]);
    assert_eq!(closed[0].parent, "99");
}

#[test]
fn three_node_cycle_terminates_without_repeats() {
    let data = vec![record("A", "B"), record("B", "C"), record("C", "A")];
    let index = HierarchyIndex::build(&data);

    let closed = close(&index, &[&data[0]]);
    assert_eq!(codes(&closed), vec!["A", "B", "C"]);
}

#[test]
fn cycle_hanging_off_a_tree_does_not_corrupt_other_branches() {
    let data = vec![
        record("01", ""),
        record("01.1", "01"),
        record("X", "Y"),
        record("Y", "X"),
        record("Z", "X"),
    ];
    let index = HierarchyIndex::build(&data);

    let closed = close(&index, &[&data[1], &data[4]]);
    assert_eq!(codes(&closed), vec!["01.1", "Z", "01", "X", "Y"]);
}

#[test]
fn duplicate_codes_resolve_to_later_record() {
    let data = vec![
        record("01", ""),
        record("01.1", "01"),
        record("01", "").with_level("shadow"),
    ];
    let index = HierarchyIndex::build(&data);
    assert_eq!(index.len(), 2);
    assert_eq!(index.get("01").unwrap().level, "shadow");

    let closed = close(&index, &[&data[1]]);
    assert_eq!(closed.len(), 2);
    assert_eq!(closed[1].level, "shadow");
}

#[test]
fn empty_subset_closes_to_empty() {
    let data = forest();
    let index = HierarchyIndex::build(&data);
    assert!(close(&index, &[]).is_empty());
}
