use classview_core::{
    DatasetSource, DatasetStore, FileSource, LoadError, LoadOutcome, Record, TextSource,
};
use std::io::Write;

const SAMPLE_CSV: &str = "code,label_fr,parent,level,weight\n\
                          01,Food,,division,60\n\
                          01.1,Bread,01,group,40\n\
                          02,Clothing,,division,40\n";

#[test]
fn replace_swaps_snapshot_and_bumps_generation() {
    let mut store = DatasetStore::new();
    assert!(store.records().is_empty());
    assert_eq!(store.generation(), 0);

    store.replace(vec![Record::new("01", "", "").unwrap()]);
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.generation(), 1);

    store.replace(Vec::new());
    assert!(store.records().is_empty());
    assert_eq!(store.generation(), 2);
}

#[test]
fn load_from_text_source_applies_full_snapshot() {
    let mut store = DatasetStore::new();
    let outcome = store
        .load_from(&TextSource::new("upload.csv", SAMPLE_CSV))
        .unwrap();

    assert_eq!(outcome, LoadOutcome::Applied { rows: 3 });
    assert_eq!(store.records()[1].code, "01.1");
    assert_eq!(store.records()[1].weight, Some(40.0));
}

#[test]
fn load_from_file_source_reads_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

    let mut store = DatasetStore::new();
    let source = FileSource::new(file.path());
    assert!(source.describe().starts_with("file:"));

    let outcome = store.load_from(&source).unwrap();
    assert_eq!(outcome, LoadOutcome::Applied { rows: 3 });
}

#[test]
fn failed_load_keeps_previous_snapshot() {
    let mut store = DatasetStore::with_records(vec![Record::new("keep", "", "").unwrap()]);
    let generation = store.generation();

    let dir = tempfile::tempdir().unwrap();
    let missing = FileSource::new(dir.path().join("missing.csv"));
    let err = store.load_from(&missing).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(std::error::Error::source(&err).is_some());

    let err = store
        .load_from(&TextSource::new("bad.csv", "label\nno code column\n"))
        .unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)));

    assert_eq!(store.records().len(), 1);
    assert_eq!(store.records()[0].code, "keep");
    assert_eq!(store.generation(), generation);
}

#[test]
fn stale_load_completion_is_ignored() {
    let mut store = DatasetStore::new();
    let first = store.begin_load();
    let second = store.begin_load();
    assert!(second > first);

    let newer = vec![Record::new("new", "", "").unwrap()];
    assert_eq!(
        store.finish_load(second, newer),
        LoadOutcome::Applied { rows: 1 }
    );

    let older = vec![Record::new("old", "", "").unwrap()];
    assert_eq!(
        store.finish_load(first, older),
        LoadOutcome::Stale {
            ticket: first,
            latest: second
        }
    );
    assert_eq!(store.records()[0].code, "new");
}

#[test]
fn header_only_csv_loads_empty_dataset() {
    let mut store = DatasetStore::with_records(vec![Record::new("old", "", "").unwrap()]);
    let outcome = store
        .load_from(&TextSource::new("empty.csv", "code,label\n"))
        .unwrap();
    assert_eq!(outcome, LoadOutcome::Applied { rows: 0 });
    assert!(store.records().is_empty());
}
