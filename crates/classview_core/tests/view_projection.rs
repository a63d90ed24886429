use classview_core::{
    display_label, project, table_rows, ChartKind, ChartTrace, DepthLimit, Record, ViewSummary,
    TABLE_COLUMNS,
};

fn record(code: &str, parent: &str, weight: Option<f64>) -> Record {
    Record::new(code, "", parent).unwrap().with_weight(weight)
}

#[test]
fn no_weights_anywhere_falls_back_to_uniform_ones() {
    let data = vec![
        record("01", "", None),
        record("01.1", "01", None),
        record("01.2", "01", None),
    ];
    let closed = data.iter().collect::<Vec<_>>();

    let projection = project(&closed);
    assert!(!projection.has_weight);
    assert_eq!(projection.values, vec![1.0, 1.0, 1.0]);
}

#[test]
fn single_present_weight_zeroes_the_rest() {
    let data = vec![
        record("01", "", None),
        record("01.1", "01", Some(5.0)),
        record("01.2", "01", None),
    ];
    let closed = data.iter().collect::<Vec<_>>();

    let projection = project(&closed);
    assert!(projection.has_weight);
    assert_eq!(projection.values, vec![0.0, 5.0, 0.0]);
}

#[test]
fn present_zero_weight_switches_to_weighted_mode() {
    let data = vec![record("01", "", Some(0.0)), record("01.1", "01", None)];
    let closed = data.iter().collect::<Vec<_>>();

    let projection = project(&closed);
    assert!(projection.has_weight);
    assert_eq!(projection.values, vec![0.0, 0.0]);
}

#[test]
fn values_are_not_aggregated_upward() {
    let data = vec![
        record("01", "", Some(10.0)),
        record("01.1", "01", Some(30.0)),
        record("01.2", "01", Some(40.0)),
    ];
    let closed = data.iter().collect::<Vec<_>>();
    assert_eq!(project(&closed).values, vec![10.0, 30.0, 40.0]);
}

#[test]
fn projection_sequences_are_parallel_and_ordered() {
    let data = vec![
        Record::new("01.1", "Food", "01").unwrap(),
        Record::new("01", "", "").unwrap(),
    ];
    let closed = data.iter().collect::<Vec<_>>();

    let projection = project(&closed);
    assert_eq!(projection.len(), 2);
    assert_eq!(projection.ids, vec!["01.1", "01"]);
    assert_eq!(projection.labels, vec!["01.1 - Food", "01"]);
    assert_eq!(projection.parents, vec!["01", ""]);
}

#[test]
fn display_label_stays_distinct_per_node() {
    let with_label = Record::new("02", "Clothing", "").unwrap();
    let same_label = Record::new("03", "Clothing", "").unwrap();
    assert_ne!(display_label(&with_label), display_label(&same_label));
}

#[test]
fn empty_projection_is_empty() {
    let projection = project(&[]);
    assert!(projection.is_empty());
    assert!(!projection.has_weight);
}

#[test]
fn chart_kind_and_depth_limit_parse_from_control_text() {
    assert_eq!("Sunburst".parse::<ChartKind>().unwrap(), ChartKind::Sunburst);
    assert_eq!(" treemap ".parse::<ChartKind>().unwrap(), ChartKind::Treemap);
    assert!("pie".parse::<ChartKind>().is_err());

    assert_eq!("auto".parse::<DepthLimit>().unwrap(), DepthLimit::Auto);
    assert_eq!("3".parse::<DepthLimit>().unwrap(), DepthLimit::Levels(3));
    assert!("0".parse::<DepthLimit>().is_err());
    assert!("-1".parse::<DepthLimit>().is_err());
}

#[test]
fn sunburst_trace_wire_shape() {
    let data = vec![record("01", "", Some(60.0)), record("01.1", "01", Some(40.0))];
    let closed = data.iter().collect::<Vec<_>>();
    let trace = ChartTrace::new(ChartKind::Sunburst, DepthLimit::Auto, project(&closed));

    let json = serde_json::to_value(&trace).unwrap();
    assert_eq!(json["type"], "sunburst");
    assert_eq!(json["branchvalues"], "total");
    assert_eq!(json["ids"][1], "01.1");
    assert_eq!(json["parents"][1], "01");
    assert_eq!(json["values"][0], 60.0);
    assert!(json.get("maxdepth").is_none());
    assert!(json.get("tiling").is_none());
    assert!(json["hovertemplate"].as_str().unwrap().contains("%{value"));
}

#[test]
fn treemap_trace_carries_depth_clamp_and_tiling() {
    let data = vec![record("01", "", None)];
    let closed = data.iter().collect::<Vec<_>>();
    let trace = ChartTrace::new(ChartKind::Treemap, DepthLimit::Levels(2), project(&closed));

    let json = serde_json::to_value(&trace).unwrap();
    assert_eq!(json["type"], "treemap");
    assert_eq!(json["maxdepth"], 2);
    assert_eq!(json["tiling"]["packing"], "squarify");
    assert!(json["hovertemplate"]
        .as_str()
        .unwrap()
        .contains("not provided"));
}

#[test]
fn table_rows_sort_naturally_and_format_weights() {
    let data = vec![
        Record::new("01.10", "Tenth", "01")
            .unwrap()
            .with_weight(Some(2.26)),
        Record::new("01.9", "Ninth", "01").unwrap().with_level("group"),
        Record::new("01", "Food", "")
            .unwrap()
            .with_weight(Some(60.0)),
    ];
    let filtered = data.iter().collect::<Vec<_>>();

    let rows = table_rows(&filtered);
    let codes = rows.iter().map(|row| row.code.as_str()).collect::<Vec<_>>();
    assert_eq!(codes, vec!["01", "01.9", "01.10"]);
    assert_eq!(rows[0].weight, "60.0");
    assert_eq!(rows[1].weight, "");
    assert_eq!(rows[1].cells(), ["01.9", "Ninth", "group", "01", ""]);
    assert_eq!(rows[2].weight, "2.3");
    assert_eq!(TABLE_COLUMNS, ["code", "label", "level", "parent", "weight"]);
}

#[test]
fn table_rows_keep_zero_led_codes_in_hierarchy_order() {
    let data = ["10", "0111", "02", "011", "01"]
        .into_iter()
        .map(|code| Record::new(code, "", "").unwrap())
        .collect::<Vec<_>>();
    let filtered = data.iter().collect::<Vec<_>>();

    let codes = table_rows(&filtered)
        .into_iter()
        .map(|row| row.code)
        .collect::<Vec<_>>();
    assert_eq!(codes, vec!["01", "011", "0111", "02", "10"]);
}

#[test]
fn summary_counts_records_and_sums_present_weights() {
    let data = vec![
        record("01", "", Some(60.0)),
        record("01.1", "01", None),
        record("02", "", Some(12.5)),
    ];
    let filtered = data.iter().collect::<Vec<_>>();

    let summary = ViewSummary::from_records(&filtered);
    assert_eq!(summary.record_count, 3);
    assert_eq!(summary.weight_sum, 72.5);
    assert_eq!(summary.weight_sum_label(), "72.5 %");
}
