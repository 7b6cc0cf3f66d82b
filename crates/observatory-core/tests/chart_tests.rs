use std::collections::HashSet;

use observatory_core::{ChartAssembler, ChartData, ClassHierarchy, RecordKind};

const SAMPLE: &str = r#"{
    "@id": "schema:Thing",
    "value": 29,
    "children": [
        {"@id": "schema:Intangible", "value": 2, "children": [
            {"@id": "schema:ListItem", "value": 7, "children": [
                {"@id": "schema:BreadcrumbList"},
                {"@id": "schema:BreadcrumbList", "value": 3}
            ]},
            {"@id": "schema:Offer", "value": 4}
        ]},
        {"@id": "schema:CreativeWork", "value": 5, "children": [
            {"@id": "schema:ListItem", "value": 1},
            {"@id": "schema:Article", "value": 6, "children": [
                {"@id": "schema:NewsArticle", "value": 2}
            ]}
        ]},
        {"@id": "schema:Offer", "value": 8}
    ]
}"#;

fn chart(json: &str) -> ChartData {
    ChartData::from_hierarchy(&ClassHierarchy::from_json(json).unwrap())
}

#[test]
fn test_end_to_end_duplicate_siblings() {
    let data = chart(r#"{"@id":"A","children":[{"@id":"B","value":5},{"@id":"B","value":9}]}"#);

    assert_eq!(data.ids, vec!["A", "B", "B A 0"]);
    assert_eq!(data.names, vec!["A", "B", "B"]);
    assert_eq!(data.parents, vec!["", "A", "A"]);
    assert_eq!(data.values, vec![0, 5, 9]);
}

#[test]
fn test_duplicate_under_depth_two_parent() {
    let json = r#"{"@id":"R","children":[{"@id":"Q","children":[{"@id":"P","children":[{"@id":"X"},{"@id":"X"}]}]}]}"#;
    let data = chart(json);

    assert_eq!(data.ids, vec!["R", "Q", "P", "X", "X P 2"]);
    assert_eq!(data.parents[3], "P");
    assert_eq!(data.parents[4], "P");
}

#[test]
fn test_one_primary_row_per_class() {
    let hierarchy = ClassHierarchy::from_json(SAMPLE).unwrap();
    let records = ChartAssembler::new().assemble(hierarchy.root());

    let names: HashSet<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, hierarchy.distinct_ids());

    let primaries: Vec<&str> = records
        .iter()
        .filter(|r| !r.is_disambiguated())
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(primaries.len(), names.len());
}

#[test]
fn test_display_ids_are_unique() {
    let data = chart(SAMPLE);
    let unique: HashSet<&String> = data.ids.iter().collect();
    assert_eq!(unique.len(), data.ids.len());
}

#[test]
fn test_no_forward_parent_references() {
    let data = chart(SAMPLE);

    for (i, parent) in data.parents.iter().enumerate() {
        if parent.is_empty() {
            continue;
        }
        assert!(
            data.ids[..i].contains(parent),
            "row {} ({}) references {} before it is emitted",
            i,
            data.ids[i],
            parent
        );
    }
    assert!(data.dangling_parents().is_empty());
}

#[test]
fn test_only_root_is_container_for_tree_input() {
    let hierarchy = ClassHierarchy::from_json(SAMPLE).unwrap();
    let records = ChartAssembler::new().assemble(hierarchy.root());

    let containers: Vec<&str> = records
        .iter()
        .filter(|r| r.kind == RecordKind::Container)
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(containers, vec!["schema:Thing"]);
    assert_eq!(records.len(), hierarchy.node_count());
}

#[test]
fn test_sample_rows() {
    let data = chart(SAMPLE);

    assert_eq!(
        data.ids,
        vec![
            "schema:Thing",
            "schema:Intangible",
            "schema:CreativeWork",
            "schema:Offer",
            "schema:ListItem",
            "schema:Offer schema:Intangible 1",
            "schema:ListItem schema:CreativeWork 1",
            "schema:Article",
            "schema:BreadcrumbList",
            "schema:BreadcrumbList schema:ListItem 2",
            "schema:NewsArticle",
        ]
    );
    assert_eq!(data.values, vec![29, 2, 5, 8, 7, 4, 1, 6, 0, 3, 2]);
}

#[test]
fn test_missing_value_is_zero() {
    let data = chart(r#"{"@id":"A","children":[{"@id":"B"}]}"#);
    assert_eq!(data.values, vec![0, 0]);
}

#[test]
fn test_pipeline_is_deterministic() {
    let first = serde_json::to_string(&chart(SAMPLE)).unwrap();
    let second = serde_json::to_string(&chart(SAMPLE)).unwrap();
    assert_eq!(first, second);
}
