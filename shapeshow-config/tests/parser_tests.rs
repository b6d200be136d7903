//! Integration tests for config record parsing.

use shapeshow_config::{ConfigEntityInfo, parse_line, populate};

#[test]
fn test_parse_splits_type_and_attributes() {
    let record = parse_line("Circle Alpha 1 2 0 0 255 0 0 5");
    assert_eq!(record.entity_type, "Circle");
    assert_eq!(
        record.attributes,
        vec!["Alpha", "1", "2", "0", "0", "255", "0", "0", "5"]
    );
}

#[test]
fn test_parse_whitespace_only_line() {
    assert_eq!(parse_line(" \t "), ConfigEntityInfo::default());
}

#[test]
fn test_populate_skips_blank_lines_and_keeps_order() {
    let content = "Circle A 1 2 0 0 255 0 0 5\n\n   \t\nRectangle B 0 0 0 0 10 10 10 4 6\n";
    let records = populate(content);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].entity_type, "Circle");
    assert_eq!(records[0].attribute(0), Some("A"));
    assert_eq!(records[1].entity_type, "Rectangle");
    assert_eq!(records[1].attribute(0), Some("B"));
}

#[test]
fn test_populate_one_record_per_non_blank_line() {
    let content = "Font f.ttf\nBlob\nTriangle T\nCircle";
    let types: Vec<String> = populate(content)
        .into_iter()
        .map(|r| r.entity_type)
        .collect();
    assert_eq!(types, vec!["Font", "Blob", "Triangle", "Circle"]);
}

#[test]
fn test_populate_handles_crlf() {
    let records = populate("Circle A\r\n\r\nBlob 1 2 3\r\n");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].attributes, vec!["A"]);
    assert_eq!(records[1].entity_type, "Blob");
    assert_eq!(records[1].attributes, vec!["1", "2", "3"]);
}

#[test]
fn test_populate_empty_content() {
    assert!(populate("").is_empty());
    assert!(populate("\n\n  \n").is_empty());
}

#[test]
fn test_unrecognized_types_are_kept_verbatim() {
    let records = populate("  blob   x  ");
    assert_eq!(records, vec![ConfigEntityInfo::new("blob", ["x"])]);
}

#[test]
fn test_record_serializes_to_json() {
    let record = parse_line("Font arial.ttf Hello");
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(
        json,
        r#"{"entity_type":"Font","attributes":["arial.ttf","Hello"]}"#
    );
}
