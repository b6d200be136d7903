//! Integration tests for building a whole config into a collection.

mod common;

use common::StubFonts;
use shapeshow::{Diagnostic, EntityCollection};
use shapeshow_config::populate;
use shapeshow_fonts::FontStore;

const SCENE: &str = "\
Font fonts/arial.ttf Title 24 255 255 0
Circle Alpha 1 2 0 0 255 0 0 5

Rectangle Beta 0 0 0 0 10 10 10 4 6
Blob 1 2 3
Circle OnlyName
";

#[test]
fn test_builds_every_record_in_file_order() {
    let mut fonts = StubFonts::with(&["fonts/arial.ttf"]);
    let scene = EntityCollection::build(&populate(SCENE), &mut fonts);

    let kinds: Vec<&str> = scene.entities.iter().map(|e| e.kind_label()).collect();
    assert_eq!(
        kinds,
        vec!["Text", "Circle", "Rectangle", "Circle", "Circle"]
    );
    let names: Vec<Option<&str>> = scene.entities.iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        vec![
            None,
            Some("Alpha"),
            Some("Beta"),
            Some("UnknownEntity"),
            Some("FallbackCircle")
        ]
    );
}

#[test]
fn test_diagnostics_carry_record_index() {
    let mut fonts = StubFonts::with(&["fonts/arial.ttf"]);
    let scene = EntityCollection::build(&populate(SCENE), &mut fonts);

    let indexed: Vec<usize> = scene.diagnostics.iter().map(|d| d.record).collect();
    assert_eq!(indexed, vec![3, 4]);
    assert_eq!(
        scene.diagnostics[0].diagnostic,
        Diagnostic::UnknownEntity {
            entity_type: "Blob".to_string()
        }
    );
}

#[test]
fn test_blank_line_between_records() {
    let mut fonts = StubFonts::default();
    let records = populate("Circle A 0 0 0 0 1 1 1 1\n\nCircle B 0 0 0 0 1 1 1 1\n");
    let scene = EntityCollection::build(&records, &mut fonts);
    assert_eq!(scene.entities.len(), 2);
    assert_eq!(scene.entities[0].name(), Some("A"));
    assert_eq!(scene.entities[1].name(), Some("B"));
    assert!(scene.diagnostics.is_empty());
}

#[test]
fn test_missing_font_on_disk_degrades_to_dummy() {
    let dir = tempfile::TempDir::new().unwrap();
    let line = format!("Font {}/nope.ttf Hello", dir.path().display());

    let mut fonts = FontStore::new();
    let scene = EntityCollection::build(&populate(&line), &mut fonts);
    assert_eq!(scene.entities.len(), 1);
    assert_eq!(scene.entities[0].name(), Some("DummyText"));
    assert!(matches!(
        scene.diagnostics[0].diagnostic,
        Diagnostic::FontUnavailable { .. }
    ));
    assert!(fonts.is_empty());
}

#[test]
fn test_empty_config_builds_empty_collection() {
    let mut fonts = StubFonts::default();
    let scene = EntityCollection::build(&populate("\n  \n"), &mut fonts);
    assert!(scene.entities.is_empty());
    assert!(scene.diagnostics.is_empty());
}

#[test]
fn test_collection_serializes_as_tagged_list() {
    let mut fonts = StubFonts::default();
    let scene = EntityCollection::build(&populate("Circle A 1 2 0 0 255 0 0 5"), &mut fonts);
    let json = serde_json::to_value(&scene.entities).unwrap();

    let first = &json[0];
    assert_eq!(first["kind"], "Circle");
    assert_eq!(first["name"], "A");
    assert_eq!(first["position"][1], 2.0);
    assert_eq!(first["color"]["r"], 255);
    assert_eq!(first["radius"], 5.0);
}
