//! Document export and import through the filesystem

use std::fs;

use panegrid_core::config::EditorSettings;
use panegrid_core::document::{
    Density, DocumentError, LayoutDocument, freeform_from_json, freeform_to_json,
};
use panegrid_core::editor::{EditorMode, LayoutEditor};
use panegrid_core::split::{LayoutTemplate, NodeId, PanelContent, SplitAxis};
use tempfile::TempDir;

#[test]
fn test_export_import_json_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("layout.json");

    let mut editor = LayoutEditor::new(EditorSettings::default());
    editor.load_template(LayoutTemplate::Compose);
    editor
        .split(&NodeId::new("piano-roll"), SplitAxis::Vertical)
        .unwrap();
    let exported = editor.export();
    fs::write(&path, exported.to_json().unwrap()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let imported = LayoutDocument::from_json(&text).unwrap();
    assert_eq!(imported, exported);

    let mut other = LayoutEditor::new(EditorSettings::default());
    other.set_mode(EditorMode::Freeform);
    other.import(imported);
    assert_eq!(other.mode(), EditorMode::Split);
    assert_eq!(other.tree(), editor.tree());
    assert!(!other.can_undo());
}

#[test]
fn test_export_import_yaml_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("layout.yaml");

    let doc = LayoutDocument::new(LayoutTemplate::AiStudio.build(), Density::Dense);
    fs::write(&path, doc.to_yaml().unwrap()).unwrap();

    let imported = LayoutDocument::from_yaml(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(imported.split_layout, doc.split_layout);
    assert_eq!(imported.metadata.density, Density::Dense);
}

#[test]
fn test_hand_written_document_uses_defaults() {
    let json = r#"{
        "splitLayout": {
            "id": "root",
            "type": "split",
            "direction": "vertical",
            "children": [
                { "id": "top", "type": "panel", "content": "timeline", "size": 3 },
                { "id": "bottom", "type": "panel", "content": "transport" }
            ]
        }
    }"#;

    let doc = LayoutDocument::from_json(json).unwrap();
    assert_eq!(doc.version, "1.0");
    assert_eq!(doc.metadata.density, Density::Comfortable);
    assert_eq!(doc.split_layout.weight_of(&NodeId::new("top")), Some(3.0));
    assert_eq!(doc.split_layout.weight_of(&NodeId::new("bottom")), Some(1.0));
    assert_eq!(
        doc.split_layout.find_leaf(&NodeId::new("bottom")).map(|l| l.content),
        Some(PanelContent::Transport)
    );
}

#[test]
fn test_broken_document_is_rejected() {
    let json = r#"{
        "splitLayout": {
            "id": "root",
            "type": "split",
            "direction": "vertical",
            "children": [
                { "id": "a", "type": "panel", "content": "timeline" },
                { "id": "a", "type": "panel", "content": "mixer" }
            ]
        }
    }"#;

    assert!(matches!(
        LayoutDocument::from_json(json),
        Err(DocumentError::InvalidLayout(_))
    ));
    assert_eq!(
        LayoutDocument::from_json("{}"),
        Err(DocumentError::MissingSplitLayout)
    );
}

#[test]
fn test_freeform_snapshot_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("freeform.json");

    let mut editor = LayoutEditor::new(EditorSettings::default());
    editor.set_mode(EditorMode::Freeform);
    fs::write(&path, freeform_to_json(editor.freeform()).unwrap()).unwrap();

    let restored = freeform_from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(&restored, editor.freeform());
}
