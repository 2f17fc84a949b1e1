//! Editing session workflows across modes

use panegrid_core::config::EditorSettings;
use panegrid_core::editor::{EditorError, EditorMode, LayoutEditor, ModeTransition};
use panegrid_core::geometry::Rect;
use panegrid_core::split::{LayoutError, LayoutTemplate, NodeId, PanelContent, SplitAxis};

fn id(value: &str) -> NodeId {
    NodeId::new(value)
}

#[test]
fn test_tree_edits_then_undo_everything() {
    let mut editor = LayoutEditor::new(EditorSettings::default());
    editor.load_template(LayoutTemplate::Arrange);
    let start = editor.tree().clone();

    let inserted = editor.split(&id("timeline"), SplitAxis::Horizontal).unwrap();
    editor
        .change_content(&inserted.created, PanelContent::Samples)
        .unwrap();
    editor.set_weight(&id("transport"), 2.0).unwrap();
    editor.remove(&id("mixer")).unwrap();
    assert_eq!(editor.history().len(), 4);

    // "bottom" collapsed into transport
    assert!(!editor.tree().contains(&id("bottom")));
    assert!(editor.tree().validate().is_ok());

    while editor.undo() {}
    assert_eq!(editor.tree(), &start);
}

#[test]
fn test_rejected_edits_do_not_touch_history() {
    let mut editor = LayoutEditor::new(EditorSettings::default());
    let before = editor.tree().clone();

    assert_eq!(
        editor.remove(&id("root")),
        Err(LayoutError::RootProtected(id("root")))
    );
    assert_eq!(
        editor.split(&id("missing"), SplitAxis::Vertical),
        Err(LayoutError::NotFound(id("missing")))
    );
    assert!(matches!(
        editor.set_weight(&id("timeline"), 0.0),
        Err(LayoutError::InvalidWeight(_))
    ));

    assert_eq!(editor.tree(), &before);
    assert!(!editor.can_undo());
}

#[test]
fn test_freeform_session_and_reconstruction() {
    let mut editor = LayoutEditor::new(EditorSettings::default());
    editor.load_template(LayoutTemplate::Mix);

    assert_eq!(editor.set_mode(EditorMode::Freeform), ModeTransition::EnteredFreeform);
    assert_eq!(editor.freeform().len(), 3);

    let added = editor
        .add_panel(Rect::new(100.0, 100.0, 200.0, 150.0), PanelContent::AiAssistant)
        .unwrap();
    assert_eq!(editor.bring_to_front(&id("mixer")).unwrap(), 5);
    editor.move_panel(&added, 10.0, -20.0).unwrap();
    editor.remove_panel(&id("effects")).unwrap();
    assert_eq!(editor.freeform().len(), 3);

    // The tree is untouched until asked
    assert_eq!(editor.tree().leaf_count(), 3);
    assert!(editor.tree().contains(&id("effects")));

    let rebuilt = editor.reconstruct_from_freeform().unwrap();
    assert!(rebuilt.validate().is_ok());
    assert_eq!(rebuilt.leaf_count(), 3);
    assert!(rebuilt.contains(&added));
    assert!(!rebuilt.contains(&id("effects")));

    assert_eq!(editor.set_mode(EditorMode::Split), ModeTransition::ReturnedToSplit);
    assert!(editor.undo());
    assert!(editor.tree().contains(&id("effects")));

    // Back in split mode the freeform layout may be stale, so rebuilding is refused
    assert!(matches!(
        editor.reconstruct_from_freeform(),
        Err(EditorError::WrongMode { .. })
    ));
    assert!(editor.tree().contains(&id("effects")));
}

#[test]
fn test_freeform_edits_need_freeform_mode() {
    let mut editor = LayoutEditor::new(EditorSettings::default());
    let result = editor.move_panel(&id("timeline"), 5.0, 5.0);
    assert_eq!(
        result,
        Err(EditorError::WrongMode {
            expected: EditorMode::Freeform,
            actual: EditorMode::Split,
        })
    );
}

#[test]
fn test_reentering_freeform_rebuilds_from_tree() {
    let mut editor = LayoutEditor::new(EditorSettings::default());
    editor.set_mode(EditorMode::Freeform);
    editor.move_panel(&id("timeline"), 50.0, 50.0).unwrap();
    editor.set_mode(EditorMode::Split);

    assert_eq!(
        editor.set_mode(EditorMode::Freeform),
        ModeTransition::EnteredFreeform
    );
    let timeline = editor.freeform().get(&id("timeline")).unwrap();
    assert_eq!((timeline.x, timeline.y), (0.0, 0.0));
}

#[test]
fn test_resize_respects_configured_minimum() {
    let settings = EditorSettings {
        min_panel_size: 80.0,
        ..EditorSettings::default()
    };
    let mut editor = LayoutEditor::new(settings);
    editor.set_mode(EditorMode::Freeform);

    let rect = editor.resize_panel(&id("transport"), -10_000.0, -10_000.0).unwrap();
    assert_eq!((rect.width, rect.height), (80.0, 80.0));
}
