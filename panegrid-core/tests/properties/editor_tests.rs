//! Property-based tests for the editing session

use proptest::prelude::*;
use panegrid_core::config::EditorSettings;
use panegrid_core::editor::{EditorMode, LayoutEditor};
use panegrid_core::split::{NodeId, PanelContent, SplitAxis};

use super::strategies::{axis_strategy, content_strategy, pick, split_tree_strategy, tree_strategy};

#[derive(Debug, Clone)]
enum Edit {
    Split(prop::sample::Index, SplitAxis),
    Remove(prop::sample::Index),
    ChangeContent(prop::sample::Index, PanelContent),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (any::<prop::sample::Index>(), axis_strategy()).prop_map(|(i, a)| Edit::Split(i, a)),
        any::<prop::sample::Index>().prop_map(Edit::Remove),
        (any::<prop::sample::Index>(), content_strategy())
            .prop_map(|(i, c)| Edit::ChangeContent(i, c)),
    ]
}

/// Returns whether the edit succeeded
fn run(editor: &mut LayoutEditor, edit: &Edit) -> bool {
    let nodes = editor.tree().node_ids();
    match edit {
        Edit::Split(i, axis) => editor.split(&pick(&nodes, *i), *axis).is_ok(),
        Edit::Remove(i) => editor.remove(&pick(&nodes, *i)).is_ok(),
        Edit::ChangeContent(i, content) => {
            editor.change_content(&pick(&nodes, *i), *content).is_ok()
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// Undo right after a successful edit restores an equal tree;
    /// a rejected edit leaves tree and history alone
    #[test]
    fn prop_undo_round_trip(tree in tree_strategy(), edit in edit_strategy()) {
        let mut editor = LayoutEditor::from_tree(tree, EditorSettings::default());
        let before = editor.tree().clone();

        if run(&mut editor, &edit) {
            prop_assert_eq!(editor.history().len(), 1);
            prop_assert!(editor.undo());
        } else {
            prop_assert!(!editor.can_undo());
        }
        prop_assert_eq!(editor.tree(), &before);
    }

    /// Undoing every successful edit walks back to the start
    #[test]
    fn prop_undo_all_returns_to_start(
        tree in tree_strategy(),
        edits in proptest::collection::vec(edit_strategy(), 0..20),
    ) {
        let mut editor = LayoutEditor::from_tree(tree, EditorSettings::default());
        let start = editor.tree().clone();
        let successes = edits.iter().filter(|e| run(&mut editor, e)).count();

        prop_assert_eq!(editor.history().len(), successes);
        while editor.undo() {}
        prop_assert_eq!(editor.tree(), &start);
    }

    /// The history never grows past its limit
    #[test]
    fn prop_history_limit_holds(
        limit in 1usize..5,
        edits in proptest::collection::vec(edit_strategy(), 0..20),
    ) {
        let settings = EditorSettings { history_limit: Some(limit), ..EditorSettings::default() };
        let mut editor = LayoutEditor::new(settings);
        for edit in &edits {
            run(&mut editor, edit);
            prop_assert!(editor.history().len() <= limit);
        }
    }

    /// Round-tripping through freeform mode never touches the tree
    #[test]
    fn prop_mode_round_trip_keeps_tree(tree in split_tree_strategy(), dx in -50.0f64..50.0) {
        let mut editor = LayoutEditor::from_tree(tree, EditorSettings::default());
        let before = editor.tree().clone();

        editor.set_mode(EditorMode::Freeform);
        let first = editor.tree().leaf_ids()[0].clone();
        editor.move_panel(&first, dx, dx).unwrap();
        editor.set_mode(EditorMode::Split);

        prop_assert_eq!(editor.tree(), &before);
        prop_assert!(editor.freeform().get(&first).is_some());
        prop_assert!(editor.tree().contains(&NodeId::new("root")));
    }
}
