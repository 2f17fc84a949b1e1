//! Property-based tests for freeform to tree reconstruction
//!
//! The reconstructor is heuristic, so these tests pin down what it must
//! always guarantee rather than the exact shape it picks.

use std::collections::BTreeSet;

use proptest::prelude::*;
use panegrid_core::convert::{ReconstructOptions, freeform_to_split, split_to_freeform};
use panegrid_core::freeform::FreeformPanel;
use panegrid_core::geometry::Rect;
use panegrid_core::split::{NodeId, PanelContent, SequentialIds, SplitAxis};

use super::strategies::{tree_strategy, wild_panels_strategy};

fn id_set<'a>(ids: impl IntoIterator<Item = &'a NodeId>) -> BTreeSet<String> {
    ids.into_iter().map(ToString::to_string).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Never panics, always valid, and leaves are exactly the input panels
    #[test]
    fn prop_reconstruction_is_total(
        panels in wild_panels_strategy(12),
        tolerance in 0.0f64..1.0,
    ) {
        let tree = freeform_to_split(
            &panels,
            &ReconstructOptions::new(tolerance),
            &mut SequentialIds::new(),
        );

        prop_assert!(tree.validate().is_ok(), "invalid tree: {:?}", tree);
        if panels.is_empty() {
            prop_assert!(tree.is_leaf());
        } else {
            let leaf_ids = tree.leaf_ids();
            prop_assert_eq!(
                id_set(&leaf_ids),
                id_set(panels.iter().map(|p| &p.id))
            );
            prop_assert_eq!(leaf_ids.len(), panels.len());
        }
    }

    /// Leaves keep the content of the panel they came from
    #[test]
    fn prop_reconstruction_keeps_content(panels in wild_panels_strategy(8)) {
        let tree = freeform_to_split(
            &panels,
            &ReconstructOptions::default(),
            &mut SequentialIds::new(),
        );
        for panel in &panels {
            let leaf = tree.find_leaf(&panel.id);
            prop_assert_eq!(leaf.map(|l| l.content), Some(panel.content));
        }
    }

    /// Converting a tree to freeform and back keeps its leaves
    #[test]
    fn prop_tree_round_trip_keeps_leaves(tree in tree_strategy()) {
        let layout = split_to_freeform(&tree, Rect::canvas(1200.0, 800.0));
        let rebuilt = freeform_to_split(
            layout.panels(),
            &ReconstructOptions::default(),
            &mut SequentialIds::new(),
        );
        prop_assert!(rebuilt.validate().is_ok());
        prop_assert_eq!(id_set(&rebuilt.leaf_ids()), id_set(&tree.leaf_ids()));
    }

    /// A jittered row of spaced tiles becomes one horizontal split in x order
    #[test]
    fn prop_row_of_tiles_is_recovered(
        width in 100.0f64..=230.0,
        jitter in proptest::collection::vec(-10.0f64..=10.0, 4),
        z in proptest::collection::vec(0i64..10, 4),
    ) {
        let panels: Vec<FreeformPanel> = (0..4)
            .map(|i| FreeformPanel::new(
                format!("tile-{i}"),
                Rect::new(300.0 * i as f64, jitter[i], width, 800.0),
                PanelContent::Empty,
                z[i],
            ))
            .collect();

        let tree = freeform_to_split(
            &panels,
            &ReconstructOptions::default(),
            &mut SequentialIds::new(),
        );

        let split = tree.as_split().unwrap();
        prop_assert_eq!(split.axis, SplitAxis::Horizontal);
        prop_assert_eq!(split.children.len(), 4);
        prop_assert!(split.children.iter().all(|c| c.weight == width));
        let expected: Vec<NodeId> = (0..4).map(|i| NodeId::new(format!("tile-{i}"))).collect();
        prop_assert_eq!(tree.leaf_ids(), expected);
    }
}
