//! Layout scenarios with known geometry

use panegrid_core::convert::{
    DEFAULT_CANVAS, ReconstructOptions, freeform_to_split, split_to_freeform,
};
use panegrid_core::freeform::FreeformPanel;
use panegrid_core::geometry::Rect;
use panegrid_core::split::{
    LayoutTemplate, NodeId, PanelContent, PanelNode, SequentialIds, SplitAxis,
};

fn id(value: &str) -> NodeId {
    NodeId::new(value)
}

fn assert_rect_close(actual: Rect, expected: Rect) {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-6;
    assert!(
        close(actual.x, expected.x)
            && close(actual.y, expected.y)
            && close(actual.width, expected.width)
            && close(actual.height, expected.height),
        "{actual:?} != {expected:?}"
    );
}

#[test]
fn test_splitting_single_timeline_gives_two_halves() {
    let mut tree = PanelNode::new_leaf("root", PanelContent::Timeline);
    let inserted = tree
        .insert_split(&id("root"), SplitAxis::Horizontal, &mut SequentialIds::new())
        .unwrap();

    let layout = split_to_freeform(&tree, DEFAULT_CANVAS);
    assert_eq!(layout.len(), 2);

    let left = layout.get(&inserted.original).unwrap();
    assert_eq!(left.content, PanelContent::Timeline);
    assert_rect_close(left.rect(), Rect::new(0.0, 0.0, 600.0, 800.0));

    let right = layout.get(&inserted.created).unwrap();
    assert_eq!(right.content, PanelContent::Empty);
    assert_rect_close(right.rect(), Rect::new(600.0, 0.0, 600.0, 800.0));
}

#[test]
fn test_four_panel_row_reconstructs_as_even_split() {
    let panels: Vec<FreeformPanel> = (0u8..4)
        .map(|i| {
            FreeformPanel::new(
                format!("p{i}"),
                Rect::new(f64::from(i) * 300.0, 0.0, 200.0, 800.0),
                PanelContent::all()[usize::from(i)],
                1,
            )
        })
        .collect();

    let tree = freeform_to_split(
        &panels,
        &ReconstructOptions::default(),
        &mut SequentialIds::new(),
    );

    let split = tree.as_split().expect("row should become a split");
    assert_eq!(split.axis, SplitAxis::Horizontal);
    assert_eq!(split.children.len(), 4);
    assert!(split.children.iter().all(|c| c.weight == 200.0));
    assert_eq!(tree.leaf_ids(), vec![id("p0"), id("p1"), id("p2"), id("p3")]);

    // Gaps are absorbed: equal weights share the canvas evenly
    let relaid = split_to_freeform(&tree, DEFAULT_CANVAS);
    for (index, (before, after)) in panels.iter().zip(relaid.panels()).enumerate() {
        assert_eq!(before.id, after.id);
        let x = 300.0 * index as f64;
        assert_rect_close(after.rect(), Rect::new(x, 0.0, 300.0, 800.0));
    }
}

#[test]
fn test_touching_template_tiles_reconstruct_as_flat_stack() {
    let template = LayoutTemplate::Arrange.build();
    let layout = split_to_freeform(&template, DEFAULT_CANVAS);

    let rebuilt = freeform_to_split(
        layout.panels(),
        &ReconstructOptions::default(),
        &mut SequentialIds::new(),
    );

    // Tiles touch along x, so they form one group stacked top to bottom
    let root = rebuilt.as_split().unwrap();
    assert_eq!(root.axis, SplitAxis::Vertical);
    assert_eq!(rebuilt.depth(), 1);
    assert_eq!(rebuilt.leaf_ids(), vec![id("timeline"), id("mixer"), id("transport")]);
    let heights: Vec<f64> = layout.panels().iter().map(|p| p.height).collect();
    for (child, height) in root.children.iter().zip(heights) {
        assert!((child.weight - height).abs() < 1e-9);
    }
}

#[test]
fn test_spaced_columns_reconstruct_as_nested_split() {
    let panels = vec![
        FreeformPanel::new("left", Rect::new(0.0, 0.0, 300.0, 800.0), PanelContent::Timeline, 1),
        FreeformPanel::new("top", Rect::new(600.0, 0.0, 300.0, 300.0), PanelContent::Mixer, 2),
        FreeformPanel::new(
            "bottom",
            Rect::new(600.0, 500.0, 300.0, 300.0),
            PanelContent::Effects,
            3,
        ),
    ];

    let tree = freeform_to_split(
        &panels,
        &ReconstructOptions::default(),
        &mut SequentialIds::new(),
    );

    let root = tree.as_split().unwrap();
    assert_eq!(root.axis, SplitAxis::Horizontal);
    assert_eq!(root.children[1].node.as_split().unwrap().axis, SplitAxis::Vertical);
    assert_eq!(tree.leaf_ids(), vec![id("left"), id("top"), id("bottom")]);

    // Equal column weights give each column half of the canvas
    let relaid = split_to_freeform(&tree, DEFAULT_CANVAS);
    let left = relaid.get(&id("left")).unwrap();
    assert_rect_close(left.rect(), Rect::new(0.0, 0.0, 600.0, 800.0));
    let bottom = relaid.get(&id("bottom")).unwrap();
    assert_rect_close(bottom.rect(), Rect::new(600.0, 400.0, 600.0, 400.0));
}

#[test]
fn test_every_template_keeps_its_leaves_through_freeform() {
    for template in LayoutTemplate::all() {
        let tree = template.build();
        let layout = split_to_freeform(&tree, DEFAULT_CANVAS);
        let rebuilt = freeform_to_split(
            layout.panels(),
            &ReconstructOptions::default(),
            &mut SequentialIds::new(),
        );

        assert!(rebuilt.validate().is_ok(), "{template}");
        let mut expected = tree.leaf_ids();
        let mut actual = rebuilt.leaf_ids();
        expected.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        actual.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(actual, expected, "{template}");
    }
}

#[test]
fn test_overlapping_stack_stays_flat() {
    let panels = vec![
        FreeformPanel::new("back", Rect::new(0.0, 0.0, 400.0, 400.0), PanelContent::Mixer, 1),
        FreeformPanel::new("front", Rect::new(20.0, 20.0, 400.0, 400.0), PanelContent::Effects, 2),
    ];

    let tree = freeform_to_split(
        &panels,
        &ReconstructOptions::default(),
        &mut SequentialIds::new(),
    );

    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.leaf_count(), 2);
}
