//! Shared strategies for the property suites

use proptest::prelude::*;
use panegrid_core::freeform::FreeformPanel;
use panegrid_core::geometry::Rect;
use panegrid_core::split::{NodeId, PanelContent, PanelNode, SplitAxis};

/// Tree shape without ids; ids are assigned when materialized.
#[derive(Debug, Clone)]
pub enum Shape {
    Leaf(PanelContent),
    Split(SplitAxis, Vec<(Shape, f64)>),
}

pub fn axis_strategy() -> impl Strategy<Value = SplitAxis> {
    prop_oneof![Just(SplitAxis::Horizontal), Just(SplitAxis::Vertical)]
}

pub fn content_strategy() -> impl Strategy<Value = PanelContent> {
    proptest::sample::select(PanelContent::all().to_vec())
}

pub fn weight_strategy() -> impl Strategy<Value = f64> {
    0.1f64..10.0
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    content_strategy()
        .prop_map(Shape::Leaf)
        .prop_recursive(4, 32, 4, |inner| {
            (
                axis_strategy(),
                proptest::collection::vec((inner, weight_strategy()), 2..=4),
            )
                .prop_map(|(axis, children)| Shape::Split(axis, children))
        })
}

fn materialize(shape: &Shape, counter: &mut usize, is_root: bool) -> PanelNode {
    let id = if is_root {
        "root".to_owned()
    } else {
        *counter += 1;
        format!("n{counter}")
    };
    match shape {
        Shape::Leaf(content) => PanelNode::new_leaf(id, *content),
        Shape::Split(axis, children) => PanelNode::weighted_split(
            id,
            *axis,
            children
                .iter()
                .map(|(child, weight)| (materialize(child, counter, false), *weight))
                .collect(),
        ),
    }
}

/// Arbitrary well-formed tree rooted at `"root"`.
pub fn tree_strategy() -> impl Strategy<Value = PanelNode> {
    shape_strategy().prop_map(|shape| materialize(&shape, &mut 0, true))
}

/// Arbitrary tree that contains at least one split.
pub fn split_tree_strategy() -> impl Strategy<Value = PanelNode> {
    (
        axis_strategy(),
        proptest::collection::vec((shape_strategy(), weight_strategy()), 2..=3),
    )
        .prop_map(|(axis, children)| materialize(&Shape::Split(axis, children), &mut 0, true))
}

/// Positive canvas rectangle.
pub fn bounds_strategy() -> impl Strategy<Value = Rect> {
    (0.0f64..500.0, 0.0f64..500.0, 10.0f64..4000.0, 10.0f64..4000.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

/// Any `f64`, NaN and infinities included.
fn wild_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -2000.0f64..2000.0,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
        1 => Just(0.0),
    ]
}

/// Freeform panels with unique ids and arbitrary (possibly degenerate) geometry.
pub fn wild_panels_strategy(max: usize) -> impl Strategy<Value = Vec<FreeformPanel>> {
    proptest::collection::vec(
        (
            wild_f64(),
            wild_f64(),
            wild_f64(),
            wild_f64(),
            content_strategy(),
            -5i64..5,
        ),
        0..=max,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (x, y, w, h, content, z_index))| FreeformPanel {
                id: NodeId::new(format!("p{i}")),
                x,
                y,
                width: w,
                height: h,
                content,
                z_index,
            })
            .collect()
    })
}

/// Index into a non-empty slice chosen by proptest.
pub fn pick<T: Clone>(items: &[T], index: prop::sample::Index) -> T {
    items[index.index(items.len())].clone()
}
