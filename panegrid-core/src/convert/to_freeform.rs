//! Split tree to freeform conversion

use tracing::debug;

use crate::freeform::{FreeformLayout, FreeformPanel};
use crate::geometry::Rect;
use crate::split::PanelNode;
use crate::trace_operation;
use crate::tracing::span_names;

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;

/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 800.0;

/// Default canvas the tree is laid out on.
pub const DEFAULT_CANVAS: Rect = Rect::canvas(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT);

/// Lays the tree out inside `bounds` and returns one panel per leaf.
///
/// Each split hands its children consecutive slices of its rectangle along
/// its axis, sized by `weight / sum of sibling weights`. Panels are emitted in
/// pre-order with `z_index` counting up from 1, and together they tile
/// `bounds` exactly.
#[must_use]
pub fn split_to_freeform(tree: &PanelNode, bounds: Rect) -> FreeformLayout {
    let span = trace_operation!(span_names::SPLIT_TO_FREEFORM, root = %tree.id());
    let _guard = span.enter();

    let mut panels = Vec::with_capacity(tree.leaf_count());
    lay_out(tree, bounds, &mut panels);
    debug!(panels = panels.len(), "Tree laid out");
    FreeformLayout::from_panels(panels)
}

fn lay_out(node: &PanelNode, rect: Rect, panels: &mut Vec<FreeformPanel>) {
    match node {
        PanelNode::Leaf(leaf) => {
            let z_index = i64::try_from(panels.len()).map_or(i64::MAX, |n| n + 1);
            panels.push(FreeformPanel::new(leaf.id.clone(), rect, leaf.content, z_index));
        }
        PanelNode::Split(split) => {
            let weights: Vec<f64> = split.children.iter().map(|c| c.weight).collect();
            let pieces = rect.subdivide(split.axis, &weights);
            for (child, piece) in split.children.iter().zip(pieces) {
                lay_out(&child.node, piece, panels);
            }
        }
    }
}
