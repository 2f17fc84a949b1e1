//! Freeform to split tree reconstruction
//!
//! Freeform geometry has no inherent hierarchy, so the tree is recovered
//! heuristically:
//!
//! 1. The axis whose panel origins vary most is the dominant axis.
//! 2. Panels are walked along that axis (higher `z_index` first on ties). A
//!    panel whose gap from the previous panel's trailing edge exceeds the
//!    tolerance band starts a new group, otherwise it joins the current one.
//! 3. One group becomes a flat stack along the other axis. Several groups
//!    become a split along the dominant axis, and groups holding more than
//!    one panel are rebuilt recursively along the other axis.
//!
//! The result is always a valid tree, whatever the input looks like.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::freeform::FreeformPanel;
use crate::geometry::{Rect, finite_or_zero, mean, variance};
use crate::split::{
    IdGenerator, NodeId, PANEL_ID_PREFIX, PanelContent, PanelNode, SPLIT_ID_PREFIX, SplitAxis,
    fresh_id,
};
use crate::trace_operation;
use crate::tracing::span_names;

/// Default gap tolerance as a fraction of the average panel extent.
pub const DEFAULT_GAP_TOLERANCE: f64 = 0.3;

/// Smallest weight assigned to a reconstructed child.
pub const MIN_WEIGHT: f64 = 1.0;

/// Tuning knobs for [`freeform_to_split`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReconstructOptions {
    /// Fraction of the average panel extent along the clustering axis that
    /// two neighbouring panels may be apart and still share a group.
    pub gap_tolerance: f64,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        Self {
            gap_tolerance: DEFAULT_GAP_TOLERANCE,
        }
    }
}

impl ReconstructOptions {
    /// Creates options with the given tolerance.
    ///
    /// Negative or non-finite values fall back to zero.
    #[must_use]
    pub fn new(gap_tolerance: f64) -> Self {
        Self {
            gap_tolerance: finite_or_zero(gap_tolerance).max(0.0),
        }
    }
}

#[derive(Debug, Clone)]
struct Item {
    id: NodeId,
    content: PanelContent,
    rect: Rect,
    z_index: i64,
}

impl Item {
    fn from_panel(panel: &FreeformPanel) -> Self {
        Self {
            id: panel.id.clone(),
            content: panel.content,
            rect: Rect::new(
                finite_or_zero(panel.x),
                finite_or_zero(panel.y),
                finite_or_zero(panel.width).max(0.0),
                finite_or_zero(panel.height).max(0.0),
            ),
            z_index: panel.z_index,
        }
    }

    fn leaf(&self) -> PanelNode {
        PanelNode::new_leaf(self.id.clone(), self.content)
    }
}

struct Builder<'a> {
    options: ReconstructOptions,
    ids: &'a mut dyn IdGenerator,
    taken: HashSet<NodeId>,
}

impl Builder<'_> {
    fn split_id(&mut self) -> NodeId {
        let id = fresh_id(self.ids, SPLIT_ID_PREFIX, |c| self.taken.contains(c));
        self.taken.insert(id.clone());
        id
    }

    /// Builds a subtree for `items` (at least one), grouping along `axis`.
    fn build(&mut self, mut items: Vec<Item>, axis: SplitAxis) -> PanelNode {
        if items.len() == 1 {
            return items.remove(0).leaf();
        }

        let groups = cluster(items, axis, self.options.gap_tolerance);
        if groups.len() > 1 {
            return self.split_groups(groups, axis);
        }
        self.stack(groups.into_iter().flatten().collect(), axis.opposite())
    }

    /// Lays `items` side by side along `axis`, one leaf each.
    fn stack(&mut self, mut items: Vec<Item>, axis: SplitAxis) -> PanelNode {
        items.sort_by(|a, b| a.rect.leading(axis).total_cmp(&b.rect.leading(axis)));
        trace!(panels = items.len(), %axis, "Stacking grouped panels");
        let children = items
            .iter()
            .map(|item| (item.leaf(), weight_of(item.rect.extent(axis))))
            .collect();
        PanelNode::weighted_split(self.split_id(), axis, children)
    }

    fn split_groups(&mut self, groups: Vec<Vec<Item>>, axis: SplitAxis) -> PanelNode {
        let id = self.split_id();
        let children = groups
            .into_iter()
            .map(|group| {
                let rects: Vec<Rect> = group.iter().map(|i| i.rect).collect();
                let weight = weight_of(Rect::bounding(&rects).extent(axis));
                (self.build(group, axis.opposite()), weight)
            })
            .collect();
        PanelNode::weighted_split(id, axis, children)
    }
}

fn weight_of(extent: f64) -> f64 {
    extent.max(MIN_WEIGHT)
}

/// Picks the axis along which panel origins are most spread out.
///
/// Ties go to [`SplitAxis::Horizontal`].
#[must_use]
pub fn dominant_axis(rects: &[Rect]) -> SplitAxis {
    let xs: Vec<f64> = rects.iter().map(|r| r.x).collect();
    let ys: Vec<f64> = rects.iter().map(|r| r.y).collect();
    if variance(&ys) > variance(&xs) {
        SplitAxis::Vertical
    } else {
        SplitAxis::Horizontal
    }
}

/// Orders by leading edge along `axis`, higher `z_index` first on ties,
/// then cuts the sequence wherever the gap to the previous panel exceeds
/// `tolerance` times the mean extent.
fn cluster(mut items: Vec<Item>, axis: SplitAxis, tolerance: f64) -> Vec<Vec<Item>> {
    items.sort_by(|a, b| b.z_index.cmp(&a.z_index));
    items.sort_by(|a, b| a.rect.leading(axis).total_cmp(&b.rect.leading(axis)));

    let extents: Vec<f64> = items.iter().map(|i| i.rect.extent(axis)).collect();
    let band = tolerance * mean(&extents);

    let mut groups: Vec<Vec<Item>> = Vec::new();
    let mut previous = f64::NEG_INFINITY;
    for item in items {
        let separation = item.rect.leading(axis) - previous;
        previous = item.rect.trailing(axis);
        match groups.last_mut() {
            Some(group) if separation <= band => group.push(item),
            _ => {
                trace!(id = %item.id, separation, band, "Starting new group");
                groups.push(vec![item]);
            }
        }
    }
    groups
}

/// Rebuilds a split tree from freeform panels.
///
/// - No panels: a single empty leaf with a fresh id.
/// - One panel: a single leaf with that panel's id and content.
/// - Otherwise: a tree whose leaves are exactly the input panels and whose
///   split ids are drawn from `ids` without colliding with any panel id.
///
/// Panels sharing an id keep the first occurrence's id; later duplicates are
/// given fresh ids so the tree stays valid.
#[must_use]
pub fn freeform_to_split(
    panels: &[FreeformPanel],
    options: &ReconstructOptions,
    ids: &mut dyn IdGenerator,
) -> PanelNode {
    let span = trace_operation!(span_names::FREEFORM_TO_SPLIT, panels = panels.len());
    let _guard = span.enter();

    let mut taken: HashSet<NodeId> = panels.iter().map(|p| p.id.clone()).collect();
    match panels {
        [] => PanelNode::new_leaf(
            fresh_id(ids, PANEL_ID_PREFIX, |c| taken.contains(c)),
            PanelContent::Empty,
        ),
        [panel] => PanelNode::new_leaf(panel.id.clone(), panel.content),
        _ => {
            let mut seen = HashSet::new();
            let mut items = Vec::with_capacity(panels.len());
            for panel in panels {
                let mut item = Item::from_panel(panel);
                if !seen.insert(item.id.clone()) {
                    let renamed = fresh_id(ids, PANEL_ID_PREFIX, |c| taken.contains(c));
                    debug!(
                        duplicate = %item.id,
                        renamed = %renamed,
                        "Renaming duplicate panel id"
                    );
                    taken.insert(renamed.clone());
                    item.id = renamed;
                }
                items.push(item);
            }

            let rects: Vec<Rect> = items.iter().map(|i| i.rect).collect();
            let axis = dominant_axis(&rects);
            debug!(%axis, "Dominant axis detected");

            let mut builder = Builder {
                options: *options,
                ids,
                taken,
            };
            builder.build(items, axis)
        }
    }
}
