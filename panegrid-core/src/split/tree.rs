//! Panel tree structure for split layouts
//!
//! Each node is either a leaf panel (showing one kind of content) or a split
//! node that partitions its space among two or more weighted children along
//! one axis.
//!
//! # Tree Structure
//!
//! ```text
//! Split(root, Vertical)
//! ├── [3] Leaf(panel-1, timeline)
//! └── [1] Split(split-4, Horizontal)
//!     ├── [1] Leaf(panel-2, mixer)
//!     └── [1] Leaf(panel-3, transport)
//! ```
//!
//! Weights are relative: a child's share of its parent is its weight divided
//! by the sum of its siblings' weights.

use std::collections::HashSet;
use std::fmt::Write as _;

use super::error::{LayoutError, LayoutResult};
use super::ids::{IdGenerator, PANEL_ID_PREFIX, fresh_id};
use super::types::{NodeId, PanelContent, SplitAxis};

/// Weight given to children created by a split.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Returns true if `weight` is usable as a sibling share.
#[must_use]
pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

/// A node in the panel tree.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelNode {
    /// A leaf panel showing one kind of content.
    Leaf(LeafPanel),
    /// A split dividing its space among weighted children.
    Split(SplitNode),
}

/// A leaf panel in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafPanel {
    /// Unique identifier for this panel.
    pub id: NodeId,
    /// What the panel displays.
    pub content: PanelContent,
}

/// A split node with an ordered list of weighted children.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitNode {
    /// Unique identifier for this split.
    pub id: NodeId,
    /// Axis along which children are laid out.
    pub axis: SplitAxis,
    /// Children in layout order (left to right, or top to bottom).
    pub children: Vec<SplitChild>,
}

/// One child slot of a split node.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitChild {
    /// The child subtree.
    pub node: PanelNode,
    /// Relative share of the parent's extent along the split axis.
    pub weight: f64,
}

/// Ids involved in a successful split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertedSplit {
    /// New leaf carrying the original panel's content.
    pub original: NodeId,
    /// New empty leaf.
    pub created: NodeId,
}

impl LeafPanel {
    /// Creates a leaf panel.
    #[must_use]
    pub fn new(id: impl Into<NodeId>, content: PanelContent) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }
}

impl SplitChild {
    /// Creates a child slot with the default weight.
    #[must_use]
    pub const fn new(node: PanelNode) -> Self {
        Self {
            node,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Creates a child slot with an explicit weight.
    #[must_use]
    pub const fn weighted(node: PanelNode, weight: f64) -> Self {
        Self { node, weight }
    }
}

impl SplitNode {
    /// Creates a split node from prepared child slots.
    #[must_use]
    pub fn new(id: impl Into<NodeId>, axis: SplitAxis, children: Vec<SplitChild>) -> Self {
        Self {
            id: id.into(),
            axis,
            children,
        }
    }

    /// Creates a split node whose children all share space equally.
    #[must_use]
    pub fn even(id: impl Into<NodeId>, axis: SplitAxis, nodes: Vec<PanelNode>) -> Self {
        Self::new(id, axis, nodes.into_iter().map(SplitChild::new).collect())
    }
}

impl PanelNode {
    /// Creates a leaf node.
    #[must_use]
    pub fn new_leaf(id: impl Into<NodeId>, content: PanelContent) -> Self {
        Self::Leaf(LeafPanel::new(id, content))
    }

    /// Creates a split node whose children share space equally.
    #[must_use]
    pub fn even_split(id: impl Into<NodeId>, axis: SplitAxis, nodes: Vec<Self>) -> Self {
        Self::Split(SplitNode::even(id, axis, nodes))
    }

    /// Creates a split node from weighted children.
    #[must_use]
    pub fn weighted_split(
        id: impl Into<NodeId>,
        axis: SplitAxis,
        children: Vec<(Self, f64)>,
    ) -> Self {
        Self::Split(SplitNode::new(
            id,
            axis,
            children
                .into_iter()
                .map(|(node, weight)| SplitChild::weighted(node, weight))
                .collect(),
        ))
    }

    /// Returns this node's id.
    #[must_use]
    pub const fn id(&self) -> &NodeId {
        match self {
            Self::Leaf(leaf) => &leaf.id,
            Self::Split(split) => &split.id,
        }
    }

    pub(crate) fn set_id(&mut self, id: NodeId) {
        match self {
            Self::Leaf(leaf) => leaf.id = id,
            Self::Split(split) => split.id = id,
        }
    }

    /// Returns true if this is a leaf node.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the leaf panel if this is a leaf node.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&LeafPanel> {
        match self {
            Self::Leaf(panel) => Some(panel),
            Self::Split(_) => None,
        }
    }

    /// Returns the split node if this is a split node.
    #[must_use]
    pub const fn as_split(&self) -> Option<&SplitNode> {
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => Some(split),
        }
    }

    // ========================================================================
    // Tree Traversal Methods
    // ========================================================================

    /// Finds any node by id.
    #[must_use]
    pub fn find(&self, id: &NodeId) -> Option<&Self> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => split.children.iter().find_map(|c| c.node.find(id)),
        }
    }

    /// Finds any node by id and returns a mutable reference.
    #[must_use]
    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut Self> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => split.children.iter_mut().find_map(|c| c.node.find_mut(id)),
        }
    }

    /// Finds a leaf panel by id.
    #[must_use]
    pub fn find_leaf(&self, id: &NodeId) -> Option<&LeafPanel> {
        self.find(id).and_then(Self::as_leaf)
    }

    /// Returns true if the tree contains a node with the given id.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Returns the split node that directly contains `id`.
    #[must_use]
    pub fn parent_of(&self, id: &NodeId) -> Option<&SplitNode> {
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => {
                if split.children.iter().any(|c| c.node.id() == id) {
                    Some(split)
                } else {
                    split.children.iter().find_map(|c| c.node.parent_of(id))
                }
            }
        }
    }

    /// Returns the weight of the child slot holding `id`.
    ///
    /// The root has no slot and yields `None`.
    #[must_use]
    pub fn weight_of(&self, id: &NodeId) -> Option<f64> {
        self.parent_of(id).and_then(|parent| {
            parent
                .children
                .iter()
                .find(|c| c.node.id() == id)
                .map(|c| c.weight)
        })
    }

    /// Returns all leaf panels in pre-order (depth-first, in layout order).
    #[must_use]
    pub fn leaves(&self) -> Vec<&LeafPanel> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a LeafPanel>) {
        match self {
            Self::Leaf(panel) => leaves.push(panel),
            Self::Split(split) => {
                for child in &split.children {
                    child.node.collect_leaves(leaves);
                }
            }
        }
    }

    /// Returns all leaf ids in pre-order.
    #[must_use]
    pub fn leaf_ids(&self) -> Vec<NodeId> {
        self.leaves().into_iter().map(|l| l.id.clone()).collect()
    }

    /// Returns the ids of every node, splits included, in pre-order.
    #[must_use]
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        self.collect_node_ids(&mut ids);
        ids
    }

    fn collect_node_ids(&self, ids: &mut Vec<NodeId>) {
        ids.push(self.id().clone());
        if let Self::Split(split) = self {
            for child in &split.children {
                child.node.collect_node_ids(ids);
            }
        }
    }

    /// Returns the number of leaf panels.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Returns the number of nodes, splits included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_ids().len()
    }

    /// Returns the depth of the tree.
    ///
    /// A single leaf has depth 0. Each level of splits adds 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Split(split) => {
                1 + split
                    .children
                    .iter()
                    .map(|c| c.node.depth())
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Checks the structural invariants of the tree.
    ///
    /// # Errors
    ///
    /// Returns the first violation found in pre-order: a split with fewer
    /// than two children, a weight that is not finite and positive, or an id
    /// used twice.
    pub fn validate(&self) -> LayoutResult<()> {
        let mut seen = HashSet::new();
        self.validate_into(&mut seen)
    }

    fn validate_into<'a>(&'a self, seen: &mut HashSet<&'a NodeId>) -> LayoutResult<()> {
        if !seen.insert(self.id()) {
            return Err(LayoutError::DuplicateId(self.id().clone()));
        }
        if let Self::Split(split) = self {
            if split.children.len() < 2 {
                return Err(LayoutError::TooFewChildren(split.id.clone()));
            }
            for child in &split.children {
                if !is_valid_weight(child.weight) {
                    return Err(LayoutError::InvalidWeight(child.weight));
                }
                child.node.validate_into(seen)?;
            }
        }
        Ok(())
    }

    /// Renders the tree as an indented outline, one node per line.
    #[must_use]
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, "", None);
        out
    }

    fn write_outline(&self, out: &mut String, prefix: &str, weight: Option<f64>) {
        let weight = weight.map(|w| format!("[{w}] ")).unwrap_or_default();
        let _ = match self {
            Self::Leaf(leaf) => writeln!(out, "{weight}{}: {}", leaf.id, leaf.content),
            Self::Split(split) => writeln!(out, "{weight}{} ({})", split.id, split.axis),
        };
        if let Self::Split(split) = self {
            let last = split.children.len().saturating_sub(1);
            for (index, child) in split.children.iter().enumerate() {
                let (branch, indent) = if index == last {
                    ("└── ", "    ")
                } else {
                    ("├── ", "│   ")
                };
                out.push_str(prefix);
                out.push_str(branch);
                child
                    .node
                    .write_outline(out, &format!("{prefix}{indent}"), Some(child.weight));
            }
        }
    }

    // ========================================================================
    // Tree Mutation Methods
    // ========================================================================

    /// Splits a leaf panel along `axis`.
    ///
    /// The leaf with `target` becomes a split node (keeping the id `target`)
    /// with two children of weight 1: a new leaf with the original content
    /// and a new empty leaf. Both leaves get fresh ids from `ids`.
    ///
    /// # Errors
    ///
    /// - `LayoutError::NotFound` if no node has the id
    /// - `LayoutError::NotALeaf` if the node is a split
    pub fn insert_split(
        &mut self,
        target: &NodeId,
        axis: SplitAxis,
        ids: &mut dyn IdGenerator,
    ) -> LayoutResult<InsertedSplit> {
        let taken: HashSet<NodeId> = self.node_ids().into_iter().collect();
        let node = self
            .find_mut(target)
            .ok_or_else(|| LayoutError::NotFound(target.clone()))?;
        let Self::Leaf(leaf) = node else {
            return Err(LayoutError::NotALeaf(target.clone()));
        };
        let content = leaf.content;

        let original = fresh_id(ids, PANEL_ID_PREFIX, |c| taken.contains(c));
        let created = fresh_id(ids, PANEL_ID_PREFIX, |c| {
            taken.contains(c) || *c == original
        });

        *node = Self::even_split(
            target.clone(),
            axis,
            vec![
                Self::new_leaf(original.clone(), content),
                Self::new_leaf(created.clone(), PanelContent::Empty),
            ],
        );

        Ok(InsertedSplit { original, created })
    }

    /// Removes the node with `target` (and its subtree) from the tree.
    ///
    /// If the parent split is left with a single child, the parent collapses:
    /// the remaining child takes the parent's slot. The root is never
    /// collapsed away; it adopts the remaining child's fields but keeps its
    /// own id.
    ///
    /// Returns the removed subtree.
    ///
    /// # Errors
    ///
    /// - `LayoutError::RootProtected` if `target` is the root
    /// - `LayoutError::NotFound` if no node has the id
    pub fn remove(&mut self, target: &NodeId) -> LayoutResult<Self> {
        if self.id() == target {
            return Err(LayoutError::RootProtected(target.clone()));
        }
        Self::remove_from(self, target, true).ok_or_else(|| LayoutError::NotFound(target.clone()))
    }

    fn remove_from(node: &mut Self, target: &NodeId, is_root: bool) -> Option<Self> {
        let Self::Split(split) = node else {
            return None;
        };

        if let Some(pos) = split.children.iter().position(|c| c.node.id() == target) {
            let removed = split.children.remove(pos).node;
            if split.children.len() == 1 {
                let kept_id = is_root.then(|| split.id.clone());
                if let Some(remaining) = split.children.pop() {
                    *node = remaining.node;
                    if let Some(id) = kept_id {
                        node.set_id(id);
                    }
                }
            }
            return Some(removed);
        }

        split
            .children
            .iter_mut()
            .find_map(|c| Self::remove_from(&mut c.node, target, false))
    }

    /// Sets the content of a leaf panel.
    ///
    /// Returns the previous content.
    ///
    /// # Errors
    ///
    /// - `LayoutError::NotFound` if no node has the id
    /// - `LayoutError::NotALeaf` if the node is a split
    pub fn set_content(
        &mut self,
        target: &NodeId,
        content: PanelContent,
    ) -> LayoutResult<PanelContent> {
        match self.find_mut(target) {
            None => Err(LayoutError::NotFound(target.clone())),
            Some(Self::Split(_)) => Err(LayoutError::NotALeaf(target.clone())),
            Some(Self::Leaf(leaf)) => Ok(std::mem::replace(&mut leaf.content, content)),
        }
    }

    /// Sets the weight of the child slot holding `target`.
    ///
    /// Returns the previous weight.
    ///
    /// # Errors
    ///
    /// - `LayoutError::InvalidWeight` if the weight is not finite and positive
    /// - `LayoutError::RootProtected` if `target` is the root
    /// - `LayoutError::NotFound` if no node has the id
    pub fn set_weight(&mut self, target: &NodeId, weight: f64) -> LayoutResult<f64> {
        if !is_valid_weight(weight) {
            return Err(LayoutError::InvalidWeight(weight));
        }
        if self.id() == target {
            return Err(LayoutError::RootProtected(target.clone()));
        }
        self.child_slot_mut(target)
            .map(|slot| std::mem::replace(&mut slot.weight, weight))
            .ok_or_else(|| LayoutError::NotFound(target.clone()))
    }

    fn child_slot_mut(&mut self, id: &NodeId) -> Option<&mut SplitChild> {
        let Self::Split(split) = self else {
            return None;
        };
        if let Some(pos) = split.children.iter().position(|c| c.node.id() == id) {
            return split.children.get_mut(pos);
        }
        split
            .children
            .iter_mut()
            .find_map(|c| c.node.child_slot_mut(id))
    }
}
