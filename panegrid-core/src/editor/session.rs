//! The editing session that owns the live document

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use super::history::EditHistory;
use super::mode::{EditorMode, ModeTransition};
use crate::config::EditorSettings;
use crate::convert::{freeform_to_split, split_to_freeform};
use crate::document::{DocumentMetadata, LayoutDocument};
use crate::freeform::FreeformLayout;
use crate::geometry::Rect;
use crate::split::{
    IdGenerator, InsertedSplit, LayoutError, LayoutResult, LayoutTemplate, NodeId, PanelContent,
    PanelNode, SequentialIds, SplitAxis,
};
use crate::trace_operation;
use crate::tracing::span_names;

/// Errors from editor operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditorError {
    /// The operation needs a different editor mode
    #[error("operation requires {expected} mode, editor is in {actual} mode")]
    WrongMode {
        /// Mode the operation needs
        expected: EditorMode,
        /// Current mode
        actual: EditorMode,
    },

    /// The layout rejected the edit
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Result type for editor operations
pub type EditorResult<T> = std::result::Result<T, EditorError>;

/// Owns the split tree, the derived freeform layout and the undo history.
///
/// Tree edits run on a clone and are swapped in only when they succeed, so a
/// rejected edit leaves both the tree and the history untouched.
pub struct LayoutEditor {
    tree: PanelNode,
    freeform: FreeformLayout,
    mode: EditorMode,
    history: EditHistory,
    metadata: DocumentMetadata,
    settings: EditorSettings,
    ids: Box<dyn IdGenerator>,
}

impl fmt::Debug for LayoutEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutEditor")
            .field("tree", &self.tree)
            .field("mode", &self.mode)
            .field("history", &self.history.len())
            .field("freeform", &self.freeform.len())
            .finish_non_exhaustive()
    }
}

impl Default for LayoutEditor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl LayoutEditor {
    /// Creates an editor on the settings' default template.
    #[must_use]
    pub fn new(settings: EditorSettings) -> Self {
        let tree = settings.default_template.build();
        Self::from_tree(tree, settings)
    }

    /// Creates an editor on an existing tree.
    #[must_use]
    pub fn from_tree(tree: PanelNode, settings: EditorSettings) -> Self {
        Self {
            tree,
            freeform: FreeformLayout::new(),
            mode: EditorMode::Split,
            history: EditHistory::with_limit(settings.history_limit),
            metadata: DocumentMetadata::now(settings.density),
            settings,
            ids: Box::new(SequentialIds::new()),
        }
    }

    /// Replaces the id generator, e.g. with [`crate::split::RandomIds`].
    #[must_use]
    pub fn with_id_generator(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns the live split tree.
    #[must_use]
    pub const fn tree(&self) -> &PanelNode {
        &self.tree
    }

    /// Returns the freeform layout derived on the last switch into freeform.
    #[must_use]
    pub const fn freeform(&self) -> &FreeformLayout {
        &self.freeform
    }

    /// Returns the current mode.
    #[must_use]
    pub const fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Returns the settings in use.
    #[must_use]
    pub const fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Returns the undo history.
    #[must_use]
    pub const fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Returns true if [`LayoutEditor::undo`] would do something.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    // ========================================================================
    // Tree edits
    // ========================================================================

    fn apply<T>(
        &mut self,
        operation: &'static str,
        edit: impl FnOnce(&mut PanelNode, &mut dyn IdGenerator) -> LayoutResult<T>,
    ) -> LayoutResult<T> {
        let mut draft = self.tree.clone();
        match edit(&mut draft, self.ids.as_mut()) {
            Ok(value) => {
                let previous = std::mem::replace(&mut self.tree, draft);
                self.history.push(previous);
                Ok(value)
            }
            Err(error) => {
                debug!(operation, %error, "Edit rejected");
                Err(error)
            }
        }
    }

    /// Splits a leaf panel. See [`PanelNode::insert_split`].
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `NotALeaf`; the document is unchanged.
    pub fn split(&mut self, target: &NodeId, axis: SplitAxis) -> LayoutResult<InsertedSplit> {
        self.apply("split", |tree, ids| tree.insert_split(target, axis, ids))
    }

    /// Removes a node, collapsing its parent if needed. See [`PanelNode::remove`].
    ///
    /// # Errors
    ///
    /// Returns `RootProtected` or `NotFound`; the document is unchanged.
    pub fn remove(&mut self, target: &NodeId) -> LayoutResult<PanelNode> {
        self.apply("remove", |tree, _| tree.remove(target))
    }

    /// Changes what a leaf panel shows.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `NotALeaf`; the document is unchanged.
    pub fn change_content(
        &mut self,
        target: &NodeId,
        content: PanelContent,
    ) -> LayoutResult<PanelContent> {
        self.apply("change_content", |tree, _| tree.set_content(target, content))
    }

    /// Changes a child's share of its parent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeight`, `RootProtected` or `NotFound`; the document
    /// is unchanged.
    pub fn set_weight(&mut self, target: &NodeId, weight: f64) -> LayoutResult<f64> {
        self.apply("set_weight", |tree, _| tree.set_weight(target, weight))
    }

    /// Restores the most recent snapshot.
    ///
    /// Returns false if there was nothing to undo. The state replaced by the
    /// undo is discarded.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.tree = previous;
                true
            }
            None => false,
        }
    }

    /// Replaces the tree with one rebuilt from the live freeform layout.
    ///
    /// The previous tree is pushed onto the history. Returns the new tree.
    ///
    /// # Errors
    ///
    /// Returns `WrongMode` outside freeform mode, where the freeform layout
    /// may be stale or empty; the document is unchanged.
    pub fn reconstruct_from_freeform(&mut self) -> EditorResult<&PanelNode> {
        self.require_freeform()?;
        let options = self.settings.reconstruct_options();
        let rebuilt = freeform_to_split(self.freeform.panels(), &options, self.ids.as_mut());
        let previous = std::mem::replace(&mut self.tree, rebuilt);
        self.history.push(previous);
        info!(leaves = self.tree.leaf_count(), "Tree reconstructed from freeform layout");
        Ok(&self.tree)
    }

    // ========================================================================
    // Mode switching
    // ========================================================================

    /// Switches modes.
    ///
    /// Entering freeform always rebuilds the freeform layout from the tree.
    /// Returning to split mode converts nothing.
    pub fn set_mode(&mut self, mode: EditorMode) -> ModeTransition {
        let transition = self.mode.transition_to(mode);
        let _span =
            trace_operation!(span_names::MODE_SWITCH, from = %self.mode, to = %mode).entered();
        if transition == ModeTransition::EnteredFreeform {
            self.freeform = split_to_freeform(&self.tree, self.settings.canvas());
        }
        self.mode = mode;
        debug!(?transition, "Mode switched");
        transition
    }

    // ========================================================================
    // Freeform edits
    // ========================================================================

    fn require_freeform(&self) -> EditorResult<()> {
        match self.mode {
            EditorMode::Freeform => Ok(()),
            actual => Err(EditorError::WrongMode {
                expected: EditorMode::Freeform,
                actual,
            }),
        }
    }

    /// Adds a panel on top of the freeform stack.
    ///
    /// # Errors
    ///
    /// Returns `WrongMode` outside freeform mode.
    pub fn add_panel(&mut self, rect: Rect, content: PanelContent) -> EditorResult<NodeId> {
        self.require_freeform()?;
        Ok(self.freeform.add_panel(rect, content, self.ids.as_mut()))
    }

    /// Removes a freeform panel.
    ///
    /// # Errors
    ///
    /// Returns `WrongMode` outside freeform mode, or `NotFound`.
    pub fn remove_panel(&mut self, id: &NodeId) -> EditorResult<()> {
        self.require_freeform()?;
        self.freeform.remove_panel(id)?;
        Ok(())
    }

    /// Commits a drag gesture's delta.
    ///
    /// # Errors
    ///
    /// Returns `WrongMode` outside freeform mode, or `NotFound`.
    pub fn move_panel(&mut self, id: &NodeId, dx: f64, dy: f64) -> EditorResult<Rect> {
        self.require_freeform()?;
        Ok(self.freeform.move_by(id, dx, dy)?)
    }

    /// Commits a resize gesture's delta, honoring `min_panel_size`.
    ///
    /// # Errors
    ///
    /// Returns `WrongMode` outside freeform mode, or `NotFound`.
    pub fn resize_panel(&mut self, id: &NodeId, dw: f64, dh: f64) -> EditorResult<Rect> {
        self.require_freeform()?;
        let min = self.settings.min_panel_size;
        Ok(self.freeform.resize_by(id, dw, dh, min)?)
    }

    /// Raises a freeform panel above all others.
    ///
    /// # Errors
    ///
    /// Returns `WrongMode` outside freeform mode, or `NotFound`.
    pub fn bring_to_front(&mut self, id: &NodeId) -> EditorResult<i64> {
        self.require_freeform()?;
        Ok(self.freeform.bring_to_front(id)?)
    }

    // ========================================================================
    // Whole-document replacement
    // ========================================================================

    /// Starts over from a template.
    ///
    /// The history is cleared and the editor returns to split mode.
    pub fn load_template(&mut self, template: LayoutTemplate) {
        self.replace_document(template.build(), DocumentMetadata::now(self.settings.density));
    }

    /// Replaces the document with an imported one.
    ///
    /// The history is cleared and the editor returns to split mode.
    pub fn import(&mut self, document: LayoutDocument) {
        self.replace_document(document.split_layout, document.metadata);
    }

    fn replace_document(&mut self, tree: PanelNode, metadata: DocumentMetadata) {
        self.tree = tree;
        self.metadata = metadata;
        self.history.clear();
        self.freeform = FreeformLayout::new();
        self.mode = EditorMode::Split;
        info!(root = %self.tree.id(), "Document replaced");
    }

    /// Returns the live tree as a document, whatever the current mode.
    #[must_use]
    pub fn export(&self) -> LayoutDocument {
        LayoutDocument {
            version: crate::document::DOCUMENT_VERSION.to_owned(),
            split_layout: self.tree.clone(),
            metadata: self.metadata.clone(),
        }
    }
}
