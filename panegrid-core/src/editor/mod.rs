//! Editing session for a single layout document
//!
//! [`LayoutEditor`] is the command layer hosts talk to. It owns the split
//! tree (the source of truth), the freeform layout derived from it, and an
//! undo history of tree snapshots.
//!
//! # Example
//!
//! ```
//! use panegrid_core::editor::{EditorMode, LayoutEditor};
//! use panegrid_core::split::{NodeId, PanelContent, SplitAxis};
//!
//! let mut editor = LayoutEditor::default();
//! let inserted = editor
//!     .split(&NodeId::new("timeline"), SplitAxis::Horizontal)
//!     .unwrap();
//! editor
//!     .change_content(&inserted.created, PanelContent::PianoRoll)
//!     .unwrap();
//!
//! editor.set_mode(EditorMode::Freeform);
//! assert_eq!(editor.freeform().len(), 4);
//!
//! editor.undo();
//! editor.undo();
//! assert_eq!(editor.tree().leaf_count(), 3);
//! ```

mod history;
mod mode;
mod session;

pub use history::EditHistory;
pub use mode::{EditorMode, ModeTransition};
pub use session::{EditorError, EditorResult, LayoutEditor};
