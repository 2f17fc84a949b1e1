//! `panegrid` Core Library
//!
//! A panel-layout engine that keeps two views of the same screen arrangement:
//! a split tree of nested horizontal/vertical partitions, and a freeform
//! layout of absolutely positioned, stacked panels.
//!
//! # Crate Structure
//!
//! - [`split`] - The split tree, its edits and built-in templates
//! - [`freeform`] - Absolutely positioned panels and their gesture commits
//! - [`convert`] - Tree to freeform subdivision and freeform to tree reconstruction
//! - [`editor`] - Editing session with undo history and mode switching
//! - [`document`] - JSON/YAML document codec
//! - [`config`] - Editor settings (TOML)
//! - [`geometry`] - Rectangle math
//! - [`tracing`] - Subscriber setup and span names

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod convert;
pub mod document;
pub mod editor;
pub mod freeform;
pub mod geometry;
pub mod split;
pub mod tracing;

pub use config::{ConfigError, ConfigResult, EditorSettings};
pub use convert::{ReconstructOptions, freeform_to_split, split_to_freeform};
pub use document::{Density, DocumentError, DocumentResult, LayoutDocument};
pub use editor::{EditHistory, EditorError, EditorMode, LayoutEditor, ModeTransition};
pub use freeform::{FreeformLayout, FreeformPanel};
pub use geometry::Rect;
pub use split::{
    LayoutError, LayoutResult, LayoutTemplate, NodeId, PanelContent, PanelNode, SplitAxis,
};
pub use tracing::{TracingConfig, TracingError, TracingLevel, TracingOutput, init_tracing};
