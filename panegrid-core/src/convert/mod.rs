//! Conversions between the split tree and the freeform layout
//!
//! - [`split_to_freeform`] is exact: it subdivides a rectangle by the tree's
//!   weights and the resulting panels tile it.
//! - [`freeform_to_split`] is heuristic: it guesses a plausible tree from
//!   absolute geometry. Converting a tree to freeform and back keeps the
//!   leaves but not necessarily the shape.

mod to_freeform;
mod to_split;

pub use to_freeform::{
    DEFAULT_CANVAS, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, split_to_freeform,
};
pub use to_split::{
    DEFAULT_GAP_TOLERANCE, MIN_WEIGHT, ReconstructOptions, dominant_axis, freeform_to_split,
};
