//! Core type definitions for split layouts
//!
//! This module contains the identifier type, the split axis and the closed
//! set of panel content kinds used throughout the layout engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a node within a split tree.
///
/// Ids are plain strings so that documents written by other tools load
/// unchanged. Uniqueness is a property of the tree, not of the type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a node id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Axis along which a split node partitions its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitAxis {
    /// Children are laid out left to right (partitions the x axis).
    Horizontal,
    /// Children are stacked top to bottom (partitions the y axis).
    Vertical,
}

impl SplitAxis {
    /// Returns the perpendicular axis.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

impl fmt::Display for SplitAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// What a leaf panel displays.
///
/// The set is closed: documents naming any other kind are rejected on import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelContent {
    /// Arrangement timeline.
    Timeline,
    /// Channel mixer.
    Mixer,
    /// Piano-roll note editor.
    PianoRoll,
    /// Instrument rack.
    Instruments,
    /// Effects chain browser.
    Effects,
    /// Sample library.
    Samples,
    /// AI assistant panel.
    AiAssistant,
    /// Transport controls.
    Transport,
    /// Placeholder panel with nothing assigned.
    #[default]
    Empty,
}

impl PanelContent {
    /// Returns all content kinds in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Timeline,
            Self::Mixer,
            Self::PianoRoll,
            Self::Instruments,
            Self::Effects,
            Self::Samples,
            Self::AiAssistant,
            Self::Transport,
            Self::Empty,
        ]
    }

    /// Returns the wire name of this content kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::Mixer => "mixer",
            Self::PianoRoll => "piano-roll",
            Self::Instruments => "instruments",
            Self::Effects => "effects",
            Self::Samples => "samples",
            Self::AiAssistant => "ai-assistant",
            Self::Transport => "transport",
            Self::Empty => "empty",
        }
    }

    /// Returns true for the placeholder kind.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for PanelContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
