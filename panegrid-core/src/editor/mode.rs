//! Editor view modes

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which representation the user is editing.
///
/// The split tree is authoritative in both modes. Entering freeform derives a
/// fresh freeform layout from the tree; leaving it discards nothing but also
/// syncs nothing back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Editing the split tree
    #[default]
    Split,
    /// Editing absolute panel geometry
    Freeform,
}

/// What a mode switch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTransition {
    /// Already in the requested mode
    Unchanged,
    /// Entered freeform; the freeform layout was rebuilt from the tree
    EnteredFreeform,
    /// Returned to split mode; the tree was left as is
    ReturnedToSplit,
}

impl EditorMode {
    /// Returns the transition from `self` to `target`.
    #[must_use]
    pub const fn transition_to(self, target: Self) -> ModeTransition {
        match (self, target) {
            (Self::Split, Self::Freeform) => ModeTransition::EnteredFreeform,
            (Self::Freeform, Self::Split) => ModeTransition::ReturnedToSplit,
            _ => ModeTransition::Unchanged,
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Split => write!(f, "split"),
            Self::Freeform => write!(f, "freeform"),
        }
    }
}
