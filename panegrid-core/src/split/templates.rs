//! Built-in starting layouts
//!
//! Every template produces a tree whose root id is [`TEMPLATE_ROOT_ID`], so
//! the document root id is stable across template loads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tree::PanelNode;
use super::types::{PanelContent, SplitAxis};

/// Root id shared by all templates.
pub const TEMPLATE_ROOT_ID: &str = "root";

/// Named starting layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutTemplate {
    /// A single empty panel.
    Blank,
    /// Timeline on top, mixer and transport below.
    #[default]
    Arrange,
    /// Mixer beside effects, transport along the bottom.
    Mix,
    /// Piano roll beside instruments and samples, transport along the bottom.
    Compose,
    /// AI assistant beside the timeline, samples along the bottom.
    AiStudio,
}

impl LayoutTemplate {
    /// Returns all templates.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Blank,
            Self::Arrange,
            Self::Mix,
            Self::Compose,
            Self::AiStudio,
        ]
    }

    /// Returns the kebab-case template name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Arrange => "arrange",
            Self::Mix => "mix",
            Self::Compose => "compose",
            Self::AiStudio => "ai-studio",
        }
    }

    /// Builds a fresh tree for this template.
    #[must_use]
    pub fn build(self) -> PanelNode {
        use PanelContent as C;
        use SplitAxis::{Horizontal, Vertical};

        let leaf = PanelNode::new_leaf;
        match self {
            Self::Blank => leaf(TEMPLATE_ROOT_ID, C::Empty),
            Self::Arrange => PanelNode::weighted_split(
                TEMPLATE_ROOT_ID,
                Vertical,
                vec![
                    (leaf("timeline", C::Timeline), 2.0),
                    (
                        PanelNode::weighted_split(
                            "bottom",
                            Horizontal,
                            vec![
                                (leaf("mixer", C::Mixer), 3.0),
                                (leaf("transport", C::Transport), 1.0),
                            ],
                        ),
                        1.0,
                    ),
                ],
            ),
            Self::Mix => PanelNode::weighted_split(
                TEMPLATE_ROOT_ID,
                Vertical,
                vec![
                    (
                        PanelNode::weighted_split(
                            "top",
                            Horizontal,
                            vec![
                                (leaf("mixer", C::Mixer), 2.0),
                                (leaf("effects", C::Effects), 1.0),
                            ],
                        ),
                        4.0,
                    ),
                    (leaf("transport", C::Transport), 1.0),
                ],
            ),
            Self::Compose => PanelNode::weighted_split(
                TEMPLATE_ROOT_ID,
                Vertical,
                vec![
                    (
                        PanelNode::weighted_split(
                            "top",
                            Horizontal,
                            vec![
                                (leaf("piano-roll", C::PianoRoll), 3.0),
                                (
                                    PanelNode::even_split(
                                        "sidebar",
                                        Vertical,
                                        vec![
                                            leaf("instruments", C::Instruments),
                                            leaf("samples", C::Samples),
                                        ],
                                    ),
                                    1.0,
                                ),
                            ],
                        ),
                        4.0,
                    ),
                    (leaf("transport", C::Transport), 1.0),
                ],
            ),
            Self::AiStudio => PanelNode::weighted_split(
                TEMPLATE_ROOT_ID,
                Vertical,
                vec![
                    (
                        PanelNode::weighted_split(
                            "top",
                            Horizontal,
                            vec![
                                (leaf("assistant", C::AiAssistant), 1.0),
                                (leaf("timeline", C::Timeline), 2.0),
                            ],
                        ),
                        3.0,
                    ),
                    (leaf("samples", C::Samples), 1.0),
                ],
            ),
        }
    }
}

impl fmt::Display for LayoutTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown template name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout template: {0}")]
pub struct UnknownTemplate(pub String);

impl FromStr for LayoutTemplate {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name() == lowered)
            .ok_or_else(|| UnknownTemplate(s.to_owned()))
    }
}
