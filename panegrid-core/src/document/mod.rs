//! Persisted layout documents
//!
//! A document stores the split tree together with a little metadata:
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "splitLayout": {
//!     "id": "root", "type": "split", "direction": "horizontal",
//!     "children": [
//!       { "id": "a", "type": "panel", "content": "timeline", "size": 2 },
//!       { "id": "b", "type": "panel", "content": "mixer" }
//!     ]
//!   },
//!   "metadata": { "created": "2024-05-01T12:00:00Z", "density": "comfortable" }
//! }
//! ```
//!
//! Import is all-or-nothing: a document is accepted only if `splitLayout` is
//! present and decodes into a valid tree. Missing `version` and `metadata`
//! are filled with defaults. A child without `size` gets weight 1.
//!
//! The library never touches the filesystem; hosts read and write the strings.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::freeform::FreeformLayout;
use crate::split::{
    DEFAULT_WEIGHT, LayoutError, NodeId, PanelContent, PanelNode, SplitAxis, SplitChild, SplitNode,
};
use crate::trace_operation;
use crate::tracing::span_names;

/// Errors that can occur during document import and export
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DocumentError {
    /// The input is not well-formed JSON/YAML or has the wrong shape
    #[error("Failed to parse document: {0}")]
    Parse(String),

    /// The document could not be serialized
    #[error("Failed to serialize document: {0}")]
    Serialize(String),

    /// The document has no `splitLayout`
    #[error("Document has no splitLayout")]
    MissingSplitLayout,

    /// A node is missing a field its type requires
    #[error("Invalid node {id}: {reason}")]
    InvalidNode {
        /// Id of the offending node
        id: String,
        /// What is wrong with it
        reason: String,
    },

    /// The decoded tree breaks a structural invariant
    #[error("Invalid layout: {0}")]
    InvalidLayout(#[from] LayoutError),
}

/// Result type for document operations
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// Document format version written on export
pub const DOCUMENT_VERSION: &str = "1.0";

/// Spacing preference stored with the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    /// Generous padding
    #[default]
    Comfortable,
    /// Reduced padding
    Compact,
    /// Minimal padding
    Dense,
}

impl Density {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comfortable => "comfortable",
            Self::Compact => "compact",
            Self::Dense => "dense",
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// When the document was first created
    pub created: DateTime<Utc>,
    /// Spacing preference
    #[serde(default)]
    pub density: Density,
}

impl DocumentMetadata {
    /// Creates metadata stamped with the current time.
    #[must_use]
    pub fn now(density: Density) -> Self {
        Self {
            created: Utc::now(),
            density,
        }
    }
}

/// A split tree with its version and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    /// Format version
    pub version: String,
    /// The authoritative layout
    pub split_layout: PanelNode,
    /// Creation time and density
    pub metadata: DocumentMetadata,
}

impl LayoutDocument {
    /// Creates a document for `tree`, stamped now.
    #[must_use]
    pub fn new(tree: PanelNode, density: Density) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_owned(),
            split_layout: tree,
            metadata: DocumentMetadata::now(density),
        }
    }

    /// Serializes the document to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Serialize` if serialization fails
    pub fn to_json(&self) -> DocumentResult<String> {
        let _span = trace_operation!(span_names::DOCUMENT_EXPORT, format = "json").entered();
        serde_json::to_string_pretty(&RawDocument::from(self))
            .map_err(|e| DocumentError::Serialize(e.to_string()))
    }

    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// - `DocumentError::Parse` for malformed JSON or unknown field values
    /// - `DocumentError::MissingSplitLayout` if `splitLayout` is absent
    /// - `DocumentError::InvalidNode` / `DocumentError::InvalidLayout` if the
    ///   tree is not well-formed
    pub fn from_json(json: &str) -> DocumentResult<Self> {
        let _span = trace_operation!(span_names::DOCUMENT_IMPORT, format = "json").entered();
        let raw: RawDocument =
            serde_json::from_str(json).map_err(|e| DocumentError::Parse(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Serializes the document to YAML.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Serialize` if serialization fails
    pub fn to_yaml(&self) -> DocumentResult<String> {
        let _span = trace_operation!(span_names::DOCUMENT_EXPORT, format = "yaml").entered();
        serde_yaml::to_string(&RawDocument::from(self))
            .map_err(|e| DocumentError::Serialize(e.to_string()))
    }

    /// Parses and validates a YAML document.
    ///
    /// # Errors
    ///
    /// Same as [`LayoutDocument::from_json`].
    pub fn from_yaml(yaml: &str) -> DocumentResult<Self> {
        let _span = trace_operation!(span_names::DOCUMENT_IMPORT, format = "yaml").entered();
        let raw: RawDocument =
            serde_yaml::from_str(yaml).map_err(|e| DocumentError::Parse(e.to_string()))?;
        Self::try_from(raw)
    }
}

/// Serializes a freeform layout as a JSON array of panels.
///
/// # Errors
///
/// Returns `DocumentError::Serialize` if serialization fails
pub fn freeform_to_json(layout: &FreeformLayout) -> DocumentResult<String> {
    serde_json::to_string_pretty(layout).map_err(|e| DocumentError::Serialize(e.to_string()))
}

/// Parses a JSON array of freeform panels.
///
/// Geometry is not checked; the reconstructor accepts anything.
///
/// # Errors
///
/// Returns `DocumentError::Parse` for malformed input
pub fn freeform_from_json(json: &str) -> DocumentResult<FreeformLayout> {
    serde_json::from_str(json).map_err(|e| DocumentError::Parse(e.to_string()))
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    split_layout: Option<WireNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<RawMetadata>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    density: Option<Density>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum WireKind {
    Panel,
    Split,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireNode {
    id: String,
    #[serde(rename = "type")]
    kind: WireKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<PanelContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    direction: Option<SplitAxis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<WireNode>>,
}

impl WireNode {
    fn encode(node: &PanelNode, size: Option<f64>) -> Self {
        match node {
            PanelNode::Leaf(leaf) => Self {
                id: leaf.id.to_string(),
                kind: WireKind::Panel,
                content: Some(leaf.content),
                direction: None,
                size,
                children: None,
            },
            PanelNode::Split(split) => Self {
                id: split.id.to_string(),
                kind: WireKind::Split,
                content: None,
                direction: Some(split.axis),
                size,
                children: Some(
                    split
                        .children
                        .iter()
                        .map(|c| Self::encode(&c.node, Some(c.weight)))
                        .collect(),
                ),
            },
        }
    }

    fn decode(self) -> DocumentResult<PanelNode> {
        let invalid = |id: &str, reason: &str| DocumentError::InvalidNode {
            id: id.to_owned(),
            reason: reason.to_owned(),
        };
        match self.kind {
            WireKind::Panel => {
                let content = self
                    .content
                    .ok_or_else(|| invalid(&self.id, "panel has no content"))?;
                Ok(PanelNode::new_leaf(self.id, content))
            }
            WireKind::Split => {
                let axis = self
                    .direction
                    .ok_or_else(|| invalid(&self.id, "split has no direction"))?;
                let children = self
                    .children
                    .unwrap_or_default()
                    .into_iter()
                    .map(|child| {
                        let weight = child.size.unwrap_or(DEFAULT_WEIGHT);
                        child.decode().map(|node| SplitChild::weighted(node, weight))
                    })
                    .collect::<DocumentResult<Vec<_>>>()?;
                Ok(PanelNode::Split(SplitNode::new(NodeId::new(self.id), axis, children)))
            }
        }
    }
}

impl From<&LayoutDocument> for RawDocument {
    fn from(doc: &LayoutDocument) -> Self {
        Self {
            version: Some(doc.version.clone()),
            split_layout: Some(WireNode::encode(&doc.split_layout, None)),
            metadata: Some(RawMetadata {
                created: Some(doc.metadata.created),
                density: Some(doc.metadata.density),
            }),
        }
    }
}

impl TryFrom<RawDocument> for LayoutDocument {
    type Error = DocumentError;

    fn try_from(raw: RawDocument) -> DocumentResult<Self> {
        let wire = raw.split_layout.ok_or(DocumentError::MissingSplitLayout)?;
        let tree = wire.decode()?;
        tree.validate()?;

        let metadata = raw.metadata.map_or_else(
            || DocumentMetadata::now(Density::default()),
            |m| DocumentMetadata {
                created: m.created.unwrap_or_else(Utc::now),
                density: m.density.unwrap_or_default(),
            },
        );

        debug!(
            root = %tree.id(),
            leaves = tree.leaf_count(),
            "Document decoded"
        );

        Ok(Self {
            version: raw.version.unwrap_or_else(|| DOCUMENT_VERSION.to_owned()),
            split_layout: tree,
            metadata,
        })
    }
}
