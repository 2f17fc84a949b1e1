//! Split tree model
//!
//! The split tree is the authoritative description of how panels share the
//! screen. Every node is either a leaf panel or a split that divides its space
//! among two or more weighted children along one axis.
//!
//! # Module Structure
//!
//! - `types` - Core type definitions (`NodeId`, `SplitAxis`, `PanelContent`)
//! - `tree` - Panel tree structure and mutations (`PanelNode`, `LeafPanel`, `SplitNode`)
//! - `ids` - Id generation (`IdGenerator`, `SequentialIds`, `RandomIds`)
//! - `templates` - Built-in starting layouts (`LayoutTemplate`)
//! - `error` - Error types (`LayoutError`)
//!
//! # Example
//!
//! ```
//! use panegrid_core::split::{LayoutTemplate, NodeId, PanelContent, SequentialIds, SplitAxis};
//!
//! let mut tree = LayoutTemplate::Blank.build();
//! let mut ids = SequentialIds::new();
//!
//! let inserted = tree
//!     .insert_split(&NodeId::new("root"), SplitAxis::Horizontal, &mut ids)
//!     .unwrap();
//! assert_eq!(tree.leaf_count(), 2);
//!
//! tree.set_content(&inserted.created, PanelContent::Mixer).unwrap();
//! tree.remove(&inserted.original).unwrap();
//!
//! // The root collapsed back to a leaf but kept its id
//! assert!(tree.is_leaf());
//! assert_eq!(tree.id().as_str(), "root");
//! ```

mod error;
mod ids;
mod templates;
mod tree;
mod types;

pub use error::{LayoutError, LayoutResult};
pub use ids::{IdGenerator, PANEL_ID_PREFIX, RandomIds, SPLIT_ID_PREFIX, SequentialIds, fresh_id};
pub use templates::{LayoutTemplate, TEMPLATE_ROOT_ID, UnknownTemplate};
pub use tree::{
    DEFAULT_WEIGHT, InsertedSplit, LeafPanel, PanelNode, SplitChild, SplitNode, is_valid_weight,
};
pub use types::{NodeId, PanelContent, SplitAxis};
