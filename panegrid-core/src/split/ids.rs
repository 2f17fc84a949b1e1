//! Node id generation
//!
//! New nodes get their ids from an injected [`IdGenerator`] so that the
//! layout core stays deterministic under test. [`SequentialIds`] hands out
//! `"{prefix}-{n}"`; [`RandomIds`] appends a v4 UUID instead.

use uuid::Uuid;

use super::types::NodeId;

/// Prefix used for generated leaf ids.
pub const PANEL_ID_PREFIX: &str = "panel";

/// Prefix used for generated split ids.
pub const SPLIT_ID_PREFIX: &str = "split";

/// Source of fresh node ids.
pub trait IdGenerator {
    /// Returns a new id starting with `prefix`.
    fn next_id(&mut self, prefix: &str) -> NodeId;
}

/// Deterministic counter-based generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Creates a generator whose first id ends in `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> NodeId {
        self.next += 1;
        NodeId::new(format!("{prefix}-{}", self.next))
    }
}

/// UUID-based generator for hosts that merge layouts from several sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self, prefix: &str) -> NodeId {
        NodeId::new(format!("{prefix}-{}", Uuid::new_v4()))
    }
}

/// Draws ids from `ids` until one is not `taken`.
///
/// A generator that keeps repeating itself gets a numeric suffix appended,
/// so this always terminates for a finite set of taken ids.
pub fn fresh_id(
    ids: &mut dyn IdGenerator,
    prefix: &str,
    taken: impl Fn(&NodeId) -> bool,
) -> NodeId {
    const MAX_DRAWS: usize = 64;

    let mut candidate = ids.next_id(prefix);
    for _ in 0..MAX_DRAWS {
        if !taken(&candidate) {
            return candidate;
        }
        candidate = ids.next_id(prefix);
    }

    let base = candidate.as_str().to_owned();
    let mut suffix = 1u64;
    loop {
        let id = NodeId::new(format!("{base}-{suffix}"));
        if !taken(&id) {
            return id;
        }
        suffix += 1;
    }
}
