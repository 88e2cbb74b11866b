//! Single-slot graph store.

use std::sync::{Arc, PoisonError, RwLock};

use crate::schema::Graph;

/// Holds at most one current graph in process memory.
///
/// The slot is replaced wholesale on each accepted submission, so a reader
/// always sees either the previous complete graph or the next one, never a
/// mix. Handles are cheap clones sharing the same slot; nothing survives a
/// process restart by design.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    slot: Arc<RwLock<Option<Graph>>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current graph, or `None` if nothing has ever been accepted.
    pub fn current(&self) -> Option<Graph> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the slot with a freshly accepted graph.
    pub fn replace(&self, graph: Graph) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(graph);
    }

    /// Clear the slot back to empty.
    pub fn reset(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
