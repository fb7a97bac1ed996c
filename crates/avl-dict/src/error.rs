//! Error taxonomy.
//!
//! Every failure is reported by return value and leaves the tree exactly as
//! it was before the call. A missing key on search or delete is a normal
//! outcome (`None` / `false`), not an error.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The tree already holds `max_nodes` entries; insertion refused.
    #[error("tree is full: max_nodes limit of {max_nodes} reached")]
    CapacityExhausted { max_nodes: usize },

    /// The arena's `u32` index space is exhausted.
    #[error("node store exhausted: no slot index available")]
    StoreExhausted,
}
