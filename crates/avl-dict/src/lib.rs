//! Arena-backed AVL ordered dictionary.
//!
//! An [`AvlTree`] associates comparable keys with arbitrary payloads and keeps
//! them in a self-balancing binary search tree, giving O(log n) search,
//! insertion and deletion plus ordered extraction of the whole content via
//! depth-first (pre/in/post order) and breadth-first (left-first or
//! right-first) traversals.
//!
//! Instead of raw pointers, all "pointers" are `Option<u32>` indices into a
//! slot arena owned by the tree; the parent link is a lookup relation used
//! only for bottom-up rebalancing, never an ownership edge. Deleted slots go
//! onto a free list and are reused by later insertions.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Link`] and [`Comparator`] aliases |
//! | [`node`] | [`AvlNode`], one key/payload entry with cached height |
//! | [`tree`] | [`AvlTree`], the container and its operations |
//! | [`traverse`] | [`DfsOrder`] / [`BfsDirection`] extraction orders |
//! | [`error`] | [`TreeError`] |
//!
//! # Duplicate keys
//!
//! Keys comparing equal are never rejected: insertion routes them into the
//! left subtree, so repeated equal keys accumulate. Their relative order
//! after rotations is unspecified; do not rely on multi-map semantics beyond
//! "all duplicates are present and adjacent in in-order output".
//!
//! # Node identity
//!
//! Operations that hand out node identities return arena indices (`u32`).
//! Rebalancing rotations and two-child deletions move *content* between
//! positions rather than relinking them, so an index retained across a later
//! `insert` or `remove` may observe its key and payload change. Treat indices
//! as positional handles valid only until the next mutation.

pub mod error;
pub mod node;
pub mod traverse;
pub mod tree;
pub mod types;

mod balance;
mod store;
mod util;

pub use error::TreeError;
pub use node::AvlNode;
pub use traverse::{BfsDirection, DfsOrder};
pub use tree::{AvlTree, Iter};
pub use types::{Comparator, Link};
