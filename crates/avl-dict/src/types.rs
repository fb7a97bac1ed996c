//! Shared type vocabulary.
//!
//! Every node reference in this crate is an `Option<u32>` index into the
//! tree's slot arena; [`Link`] names that convention. [`Comparator`] names
//! the three-way ordering contract supplied by the caller.

/// Arena link: the slot index of a node, or `None` for an absent node.
pub type Link = Option<u32>;

/// Three-way comparator over keys.
///
/// Returns a negative value when `a < b`, zero when equal, positive when
/// `a > b`. This is the only externally supplied ordering policy; it must be
/// a total order for the tree invariants to hold.
///
/// `Box<Comparator<K>>` implements `Fn(&K, &K) -> i32` and so can stand in
/// for the tree's comparator parameter when the closure type must be erased.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;
