//! Ordered extraction: depth-first and breadth-first linearization.
//!
//! Both walks are read-only and produce the arena indices of every live node
//! exactly once. The depth-first walk is recursive; under the balance
//! invariant its depth is O(log n), so stack depth is never a practical
//! concern. The breadth-first walk uses an explicit FIFO queue.

use std::collections::VecDeque;

use crate::store::NodeStore;
use crate::types::Link;

/// Visit order of a depth-first traversal, relative to when a node itself is
/// emitted versus its children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DfsOrder {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree; emits keys in
    /// non-decreasing order.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
}

/// Child enqueue order of a breadth-first (level-order) traversal.
///
/// Nodes are emitted in non-decreasing depth order; within a level, in the
/// order their parents were visited and per the chosen direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BfsDirection {
    LeftFirst,
    RightFirst,
}

pub(crate) fn dfs<K, V>(store: &NodeStore<K, V>, root: Link, order: DfsOrder) -> Vec<u32> {
    let mut out = Vec::with_capacity(store.live());
    if let Some(root) = root {
        dfs_inner(store, root, order, &mut out);
    }
    out
}

fn dfs_inner<K, V>(store: &NodeStore<K, V>, node: u32, order: DfsOrder, out: &mut Vec<u32>) {
    let (l, r) = {
        let n = store.node(node);
        (n.l, n.r)
    };
    if order == DfsOrder::Pre {
        out.push(node);
    }
    if let Some(l) = l {
        dfs_inner(store, l, order, out);
    }
    if order == DfsOrder::In {
        out.push(node);
    }
    if let Some(r) = r {
        dfs_inner(store, r, order, out);
    }
    if order == DfsOrder::Post {
        out.push(node);
    }
}

pub(crate) fn bfs<K, V>(store: &NodeStore<K, V>, root: Link, direction: BfsDirection) -> Vec<u32> {
    let mut out = Vec::with_capacity(store.live());
    let mut queue = VecDeque::new();
    if let Some(root) = root {
        queue.push_back(root);
    }
    while let Some(idx) = queue.pop_front() {
        out.push(idx);
        let node = store.node(idx);
        let (a, b) = match direction {
            BfsDirection::LeftFirst => (node.l, node.r),
            BfsDirection::RightFirst => (node.r, node.l),
        };
        if let Some(a) = a {
            queue.push_back(a);
        }
        if let Some(b) = b {
            queue.push_back(b);
        }
    }
    out
}
