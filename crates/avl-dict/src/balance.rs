//! Height bookkeeping and rotations.
//!
//! The balance factor of a node is `height(left) - height(right)`, computed
//! in O(1) from cached heights (an absent child has height −1). A factor of
//! +2 is left-heavy, −2 right-heavy; intermediate states during a single
//! structural change never exceed magnitude 2.
//!
//! Rotations swap the rotating node's content with its climbing child's, so
//! the node's arena index keeps its position in the tree and only the two
//! repositioned nodes need their heights recomputed.

use crate::store::NodeStore;
use crate::types::Link;

/// Height of a possibly absent subtree.
pub(crate) fn height<K, V>(store: &NodeStore<K, V>, link: Link) -> i32 {
    link.map_or(-1, |i| store.node(i).height)
}

pub(crate) fn balance_factor<K, V>(store: &NodeStore<K, V>, idx: u32) -> i32 {
    let node = store.node(idx);
    height(store, node.l) - height(store, node.r)
}

pub(crate) fn update_height<K, V>(store: &mut NodeStore<K, V>, idx: u32) {
    let (l, r) = {
        let node = store.node(idx);
        (node.l, node.r)
    };
    let h = 1 + height(store, l).max(height(store, r));
    store.node_mut(idx).height = h;
}

/// Simple right rotation at `n` (the LL case).
///
/// `n`'s content climbs down into its former left child while the child's
/// content takes `n`'s position; the three affected subtrees are reattached
/// to preserve the order invariant.
fn rotate_right<K, V>(store: &mut NodeStore<K, V>, n: u32) {
    let left = store.node(n).l.expect("left child exists");
    store.swap_content(n, left);
    let r_tree = store.cut_right(n);
    store.cut_left(n);
    let left_l = store.cut_left(left);
    let left_r = store.cut_right(left);
    store.attach_right(left, r_tree);
    store.attach_left(left, left_r);
    store.attach_right(n, Some(left));
    store.attach_left(n, left_l);
    update_height(store, left);
    update_height(store, n);
}

/// Simple left rotation at `n` (the RR case).
fn rotate_left<K, V>(store: &mut NodeStore<K, V>, n: u32) {
    let right = store.node(n).r.expect("right child exists");
    store.swap_content(n, right);
    let l_tree = store.cut_left(n);
    store.cut_right(n);
    let right_l = store.cut_left(right);
    let right_r = store.cut_right(right);
    store.attach_left(right, l_tree);
    store.attach_right(right, right_l);
    store.attach_left(n, Some(right));
    store.attach_right(n, right_r);
    update_height(store, right);
    update_height(store, n);
}

/// Restores balance at a node whose factor has reached magnitude 2,
/// selecting among the four displacement cases.
pub(crate) fn rotate<K, V>(store: &mut NodeStore<K, V>, n: u32) {
    let bf = balance_factor(store, n);
    if bf == 2 {
        let left = store.node(n).l.expect("left child exists");
        if balance_factor(store, left) >= 0 {
            // LL displacement.
            rotate_right(store, n);
        } else {
            // LR displacement: double rotation.
            rotate_left(store, left);
            rotate_right(store, n);
        }
    } else if bf == -2 {
        let right = store.node(n).r.expect("right child exists");
        if balance_factor(store, right) <= 0 {
            // RR displacement.
            rotate_left(store, n);
        } else {
            // RL displacement: double rotation.
            rotate_right(store, right);
            rotate_left(store, n);
        }
    }
}

/// Bottom-up rebalance after attaching the fresh leaf `leaf`.
///
/// Walks upward updating heights until an ancestor's factor reaches
/// magnitude 2; one rotation (simple or double) there restores the global
/// invariant, so the walk stops.
pub(crate) fn rebalance_inserted<K, V>(store: &mut NodeStore<K, V>, leaf: u32) {
    let mut curr = store.node(leaf).p;
    while let Some(i) = curr {
        if balance_factor(store, i).abs() >= 2 {
            break;
        }
        update_height(store, i);
        curr = store.node(i).p;
    }
    if let Some(i) = curr {
        rotate(store, i);
    }
}

/// Bottom-up rebalance after splicing a node out, starting at its former
/// parent.
///
/// A deletion can unbalance several ancestors along the path, so every node
/// up to the root is examined: rotate where the factor reaches magnitude 2,
/// refresh the cached height everywhere else.
pub(crate) fn rebalance_deleted<K, V>(store: &mut NodeStore<K, V>, start: Link) {
    let mut curr = start;
    while let Some(i) = curr {
        if balance_factor(store, i).abs() >= 2 {
            rotate(store, i);
        } else {
            update_height(store, i);
        }
        curr = store.node(i).p;
    }
}
