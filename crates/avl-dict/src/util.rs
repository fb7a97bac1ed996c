//! In-order navigation over the arena.

use crate::store::NodeStore;
use crate::types::Link;

/// Leftmost node under `root`.
pub(crate) fn first<K, V>(store: &NodeStore<K, V>, root: Link) -> Link {
    let mut curr = root;
    while let Some(idx) = curr {
        match store.node(idx).l {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node under `root`.
pub(crate) fn last<K, V>(store: &NodeStore<K, V>, root: Link) -> Link {
    let mut curr = root;
    while let Some(idx) = curr {
        match store.node(idx).r {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub(crate) fn next<K, V>(store: &NodeStore<K, V>, node: u32) -> Link {
    if let Some(r) = store.node(node).r {
        let mut curr = r;
        while let Some(l) = store.node(curr).l {
            curr = l;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = store.node(node).p;
    while let Some(pi) = p {
        if store.node(pi).r == Some(curr) {
            curr = pi;
            p = store.node(pi).p;
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub(crate) fn prev<K, V>(store: &NodeStore<K, V>, node: u32) -> Link {
    if let Some(l) = store.node(node).l {
        let mut curr = l;
        while let Some(r) = store.node(curr).r {
            curr = r;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = store.node(node).p;
    while let Some(pi) = p {
        if store.node(pi).l == Some(curr) {
            curr = pi;
            p = store.node(pi).p;
        } else {
            return Some(pi);
        }
    }
    None
}
