//! Node representation.

use crate::types::Link;

/// One entry of the tree: a key, its payload and the structural links.
///
/// `height` caches the subtree height so balance factors are O(1); an absent
/// child counts as height −1, so a leaf has height 0. The parent link is
/// used only for upward traversal during rebalancing.
#[derive(Clone, Debug)]
pub struct AvlNode<K, V> {
    pub(crate) p: Link,
    pub(crate) l: Link,
    pub(crate) r: Link,
    pub(crate) height: i32,
    pub(crate) k: K,
    pub(crate) v: V,
}

impl<K, V> AvlNode<K, V> {
    pub(crate) fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            height: 0,
            k,
            v,
        }
    }

    pub fn parent(&self) -> Link {
        self.p
    }

    pub fn left(&self) -> Link {
        self.l
    }

    pub fn right(&self) -> Link {
        self.r
    }

    /// Cached subtree height; 0 for a leaf.
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn key(&self) -> &K {
        &self.k
    }

    pub fn value(&self) -> &V {
        &self.v
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.v
    }
}
