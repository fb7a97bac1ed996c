//! Slot arena: owns every node and the parent/child linking primitives.
//!
//! Slots vacated by deletion form an intrusive free list (the vacant slot
//! stores the next free index) and are reused by later allocations, so a
//! long-lived tree does not grow its arena past its high-water node count.

use std::mem;

use crate::error::TreeError;
use crate::node::AvlNode;
use crate::types::Link;

enum Slot<K, V> {
    Occupied(AvlNode<K, V>),
    Vacant(Link),
}

pub(crate) struct NodeStore<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Link,
    live: usize,
}

impl<K, V> NodeStore<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            live: 0,
        }
    }

    /// Number of occupied slots.
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    pub(crate) fn node(&self, idx: u32) -> &AvlNode<K, V> {
        match &self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("accessed vacant node slot {idx}"),
        }
    }

    pub(crate) fn node_mut(&mut self, idx: u32) -> &mut AvlNode<K, V> {
        match &mut self.slots[idx as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("accessed vacant node slot {idx}"),
        }
    }

    /// Places a fresh leaf node in a slot and returns its index.
    ///
    /// Fails without mutation when the `u32` index space is exhausted.
    pub(crate) fn alloc(&mut self, k: K, v: V) -> Result<u32, TreeError> {
        match self.free {
            Some(idx) => {
                let Slot::Vacant(next) = self.slots[idx as usize] else {
                    unreachable!("free list points at occupied slot");
                };
                self.free = next;
                self.slots[idx as usize] = Slot::Occupied(AvlNode::new(k, v));
                self.live += 1;
                Ok(idx)
            }
            None => {
                if self.slots.len() > u32::MAX as usize {
                    return Err(TreeError::StoreExhausted);
                }
                self.slots.push(Slot::Occupied(AvlNode::new(k, v)));
                self.live += 1;
                Ok((self.slots.len() - 1) as u32)
            }
        }
    }

    /// Vacates a slot onto the free list and hands back its key and payload.
    pub(crate) fn release(&mut self, idx: u32) -> (K, V) {
        let slot = mem::replace(&mut self.slots[idx as usize], Slot::Vacant(self.free));
        let Slot::Occupied(node) = slot else {
            panic!("released vacant node slot {idx}");
        };
        self.free = Some(idx);
        self.live -= 1;
        (node.k, node.v)
    }

    /// Drops every node and resets the arena.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.live = 0;
    }

    /// Swaps the key/payload content of two occupied slots, leaving both
    /// nodes' links and heights in place.
    pub(crate) fn swap_content(&mut self, a: u32, b: u32) {
        debug_assert_ne!(a, b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(hi as usize);
        let (Slot::Occupied(x), Slot::Occupied(y)) = (&mut head[lo as usize], &mut tail[0]) else {
            panic!("swapped content of vacant node slot");
        };
        mem::swap(&mut x.k, &mut y.k);
        mem::swap(&mut x.v, &mut y.v);
    }

    /// Attaches `child` (a detached subtree root, or `None`) as the left
    /// subtree of `parent`, maintaining the back-reference.
    pub(crate) fn attach_left(&mut self, parent: u32, child: Link) {
        self.node_mut(parent).l = child;
        if let Some(c) = child {
            self.node_mut(c).p = Some(parent);
        }
    }

    /// Attaches `child` as the right subtree of `parent`.
    pub(crate) fn attach_right(&mut self, parent: u32, child: Link) {
        self.node_mut(parent).r = child;
        if let Some(c) = child {
            self.node_mut(c).p = Some(parent);
        }
    }

    /// Detaches and returns the left subtree of `parent`.
    pub(crate) fn cut_left(&mut self, parent: u32) -> Link {
        let child = self.node_mut(parent).l.take();
        if let Some(c) = child {
            self.node_mut(c).p = None;
        }
        child
    }

    /// Detaches and returns the right subtree of `parent`.
    pub(crate) fn cut_right(&mut self, parent: u32) -> Link {
        let child = self.node_mut(parent).r.take();
        if let Some(c) = child {
            self.node_mut(c).p = None;
        }
        child
    }
}
