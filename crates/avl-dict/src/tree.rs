//! The tree container and its operations.

use std::fmt::Debug;

use crate::balance;
use crate::error::TreeError;
use crate::node::AvlNode;
use crate::store::NodeStore;
use crate::traverse::{self, BfsDirection, DfsOrder};
use crate::types::Link;
use crate::util;

fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Arena-backed AVL ordered dictionary.
///
/// Keys are ordered by a caller-supplied comparator (by default one built
/// from `PartialOrd`). When the concrete closure type must be erased, a
/// boxed [`Comparator`](crate::types::Comparator) serves as the `C`
/// parameter: `AvlTree<K, V, Box<Comparator<K>>>`. Equal keys are routed
/// into the left subtree on insertion and accumulate; their relative order
/// is unspecified.
///
/// Single-writer by design: there is no internal synchronization, and every
/// operation runs to completion synchronously. Callers needing concurrent
/// access must serialize all operations behind one external lock, since a
/// rebalance can touch any node on the path to the root.
pub struct AvlTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    store: NodeStore<K, V>,
    root: Link,
    len: usize,
    max_nodes: usize,
    comparator: C,
}

impl<K, V> AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    /// Empty tree ordered by `PartialOrd`, with no node limit.
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// Empty tree ordered by `comparator`, with no node limit.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            store: NodeStore::new(),
            root: None,
            len: 0,
            max_nodes: usize::MAX,
            comparator,
        }
    }

    /// Caps the number of live nodes; insertion at the cap fails with
    /// [`TreeError::CapacityExhausted`].
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum permitted number of live entries.
    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Arena index of the root node.
    pub fn root_index(&self) -> Link {
        self.root
    }

    #[inline]
    fn compare(&self, a: &K, b: &K) -> i32 {
        (self.comparator)(a, b)
    }

    // Accessors by arena index ==============================================

    /// The live node at `idx`. Panics on a vacant or out-of-range index.
    pub fn node(&self, idx: u32) -> &AvlNode<K, V> {
        self.store.node(idx)
    }

    /// Key of a live node. Panics on a vacant or out-of-range index.
    pub fn key(&self, idx: u32) -> &K {
        self.store.node(idx).key()
    }

    /// Payload of a live node.
    pub fn value(&self, idx: u32) -> &V {
        self.store.node(idx).value()
    }

    pub fn value_mut(&mut self, idx: u32) -> &mut V {
        self.store.node_mut(idx).value_mut()
    }

    /// Cached subtree height of a live node; a leaf has height 0.
    pub fn height(&self, idx: u32) -> i32 {
        self.store.node(idx).height
    }

    pub fn parent(&self, idx: u32) -> Link {
        self.store.node(idx).p
    }

    pub fn left(&self, idx: u32) -> Link {
        self.store.node(idx).l
    }

    pub fn right(&self, idx: u32) -> Link {
        self.store.node(idx).r
    }

    // Search ================================================================

    /// Index of the first node on the root path whose key compares equal.
    ///
    /// With duplicate keys present, which duplicate this is may change after
    /// rotations; see the crate docs on node identity.
    pub fn find(&self, key: &K) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            let cmp = self.compare(self.store.node(i).key(), key);
            if cmp == 0 {
                return Some(i);
            }
            curr = if cmp > 0 {
                self.store.node(i).l
            } else {
                self.store.node(i).r
            };
        }
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| self.store.node(i).value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(self.store.node_mut(idx).value_mut())
    }

    /// The stored key and payload of the first match.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.find(key).map(|i| {
            let node = self.store.node(i);
            (node.key(), node.value())
        })
    }

    pub fn has(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    // Insertion =============================================================

    /// Inserts an entry and returns the new number of live entries.
    ///
    /// Equal keys are never rejected; they are routed into the left subtree.
    /// Fails without mutation when the tree is at `max_nodes` or the arena
    /// index space is exhausted.
    pub fn insert(&mut self, key: K, value: V) -> Result<usize, TreeError> {
        if self.len >= self.max_nodes {
            return Err(TreeError::CapacityExhausted {
                max_nodes: self.max_nodes,
            });
        }

        let Some(root) = self.root else {
            let idx = self.store.alloc(key, value)?;
            self.root = Some(idx);
            self.len = 1;
            return Ok(1);
        };

        // Descend to the attachment point, routing equal keys left.
        let mut curr = root;
        let (parent, go_left) = loop {
            let cmp = self.compare(self.store.node(curr).key(), &key);
            let next = if cmp >= 0 {
                self.store.node(curr).l
            } else {
                self.store.node(curr).r
            };
            match next {
                Some(n) => curr = n,
                None => break (curr, cmp >= 0),
            }
        };

        let idx = self.store.alloc(key, value)?;
        if go_left {
            self.store.attach_left(parent, Some(idx));
        } else {
            self.store.attach_right(parent, Some(idx));
        }
        balance::rebalance_inserted(&mut self.store, idx);
        self.len += 1;
        Ok(self.len)
    }

    // Deletion ==============================================================

    /// Removes the first entry matching `key` and hands its key and payload
    /// back to the caller. `None` if no entry matches.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let target = self.find(key)?;

        let node = self.store.node(target);
        let victim = if node.l.is_some() && node.r.is_some() {
            // Two children: swap content with the in-order predecessor (the
            // rightmost node of the left subtree), then splice that node out.
            // The target keeps its position; only its content changes.
            let mut pred = node.l.expect("left child exists");
            while let Some(r) = self.store.node(pred).r {
                pred = r;
            }
            self.store.swap_content(target, pred);
            pred
        } else {
            target
        };

        // The victim has at most one child; splice it out and rebalance from
        // its former parent all the way up.
        let parent = self.store.node(victim).p;
        let child = self.store.cut_left(victim).or(self.store.cut_right(victim));
        match parent {
            Some(p) => {
                if self.store.node(p).l == Some(victim) {
                    self.store.node_mut(p).l = None;
                    self.store.node_mut(victim).p = None;
                    self.store.attach_left(p, child);
                } else {
                    self.store.node_mut(p).r = None;
                    self.store.node_mut(victim).p = None;
                    self.store.attach_right(p, child);
                }
            }
            None => self.root = child,
        }
        balance::rebalance_deleted(&mut self.store, parent);

        let entry = self.store.release(victim);
        self.len -= 1;
        if self.len == 0 {
            self.root = None;
        }
        Some(entry)
    }

    /// Removes and drops the first entry matching `key`; reports whether an
    /// entry was found.
    pub fn del(&mut self, key: &K) -> bool {
        self.remove(key).is_some()
    }

    // Teardown ==============================================================

    /// Drops every entry. The arena is reset; all indices become invalid.
    pub fn clear(&mut self) {
        self.store.clear();
        self.root = None;
        self.len = 0;
    }

    /// Consumes the tree and hands every entry back in level order
    /// (left-first).
    pub fn into_entries(mut self) -> Vec<(K, V)> {
        let order = traverse::bfs(&self.store, self.root, BfsDirection::LeftFirst);
        let mut out = Vec::with_capacity(order.len());
        for idx in order {
            out.push(self.store.release(idx));
        }
        self.root = None;
        self.len = 0;
        out
    }

    // Traversal =============================================================

    /// Arena indices of every node in the requested depth-first order.
    pub fn dfs_indices(&self, order: DfsOrder) -> Vec<u32> {
        traverse::dfs(&self.store, self.root, order)
    }

    pub fn dfs_keys(&self, order: DfsOrder) -> Vec<&K> {
        self.dfs_indices(order)
            .into_iter()
            .map(|i| self.store.node(i).key())
            .collect()
    }

    pub fn dfs_values(&self, order: DfsOrder) -> Vec<&V> {
        self.dfs_indices(order)
            .into_iter()
            .map(|i| self.store.node(i).value())
            .collect()
    }

    /// Arena indices of every node in level order.
    pub fn bfs_indices(&self, direction: BfsDirection) -> Vec<u32> {
        traverse::bfs(&self.store, self.root, direction)
    }

    pub fn bfs_keys(&self, direction: BfsDirection) -> Vec<&K> {
        self.bfs_indices(direction)
            .into_iter()
            .map(|i| self.store.node(i).key())
            .collect()
    }

    pub fn bfs_values(&self, direction: BfsDirection) -> Vec<&V> {
        self.bfs_indices(direction)
            .into_iter()
            .map(|i| self.store.node(i).value())
            .collect()
    }

    // In-order navigation ===================================================

    /// Index of the minimum entry.
    pub fn first(&self) -> Link {
        util::first(&self.store, self.root)
    }

    /// Index of the maximum entry.
    pub fn last(&self) -> Link {
        util::last(&self.store, self.root)
    }

    /// In-order successor of a live node.
    pub fn next(&self, idx: u32) -> Link {
        util::next(&self.store, idx)
    }

    /// In-order predecessor of a live node.
    pub fn prev(&self, idx: u32) -> Link {
        util::prev(&self.store, idx)
    }

    /// In-order iterator over `(&key, &value)` pairs.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            tree: self,
            curr: self.first(),
        }
    }

    pub fn for_each<F: FnMut(u32, &K, &V)>(&self, mut f: F) {
        let mut curr = self.first();
        while let Some(i) = curr {
            let node = self.store.node(i);
            f(i, node.key(), node.value());
            curr = self.next(i);
        }
    }

    // Diagnostics ===========================================================

    /// Checks every structural invariant; intended for tests and debugging.
    ///
    /// Verifies parent back-references, the AVL balance bound, cached-height
    /// correctness, non-decreasing in-order key order, and that `len`
    /// matches both the reachable node count and the live slot count.
    pub fn assert_valid(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            if self.len != 0 || self.store.live() != 0 {
                return Err("empty root with live nodes".to_string());
            }
            return Ok(());
        };

        if self.store.node(root).p.is_some() {
            return Err("root has a parent".to_string());
        }
        self.check_subtree(root)?;

        let visited = self.dfs_indices(DfsOrder::In);
        if visited.len() != self.len {
            return Err(format!(
                "count mismatch: len {} but {} reachable nodes",
                self.len,
                visited.len()
            ));
        }
        if self.store.live() != self.len {
            return Err(format!(
                "count mismatch: len {} but {} live slots",
                self.len,
                self.store.live()
            ));
        }
        for pair in visited.windows(2) {
            let prev = self.store.node(pair[0]).key();
            let curr = self.store.node(pair[1]).key();
            if self.compare(prev, curr) > 0 {
                return Err("in-order key order violated".to_string());
            }
        }
        Ok(())
    }

    fn check_subtree(&self, idx: u32) -> Result<i32, String> {
        let (l, r) = {
            let node = self.store.node(idx);
            (node.l, node.r)
        };

        let lh = match l {
            Some(l) => {
                if self.store.node(l).p != Some(idx) {
                    return Err(format!("broken parent link on left child of slot {idx}"));
                }
                self.check_subtree(l)?
            }
            None => -1,
        };
        let rh = match r {
            Some(r) => {
                if self.store.node(r).p != Some(idx) {
                    return Err(format!("broken parent link on right child of slot {idx}"));
                }
                self.check_subtree(r)?
            }
            None => -1,
        };

        if (lh - rh).abs() > 1 {
            return Err(format!("AVL balance violated at slot {idx}"));
        }
        let height = 1 + lh.max(rh);
        if self.store.node(idx).height != height {
            return Err(format!(
                "cached height mismatch at slot {idx}: expected {height}, got {}",
                self.store.node(idx).height
            ));
        }
        Ok(height)
    }
}

impl<K, V, C> AvlTree<K, V, C>
where
    K: Debug,
    V: Debug,
    C: Fn(&K, &K) -> i32,
{
    /// Debug dump of the structure with per-node height and balance factor.
    pub fn print(&self) -> String {
        self.print_node(self.root, "")
    }

    fn print_node(&self, link: Link, tab: &str) -> String {
        match link {
            None => "∅".to_string(),
            Some(i) => {
                let node = self.store.node(i);
                let left = self.print_node(node.l, &format!("{tab}  "));
                let right = self.print_node(node.r, &format!("{tab}  "));
                format!(
                    "Node[{i}] [h={} bf={}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                    node.height,
                    balance::balance_factor(&self.store, i),
                    node.key(),
                    node.value()
                )
            }
        }
    }
}

/// In-order iterator returned by [`AvlTree::iter`].
pub struct Iter<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    tree: &'a AvlTree<K, V, C>,
    curr: Link,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        self.curr = self.tree.next(idx);
        let node = self.tree.store.node(idx);
        Some((node.key(), node.value()))
    }
}
