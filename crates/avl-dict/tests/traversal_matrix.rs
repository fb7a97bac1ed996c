use avl_dict::{AvlTree, BfsDirection, DfsOrder};

fn alphabet_tree() -> AvlTree<&'static str, i32> {
    // This insertion order builds a perfectly balanced 7-node tree without
    // triggering a single rotation.
    let mut tree = AvlTree::new();
    for (i, key) in ["d", "b", "f", "a", "c", "e", "g"].into_iter().enumerate() {
        tree.insert(key, i as i32).unwrap();
    }
    tree.assert_valid().unwrap();
    tree
}

#[test]
fn dfs_orders_matrix() {
    let tree = alphabet_tree();

    let keys = |order| -> Vec<&str> { tree.dfs_keys(order).into_iter().copied().collect() };
    assert_eq!(keys(DfsOrder::In), vec!["a", "b", "c", "d", "e", "f", "g"]);
    assert_eq!(keys(DfsOrder::Pre), vec!["d", "b", "a", "c", "f", "e", "g"]);
    assert_eq!(keys(DfsOrder::Post), vec!["a", "c", "b", "e", "g", "f", "d"]);
}

#[test]
fn bfs_directions_matrix() {
    let tree = alphabet_tree();

    let keys = |dir| -> Vec<&str> { tree.bfs_keys(dir).into_iter().copied().collect() };
    assert_eq!(
        keys(BfsDirection::LeftFirst),
        vec!["d", "b", "f", "a", "c", "e", "g"]
    );
    assert_eq!(
        keys(BfsDirection::RightFirst),
        vec!["d", "f", "b", "g", "e", "c", "a"]
    );
}

#[test]
fn extraction_modes_matrix() {
    let tree = alphabet_tree();

    // Index extraction exposes node identities; keys/values follow them.
    let indices = tree.dfs_indices(DfsOrder::In);
    assert_eq!(indices.len(), tree.len());
    let via_indices: Vec<&str> = indices.iter().map(|&i| *tree.key(i)).collect();
    assert_eq!(via_indices, vec!["a", "b", "c", "d", "e", "f", "g"]);

    // Values were inserted in BFS-left order, so level order recovers 0..7.
    let values: Vec<i32> = tree
        .bfs_values(BfsDirection::LeftFirst)
        .into_iter()
        .copied()
        .collect();
    assert_eq!(values, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn empty_and_single_traversal_matrix() {
    let empty = AvlTree::<i32, i32>::new();
    assert!(empty.dfs_indices(DfsOrder::In).is_empty());
    assert!(empty.dfs_indices(DfsOrder::Pre).is_empty());
    assert!(empty.bfs_indices(BfsDirection::RightFirst).is_empty());

    let mut single = AvlTree::<i32, i32>::new();
    single.insert(7, 70).unwrap();
    for order in [DfsOrder::Pre, DfsOrder::In, DfsOrder::Post] {
        assert_eq!(single.dfs_keys(order), vec![&7]);
    }
    for dir in [BfsDirection::LeftFirst, BfsDirection::RightFirst] {
        assert_eq!(single.bfs_keys(dir), vec![&7]);
    }
}

#[test]
fn insert_rotation_preserves_root_position_matrix() {
    let mut tree = AvlTree::<i32, i32>::new();
    tree.insert(1, 10).unwrap();
    let root = tree.root_index().unwrap();

    tree.insert(2, 20).unwrap();
    tree.insert(3, 30).unwrap();
    tree.assert_valid().unwrap();

    // The rotation swaps content instead of relinking, so the original slot
    // is still the root; it now holds the middle key.
    assert_eq!(tree.root_index(), Some(root));
    assert_eq!(*tree.key(root), 2);
    assert_eq!(*tree.value(root), 20);

    let left = tree.left(root).unwrap();
    let right = tree.right(root).unwrap();
    assert_eq!(*tree.key(left), 1);
    assert_eq!(*tree.key(right), 3);
    assert_eq!(tree.height(left), 0);
    assert_eq!(tree.height(right), 0);
    assert_eq!(tree.height(root), 1);
}

#[test]
fn delete_rebalances_chain_matrix() {
    let mut tree = AvlTree::<i32, i32>::new();
    for key in 1..=5 {
        tree.insert(key, key).unwrap();
        tree.assert_valid().unwrap();
    }

    // Removing the minimum of this shape unbalances the root; the delete
    // walk must rotate there and leave a valid tree of height 2.
    assert!(tree.del(&1));
    tree.assert_valid().unwrap();

    let keys: Vec<i32> = tree.dfs_keys(DfsOrder::In).into_iter().copied().collect();
    assert_eq!(keys, vec![2, 3, 4, 5]);

    let root = tree.root_index().unwrap();
    assert_eq!(*tree.key(root), 4);
    assert_eq!(tree.height(root), 2);
}

#[test]
fn delete_two_children_swaps_with_predecessor_matrix() {
    let mut tree = alphabet_tree();
    let root = tree.root_index().unwrap();
    assert_eq!(*tree.key(root), "d");

    // The root has two children: its content is replaced by the in-order
    // predecessor's, and the predecessor's old position is spliced out.
    let (k, _v) = tree.remove(&"d").unwrap();
    assert_eq!(k, "d");
    assert_eq!(tree.root_index(), Some(root));
    assert_eq!(*tree.key(root), "c");
    tree.assert_valid().unwrap();

    let keys: Vec<&str> = tree.dfs_keys(DfsOrder::In).into_iter().copied().collect();
    assert_eq!(keys, vec!["a", "b", "c", "e", "f", "g"]);
}

#[test]
fn drain_via_deletion_matrix() {
    let mut tree = alphabet_tree();
    for key in ["a", "b", "c", "d", "e", "f", "g"] {
        assert!(tree.del(&key));
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.root_index(), None);
    assert!(tree.dfs_indices(DfsOrder::In).is_empty());
}
