use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use avl_dict::{AvlTree, DfsOrder};

/// Seeded random churn against `BTreeMap` as the ordering oracle.
///
/// Keys are kept distinct because the relative order of duplicate keys is
/// unspecified.
#[test]
fn random_churn_matrix() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0xA11C_E5ED);
    let mut tree = AvlTree::<u32, u32>::new();
    let mut oracle = BTreeMap::<u32, u32>::new();

    for step in 0..4000u32 {
        let key = rng.gen_range(0..256u32);
        if rng.gen_bool(0.6) {
            if !oracle.contains_key(&key) {
                let value = rng.gen::<u32>();
                tree.insert(key, value).unwrap();
                oracle.insert(key, value);
            }
        } else {
            let expected = oracle.remove(&key).map(|v| (key, v));
            assert_eq!(tree.remove(&key), expected);
        }

        assert_eq!(tree.len(), oracle.len());
        if step % 64 == 0 {
            tree.assert_valid().unwrap();
        }
    }

    tree.assert_valid().unwrap();

    let keys: Vec<u32> = tree.dfs_keys(DfsOrder::In).into_iter().copied().collect();
    let expected: Vec<u32> = oracle.keys().copied().collect();
    assert_eq!(keys, expected);

    let pairs: Vec<(u32, u32)> = tree.iter().map(|(k, v)| (*k, *v)).collect();
    let expected: Vec<(u32, u32)> = oracle.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs, expected);
}

/// The balanced height bound: 1.44 * log2(n + 2) is the AVL worst case.
#[test]
fn random_height_bound_matrix() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let mut tree = AvlTree::<u64, ()>::new();

    let n = 2048usize;
    let mut inserted = 0usize;
    while inserted < n {
        let key = rng.gen::<u64>();
        if !tree.has(&key) {
            tree.insert(key, ()).unwrap();
            inserted += 1;
        }
    }
    tree.assert_valid().unwrap();

    let root = tree.root_index().unwrap();
    let bound = (1.44 * ((n as f64) + 2.0).log2()).ceil() as i32;
    assert!(tree.height(root) <= bound);
}
