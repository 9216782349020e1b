use binary_forest::{AvlTree, BinaryTree};

#[test]
fn avl_smoke_matrix() {
    let mut tree = AvlTree::<i32>::new();
    assert_eq!(tree.depth(), 0);
    assert!(tree.is_empty());

    for v in [6, 3, 1, 2, 5, 4, 9, 7, 8] {
        assert!(tree.insert(v));
        tree.assert_valid().unwrap();
    }

    assert_eq!(tree.size(), 9);
    assert!(tree.contains(&1));
    assert!(tree.contains(&9));
    assert!(!tree.contains(&10));

    let values: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn avl_duplicate_insert_matrix() {
    let mut tree = AvlTree::<i32>::new();
    tree.insert(42);
    tree.insert(24);
    let epoch = tree.epoch();

    assert!(tree.insert(42));
    assert_eq!(tree.size(), 2);
    assert!(tree.epoch() > epoch);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![24, 42]);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_ladder_insert_delete_matrix() {
    let mut tree = AvlTree::<i32>::new();

    for i in 0..300 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 300);

    for i in (0..300).step_by(3) {
        assert_eq!(tree.remove(&i), Some(i));
        tree.assert_valid().unwrap();
    }

    for i in 0..300 {
        if i % 3 == 0 {
            assert!(!tree.contains(&i));
        } else {
            assert!(tree.contains(&i));
        }
    }
    assert_eq!(tree.size(), 200);
}

#[test]
fn avl_ascending_insert_stays_logarithmic_matrix() {
    let mut tree = AvlTree::<u32>::new();
    for i in 1..=1024 {
        tree.insert(i);
    }
    tree.assert_valid().unwrap();
    // The Fibonacci bound: no AVL tree of 1024 nodes is deeper than 14.
    assert!(tree.depth() <= 14, "depth {} exceeds AVL bound", tree.depth());
}

#[test]
fn avl_remove_root_with_two_children_matrix() {
    let mut tree = AvlTree::<i32>::new();
    tree.insert(2);
    tree.insert(1);
    tree.insert(3);

    assert_eq!(tree.remove(&2), Some(2));
    tree.assert_valid().unwrap();
    assert_eq!(tree.size(), 2);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3]);

    // The in-order successor's value was promoted into the root slot.
    let root = tree.root().unwrap();
    assert_eq!(tree.nodes()[root as usize].value, 3);
}

#[test]
fn avl_remove_absent_matrix() {
    let mut tree = AvlTree::<i32>::new();
    tree.insert(1);
    let epoch = tree.epoch();

    assert_eq!(tree.remove(&7), None);
    assert_eq!(tree.epoch(), epoch);
    assert_eq!(tree.size(), 1);
}

#[test]
fn avl_misc_api_matrix() {
    let mut tree = AvlTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.first(), None);

    tree.insert(10);
    tree.insert(5);
    tree.insert(20);
    assert_eq!(tree.depth(), 2);

    let mut walked = Vec::new();
    let mut entry = tree.first();
    while let Some(i) = entry {
        walked.push(tree.nodes()[i as usize].value);
        entry = tree.next_of(i);
    }
    assert_eq!(walked, vec![5, 10, 20]);

    let last = binary_forest::util::last(tree.nodes(), tree.root()).unwrap();
    assert_eq!(tree.nodes()[last as usize].value, 20);
    assert_eq!(tree.next_of(last), None);

    let rendered = format!("{tree:?}");
    assert!(rendered.contains("10"));

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.first(), None);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_remove_rebalances_every_level_matrix() {
    // Deleting from the short side of a deep tree can surface violations at
    // more than one height; every node must still satisfy the bound.
    let mut tree = AvlTree::<i32>::new();
    for i in 0..128 {
        tree.insert(i);
    }
    for i in 64..128 {
        tree.remove(&i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 64);
}
