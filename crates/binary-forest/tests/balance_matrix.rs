use binary_forest::balance::{balance_factor, depth, rotate_left, rotate_right};
use binary_forest::TreeNode;

fn node(v: i32) -> TreeNode<i32> {
    TreeNode::new(v)
}

/// Right-leaning chain 1 -> 2 -> 3.
fn chain() -> Vec<TreeNode<i32>> {
    let mut arena = vec![node(1), node(2), node(3)];
    arena[0].r = Some(1);
    arena[1].p = Some(0);
    arena[1].r = Some(2);
    arena[2].p = Some(1);
    arena
}

#[test]
fn depth_counts_levels_matrix() {
    let arena = chain();
    assert_eq!(depth(&arena, None), 0);
    assert_eq!(depth(&arena, Some(2)), 1);
    assert_eq!(depth(&arena, Some(1)), 2);
    assert_eq!(depth(&arena, Some(0)), 3);
    assert_eq!(balance_factor(&arena, 0), -2);
    assert_eq!(balance_factor(&arena, 2), 0);
}

#[test]
fn rotate_left_promotes_right_child_matrix() {
    let mut arena = chain();
    rotate_left(&mut arena, 0);

    assert_eq!(arena[1].p, None);
    assert_eq!(arena[1].l, Some(0));
    assert_eq!(arena[1].r, Some(2));
    assert_eq!(arena[0].p, Some(1));
    assert_eq!(arena[0].l, None);
    assert_eq!(arena[0].r, None);
    assert_eq!(arena[2].p, Some(1));
    assert_eq!(balance_factor(&arena, 1), 0);
}

#[test]
fn rotate_right_promotes_left_child_matrix() {
    let mut arena = vec![node(3), node(2), node(1)];
    arena[0].l = Some(1);
    arena[1].p = Some(0);
    arena[1].l = Some(2);
    arena[2].p = Some(1);

    rotate_right(&mut arena, 0);

    assert_eq!(arena[1].p, None);
    assert_eq!(arena[1].l, Some(2));
    assert_eq!(arena[1].r, Some(0));
    assert_eq!(arena[0].p, Some(1));
    assert_eq!(balance_factor(&arena, 1), 0);
}

#[test]
fn rotate_left_transfers_inner_subtree_matrix() {
    // 1 with right child 3, whose left child 2 must move under 1.
    let mut arena = vec![node(1), node(3), node(2), node(4)];
    arena[0].r = Some(1);
    arena[1].p = Some(0);
    arena[1].l = Some(2);
    arena[2].p = Some(1);
    arena[1].r = Some(3);
    arena[3].p = Some(1);

    rotate_left(&mut arena, 0);

    assert_eq!(arena[1].p, None);
    assert_eq!(arena[1].l, Some(0));
    assert_eq!(arena[0].r, Some(2));
    assert_eq!(arena[2].p, Some(0));
    assert_eq!(arena[1].r, Some(3));
}

#[test]
fn rotation_under_a_parent_repoints_its_slot_matrix() {
    // 0 -> r 1 -> r 2 -> r 3: rotating at 1 must update 0's right slot.
    let mut arena = vec![node(0), node(1), node(2), node(3)];
    arena[0].r = Some(1);
    arena[1].p = Some(0);
    arena[1].r = Some(2);
    arena[2].p = Some(1);
    arena[2].r = Some(3);
    arena[3].p = Some(2);

    rotate_left(&mut arena, 1);

    assert_eq!(arena[0].r, Some(2));
    assert_eq!(arena[2].p, Some(0));
    assert_eq!(arena[2].l, Some(1));
    assert_eq!(arena[1].p, Some(2));
}
