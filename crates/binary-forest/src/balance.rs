//! Depth, balance factor, and AVL rotation machinery.
//!
//! Depth is recomputed by a breadth-first walk on every query rather than
//! cached per node, so each balance check costs O(subtree). That is the
//! chosen complexity profile for this crate: rebalancing stays allocation-
//! free at the node level and the node layout carries no height field, at
//! the price of more expensive checks on deep subtrees.

use std::collections::VecDeque;

use crate::types::Node;
use crate::util::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Number of levels from `node` down to its deepest leaf. 0 for an absent
/// node; a lone node counts as 1. Level-order walk with an explicit queue.
pub fn depth<N: Node>(arena: &[N], node: Option<u32>) -> usize {
    let mut depth = 0;
    let mut queue: VecDeque<u32> = VecDeque::new();
    if let Some(n) = node {
        queue.push_back(n);
    }
    while !queue.is_empty() {
        depth += 1;
        for _ in 0..queue.len() {
            let n = queue.pop_front().expect("queue is non-empty");
            if let Some(l) = get_l(arena, n) {
                queue.push_back(l);
            }
            if let Some(r) = get_r(arena, n) {
                queue.push_back(r);
            }
        }
    }
    depth
}

/// `depth(left) - depth(right)`. Values outside {-1, 0, 1} mean the AVL
/// invariant is violated at `n`.
pub fn balance_factor<N: Node>(arena: &[N], n: u32) -> i32 {
    let l = depth(arena, get_l(arena, n)) as i32;
    let r = depth(arena, get_r(arena, n)) as i32;
    l - r
}

/// Promotes `n`'s right child into `n`'s slot; `n` becomes its left child
/// and the pivot's old left subtree becomes `n`'s right subtree.
///
/// Pure pointer surgery, no allocation. When `n` was the root, the caller
/// re-derives the root by walking `p` links upward.
pub fn rotate_left<N: Node>(arena: &mut [N], n: u32) {
    let p = get_p(arena, n);
    let pivot = get_r(arena, n).expect("rotate_left needs a right child");
    let inner = get_l(arena, pivot);

    set_p(arena, pivot, p);
    if let Some(p) = p {
        if get_l(arena, p) == Some(n) {
            set_l(arena, p, Some(pivot));
        } else {
            set_r(arena, p, Some(pivot));
        }
    }
    set_p(arena, n, Some(pivot));
    set_r(arena, n, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(n));
    }
    set_l(arena, pivot, Some(n));
}

/// Mirror of [`rotate_left`], promoting `n`'s left child.
pub fn rotate_right<N: Node>(arena: &mut [N], n: u32) {
    let p = get_p(arena, n);
    let pivot = get_l(arena, n).expect("rotate_right needs a left child");
    let inner = get_r(arena, pivot);

    set_p(arena, pivot, p);
    if let Some(p) = p {
        if get_l(arena, p) == Some(n) {
            set_l(arena, p, Some(pivot));
        } else {
            set_r(arena, p, Some(pivot));
        }
    }
    set_p(arena, n, Some(pivot));
    set_l(arena, n, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(n));
    }
    set_r(arena, pivot, Some(n));
}

/// Applies the rotation case for a ±2 violation at `n`: a same-side heavy
/// child needs one rotation (LL / RR), an opposite-side heavy child is first
/// rotated into line (LR / RL).
fn fix_violation<N: Node>(arena: &mut [N], n: u32, bf: i32) {
    if bf > 0 {
        let l = get_l(arena, n).expect("left-heavy node has a left child");
        if balance_factor(arena, l) == -1 {
            rotate_left(arena, l);
        }
        rotate_right(arena, n);
    } else {
        let r = get_r(arena, n).expect("right-heavy node has a right child");
        if balance_factor(arena, r) == 1 {
            rotate_right(arena, r);
        }
        rotate_left(arena, n);
    }
}

fn topmost<N: Node>(arena: &[N], mut n: u32) -> u32 {
    while let Some(p) = get_p(arena, n) {
        n = p;
    }
    n
}

/// Insertion rebalance: walk `p` links upward from `from`, fix the first
/// ancestor whose balance factor reaches ±2, then re-derive the root by
/// walking upward from the rotation point. At most one violation exists
/// after a single insertion, so one fix restores the invariant everywhere.
pub fn rebalance_from<N: Node>(arena: &mut [N], root: Option<u32>, from: Option<u32>) -> Option<u32> {
    let Some(mut n) = from else {
        return root;
    };
    loop {
        let bf = balance_factor(arena, n);
        if bf == 2 || bf == -2 {
            fix_violation(arena, n, bf);
            return Some(topmost(arena, n));
        }
        match get_p(arena, n) {
            Some(p) => n = p,
            None => return Some(n),
        }
    }
}

/// Deletion rebalance: walk from `from` all the way to the root, fixing
/// every ±2 ancestor on the way. Removing a node can shorten a subtree and
/// surface violations at several heights, so a single fix is not enough
/// here.
pub fn rebalance_to_root<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    from: Option<u32>,
) -> Option<u32> {
    let Some(mut n) = from else {
        return root;
    };
    loop {
        let bf = balance_factor(arena, n);
        if bf == 2 || bf == -2 {
            fix_violation(arena, n, bf);
        }
        match get_p(arena, n) {
            Some(p) => n = p,
            None => return Some(n),
        }
    }
}

/// Checks parent-link consistency and the AVL height bound for every node
/// reachable from `root`.
pub fn assert_avl<N: Node>(arena: &[N], root: Option<u32>) -> Result<(), String> {
    crate::util::assert_links(arena, root)?;
    check_balance(arena, root)
}

fn check_balance<N: Node>(arena: &[N], node: Option<u32>) -> Result<(), String> {
    let Some(n) = node else {
        return Ok(());
    };
    let bf = balance_factor(arena, n);
    if !(-1..=1).contains(&bf) {
        return Err(format!("AVL balance violated at {n}: factor {bf}"));
    }
    check_balance(arena, get_l(arena, n))?;
    check_balance(arena, get_r(arena, n))
}
