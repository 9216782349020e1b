//! Structural helpers shared by both tree types.
//!
//! Free functions over an `arena: &[N]` / `&mut [N]` slice, generic over the
//! [`Node`] link trait where values are not involved. None of these touch
//! the balance of the tree; rebalancing lives in [`crate::balance`].

use std::fmt::Debug;

use crate::types::{Node, TreeNode};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node under `root`, i.e. the smallest value in the subtree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor of `curr`, walking `p` links when there is no right
/// subtree.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            return Some(pi);
        }
        curr = pi;
        p = get_p(arena, pi);
    }
    None
}

/// Finds the node holding `value` by ordered descent from `root`.
pub fn find<T: Ord>(arena: &[TreeNode<T>], root: Option<u32>, value: &T) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        curr = match value.cmp(&arena[i as usize].value) {
            std::cmp::Ordering::Less => get_l(arena, i),
            std::cmp::Ordering::Greater => get_r(arena, i),
            std::cmp::Ordering::Equal => return Some(i),
        };
    }
    None
}

/// Outcome of [`detach`]: the spliced node's former parent and the new root.
pub(crate) struct Detached {
    pub parent: Option<u32>,
    pub root: Option<u32>,
}

/// Splices node `n` (at most one child) out of the tree, re-pointing the
/// child's `p` link and the parent's child slot. Clears `n`'s links so the
/// detached slot holds no stale indices.
pub(crate) fn detach<N: Node>(arena: &mut [N], root: Option<u32>, n: u32) -> Detached {
    let p = get_p(arena, n);
    let c = get_l(arena, n).or(get_r(arena, n));
    set_p(arena, n, None);
    set_l(arena, n, None);
    set_r(arena, n, None);

    if let Some(c) = c {
        set_p(arena, c, p);
    }
    match p {
        Some(p) => {
            if get_l(arena, p) == Some(n) {
                set_l(arena, p, c);
            } else {
                set_r(arena, p, c);
            }
            Detached { parent: Some(p), root }
        }
        None => Detached { parent: None, root: c },
    }
}

/// Releases the already-detached slot `hole` with `swap_remove`, re-pointing
/// every link that referred to the node moved into the hole. Returns the
/// detached node by value.
pub(crate) fn compact<N: Node>(arena: &mut Vec<N>, hole: u32, root: &mut Option<u32>) -> N {
    let node = arena.swap_remove(hole as usize);
    let moved_from = arena.len() as u32;
    if hole == moved_from {
        return node;
    }

    // The node formerly at `moved_from` now sits at `hole`.
    match get_p(arena, hole) {
        Some(p) => {
            if get_l(arena, p) == Some(moved_from) {
                set_l(arena, p, Some(hole));
            } else {
                set_r(arena, p, Some(hole));
            }
        }
        None => *root = Some(hole),
    }
    if let Some(l) = get_l(arena, hole) {
        set_p(arena, l, Some(hole));
    }
    if let Some(r) = get_r(arena, hole) {
        set_p(arena, r, Some(hole));
    }
    node
}

/// Checks parent-link consistency for every node reachable from `root`.
pub fn assert_links<N: Node>(arena: &[N], root: Option<u32>) -> Result<(), String> {
    let Some(root) = root else {
        return Ok(());
    };
    if get_p(arena, root).is_some() {
        return Err("root has a parent".to_string());
    }
    validate_links(arena, root)
}

fn validate_links<N: Node>(arena: &[N], node: u32) -> Result<(), String> {
    if let Some(l) = get_l(arena, node) {
        if get_p(arena, l) != Some(node) {
            return Err(format!("broken parent link on left child of {node}"));
        }
        validate_links(arena, l)?;
    }
    if let Some(r) = get_r(arena, node) {
        if get_p(arena, r) != Some(node) {
            return Err(format!("broken parent link on right child of {node}"));
        }
        validate_links(arena, r)?;
    }
    Ok(())
}

/// Checks the search order over the in-order chain and that every arena slot
/// is reachable from `root`.
pub fn assert_ordered<T: Ord>(arena: &[TreeNode<T>], root: Option<u32>) -> Result<(), String> {
    let mut count = 0usize;
    let mut prev: Option<u32> = None;
    let mut curr = first(arena, root);
    while let Some(i) = curr {
        count += 1;
        if let Some(p) = prev {
            if arena[p as usize].value >= arena[i as usize].value {
                return Err(format!("search order violated between {p} and {i}"));
            }
        }
        prev = Some(i);
        curr = next(arena, i);
    }
    if count != arena.len() {
        return Err(format!(
            "arena holds {} slots but {count} are reachable from the root",
            arena.len()
        ));
    }
    Ok(())
}

/// Debug printer for arena-backed trees.
pub fn print<T: Debug>(arena: &[TreeNode<T>], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.l, &format!("{tab}  "));
            let right = print(arena, n.r, &format!("{tab}  "));
            format!("Node[{i}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}", n.value)
        }
    }
}
