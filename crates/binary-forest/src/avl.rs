//! Height-balanced (AVL) binary search tree.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::balance;
use crate::types::{BinaryTree, TreeNode};
use crate::util;

/// AVL-balanced binary search tree over a dense arena.
///
/// Every insertion and deletion restores `|depth(left) - depth(right)| <= 1`
/// at every node via the four rotation cases, keeping lookups O(log n) even
/// for adversarial (e.g. ascending) insertion orders. Balance checks
/// recompute subtree depth on the fly; see [`crate::balance`] for the cost
/// profile.
pub struct AvlTree<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<u32>,
    epoch: u64,
}

impl<T: Ord> AvlTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            epoch: 0,
        }
    }

    /// Checks every structural invariant: parent links, the AVL height
    /// bound, search order, and full reachability of the arena.
    pub fn assert_valid(&self) -> Result<(), String> {
        balance::assert_avl(&self.nodes, self.root)?;
        util::assert_ordered(&self.nodes, self.root)
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Debug> Debug for AvlTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", util::print(&self.nodes, self.root, ""))
    }
}

impl<T: Ord> BinaryTree<T> for AvlTree<T> {
    fn depth(&self) -> usize {
        balance::depth(&self.nodes, self.root)
    }

    fn size(&self) -> usize {
        self.nodes.len()
    }

    fn contains(&self, value: &T) -> bool {
        util::find(&self.nodes, self.root, value).is_some()
    }

    fn insert(&mut self, value: T) -> bool {
        self.epoch += 1;
        let Some(mut curr) = self.root else {
            self.root = Some(self.nodes.len() as u32);
            self.nodes.push(TreeNode::new(value));
            return true;
        };
        loop {
            match value.cmp(&self.nodes[curr as usize].value) {
                Ordering::Less => match self.nodes[curr as usize].l {
                    Some(l) => curr = l,
                    None => {
                        let n = self.nodes.len() as u32;
                        let mut node = TreeNode::new(value);
                        node.p = Some(curr);
                        self.nodes.push(node);
                        self.nodes[curr as usize].l = Some(n);
                        self.root = balance::rebalance_from(&mut self.nodes, self.root, Some(curr));
                        return true;
                    }
                },
                Ordering::Greater => match self.nodes[curr as usize].r {
                    Some(r) => curr = r,
                    None => {
                        let n = self.nodes.len() as u32;
                        let mut node = TreeNode::new(value);
                        node.p = Some(curr);
                        self.nodes.push(node);
                        self.nodes[curr as usize].r = Some(n);
                        self.root = balance::rebalance_from(&mut self.nodes, self.root, Some(curr));
                        return true;
                    }
                },
                // Duplicates are ignored, but the epoch already advanced.
                Ordering::Equal => return true,
            }
        }
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        let n = util::find(&self.nodes, self.root, value)?;
        Some(self.remove_index(n))
    }

    fn remove_index(&mut self, idx: u32) -> T {
        self.epoch += 1;
        let node = &self.nodes[idx as usize];
        let target = match (node.l, node.r) {
            (Some(_), Some(r)) => {
                // Two children: trade values with the in-order successor so
                // the slot that actually leaves the tree carries the
                // requested value, then splice that slot instead.
                let s = util::first(&self.nodes, Some(r)).expect("right subtree is non-empty");
                let (lo, hi) = if idx < s { (idx, s) } else { (s, idx) };
                let (head, tail) = self.nodes.split_at_mut(hi as usize);
                std::mem::swap(&mut head[lo as usize].value, &mut tail[0].value);
                s
            }
            _ => idx,
        };
        let detached = util::detach(&mut self.nodes, self.root, target);
        self.root = balance::rebalance_to_root(&mut self.nodes, detached.root, detached.parent);
        let node = util::compact(&mut self.nodes, target, &mut self.root);
        node.value
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.epoch += 1;
    }

    fn nodes(&self) -> &[TreeNode<T>] {
        &self.nodes
    }

    fn root(&self) -> Option<u32> {
        self.root
    }

    fn epoch(&self) -> u64 {
        self.epoch
    }
}
