//! Plain (unbalanced) binary search tree.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::balance;
use crate::types::{BinaryTree, TreeNode};
use crate::util;

/// Unbalanced binary search tree over a dense arena.
///
/// The baseline the balanced variant is measured against: identical contract
/// and traversal behavior, no rotations, so depth degenerates to O(n) for
/// sorted insertion orders.
pub struct BinarySearchTree<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<u32>,
    epoch: u64,
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            epoch: 0,
        }
    }

    /// Checks parent links, search order, and full reachability of the
    /// arena. No balance bound here.
    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_links(&self.nodes, self.root)?;
        util::assert_ordered(&self.nodes, self.root)
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", util::print(&self.nodes, self.root, ""))
    }
}

impl<T: Ord> BinaryTree<T> for BinarySearchTree<T> {
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
                let s = util::first(&self.nodes, Some(r)).expect("right subtree is non-empty");
                let (lo, hi) = if idx < s { (idx, s) } else { (s, idx) };
                let (head, tail) = self.nodes.split_at_mut(hi as usize);
                std::mem::swap(&mut head[lo as usize].value, &mut tail[0].value);
                s
            }
            _ => idx,
        };
        let detached = util::detach(&mut self.nodes, self.root, target);
        self.root = detached.root;
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
