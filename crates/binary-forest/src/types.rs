//! Node and tree trait definitions.
//!
//! Nodes live in a [`Vec`]-backed arena owned by the tree; every "pointer"
//! is an `Option<u32>` index into that arena. The `p` link is a non-owning
//! back-reference used for upward walks only; liveness is defined by
//! reachability from the tree root through `l` / `r`.

use crate::cursor::{Cursor, Iter};

/// Link accessors for arena-backed binary tree nodes (`p` / `l` / `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// A single stored value plus its tree links.
#[derive(Clone, Debug)]
pub struct TreeNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub value: T,
}

impl<T> TreeNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            value,
        }
    }
}

impl<T> Node for TreeNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

/// Shared contract for ordered binary trees.
///
/// Implemented by [`BinarySearchTree`](crate::BinarySearchTree) (plain) and
/// [`AvlTree`](crate::AvlTree) (height-balanced). The arena-facing methods
/// (`nodes`, `root`, `epoch`, `remove_index`) exist so detached cursors can
/// traverse and mutate any tree type through one surface; indices are stable
/// between structural changes and meaningless across them, which is exactly
/// what the epoch counter guards.
pub trait BinaryTree<T: Ord> {
    /// Number of levels from the root to the deepest leaf; 0 when empty,
    /// the root alone counts as 1.
    fn depth(&self) -> usize;

    /// Number of stored values.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn contains(&self, value: &T) -> bool;

    /// Inserts `value`, keeping the search order. A value already present is
    /// silently ignored (the size does not change), but the epoch still
    /// advances, so in-flight cursors are invalidated either way.
    fn insert(&mut self, value: T) -> bool;

    /// Removes `value` and returns it, or `None` if absent. Absent removals
    /// do not advance the epoch.
    fn remove(&mut self, value: &T) -> Option<T>;

    /// Drops every stored value and advances the epoch.
    fn clear(&mut self);

    /// The backing arena.
    fn nodes(&self) -> &[TreeNode<T>];

    /// Arena index of the root node.
    fn root(&self) -> Option<u32>;

    /// Structural-modification counter, advanced by `insert` (including
    /// ignored duplicates), value-bearing `remove`, and `clear`.
    fn epoch(&self) -> u64;

    /// Removes the node at arena index `idx` and returns its value. The
    /// index must come from this tree's current epoch.
    fn remove_index(&mut self, idx: u32) -> T;

    /// Arena index of the smallest value.
    fn first(&self) -> Option<u32> {
        crate::util::first(self.nodes(), self.root())
    }

    /// Arena index of the in-order successor of `curr`.
    fn next_of(&self, curr: u32) -> Option<u32> {
        crate::util::next(self.nodes(), curr)
    }

    /// A fail-fast in-order cursor positioned before the smallest value.
    fn cursor(&self) -> Cursor
    where
        Self: Sized,
    {
        Cursor::new(self)
    }

    /// Borrowing ascending iterator over stored values. Holds a shared
    /// borrow for its lifetime, so it cannot observe structural changes and
    /// needs no staleness check.
    fn iter(&self) -> Iter<'_, T>
    where
        Self: Sized,
    {
        Iter::new(self.nodes(), self.root())
    }
}
