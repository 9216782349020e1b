//! Fail-fast in-order traversal.
//!
//! [`Cursor`] is detached state: an explicit stack of arena indices (the
//! in-order predecessor chain), the last produced index, and an epoch
//! snapshot. Every call borrows the tree it was created from, which is what
//! allows a caller to mutate the tree between calls; the snapshot check then
//! turns that mutation into [`CursorError::ConcurrentModification`] instead
//! of a silently wrong traversal. A cursor is only meaningful against the
//! tree that created it.
//!
//! [`Iter`] is the borrowing complement: it holds a shared borrow of the
//! arena for its whole lifetime, so staleness cannot arise and no epoch
//! check is needed.

use crate::error::CursorError;
use crate::types::{BinaryTree, TreeNode};

fn push_spine<T>(nodes: &[TreeNode<T>], mut curr: Option<u32>, stack: &mut Vec<u32>) {
    while let Some(i) = curr {
        stack.push(i);
        curr = nodes[i as usize].l;
    }
}

/// Fail-fast ascending cursor over a tree's values.
///
/// Produces a lazy, finite, non-restartable sequence; re-iterating requires
/// a new cursor.
#[derive(Clone, Debug)]
pub struct Cursor {
    stack: Vec<u32>,
    last: Option<u32>,
    snapshot: u64,
}

impl Cursor {
    /// A cursor positioned before the smallest value of `tree`, snapshotting
    /// its current epoch.
    pub fn new<T: Ord, B: BinaryTree<T>>(tree: &B) -> Self {
        let mut stack = Vec::new();
        push_spine(tree.nodes(), tree.root(), &mut stack);
        Self {
            stack,
            last: None,
            snapshot: tree.epoch(),
        }
    }

    /// Whether `next` has more values to produce.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Produces the next value in ascending order, or `Ok(None)` once
    /// exhausted. Fails when the tree was structurally modified since the
    /// snapshot.
    pub fn next<'a, T: Ord, B: BinaryTree<T>>(
        &mut self,
        tree: &'a B,
    ) -> Result<Option<&'a T>, CursorError> {
        if self.snapshot != tree.epoch() {
            return Err(CursorError::ConcurrentModification);
        }
        let Some(n) = self.stack.pop() else {
            return Ok(None);
        };
        let nodes = tree.nodes();
        push_spine(nodes, nodes[n as usize].r, &mut self.stack);
        self.last = Some(n);
        Ok(Some(&nodes[n as usize].value))
    }

    /// Removes the last value produced by `next` through the tree's own
    /// deletion path and returns it. The sole sanctioned way to mutate the
    /// tree mid-traversal: the cursor resyncs its snapshot afterwards, so
    /// subsequent calls do not spuriously fail.
    pub fn remove_last<T: Ord, B: BinaryTree<T>>(
        &mut self,
        tree: &mut B,
    ) -> Result<T, CursorError> {
        if self.snapshot != tree.epoch() {
            return Err(CursorError::ConcurrentModification);
        }
        let Some(last) = self.last.take() else {
            return Err(CursorError::NoLastAccess);
        };
        let value = tree.remove_index(last);

        // Rebalancing may have reshaped the tree arbitrarily, so the stack
        // is re-seeded from the new root: descending left through every node
        // greater than the removed value rebuilds the predecessor chain of
        // the traversal's current position.
        self.stack.clear();
        let nodes = tree.nodes();
        let mut curr = tree.root();
        while let Some(i) = curr {
            if nodes[i as usize].value > value {
                self.stack.push(i);
                curr = nodes[i as usize].l;
            } else {
                curr = nodes[i as usize].r;
            }
        }
        self.snapshot = tree.epoch();
        Ok(value)
    }
}

/// Borrowing in-order iterator over a tree's values.
pub struct Iter<'a, T> {
    nodes: &'a [TreeNode<T>],
    curr: Option<u32>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a [TreeNode<T>], root: Option<u32>) -> Self {
        Self {
            nodes,
            curr: crate::util::first(nodes, root),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let i = self.curr?;
        self.curr = crate::util::next(self.nodes, i);
        Some(&self.nodes[i as usize].value)
    }
}
