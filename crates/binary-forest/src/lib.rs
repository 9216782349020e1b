//! Arena-based binary search trees with fail-fast in-order cursors.
//!
//! Two tree types behind one [`BinaryTree`] contract:
//!
//! - [`BinarySearchTree`] — plain, unbalanced baseline.
//! - [`AvlTree`] — height-balanced via the four AVL rotation cases.
//!
//! Instead of owning pointers, nodes live in a dense `Vec`-backed arena and
//! every link is an `Option<u32>` index; the `p` back-reference is
//! non-owning and used only for upward walks during rebalancing, deletion,
//! and successor traversal. Structural changes advance an epoch counter,
//! and [`Cursor`] snapshots it to detect mutation mid-traversal
//! ([`CursorError::ConcurrentModification`]); [`Cursor::remove_last`] is the
//! one sanctioned mid-traversal mutation.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] link trait, [`TreeNode`], the [`BinaryTree`] contract |
//! | [`util`] | arena traversal and splice helpers, validators, debug printer |
//! | [`balance`] | breadth-first depth, balance factor, rotations, rebalancing |
//! | [`bst`] | [`BinarySearchTree`] |
//! | [`avl`] | [`AvlTree`] |
//! | [`cursor`] | fail-fast [`Cursor`] and the borrowing [`Iter`] |
//! | [`error`] | [`CursorError`] |

pub mod avl;
pub mod balance;
pub mod bst;
pub mod cursor;
pub mod error;
pub mod types;
pub mod util;

pub use avl::AvlTree;
pub use bst::BinarySearchTree;
pub use cursor::{Cursor, Iter};
pub use error::CursorError;
pub use types::{BinaryTree, Node, TreeNode};
