//! Cursor error types.

use thiserror::Error;

/// Failures surfaced by [`Cursor`](crate::Cursor) operations.
///
/// Both are local and recoverable: a stale cursor is replaced by
/// constructing a fresh one, and `remove_last` succeeds once `next` has
/// produced an element. Neither leaves the tree in an inconsistent state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The tree's epoch moved past the cursor's snapshot: the structure was
    /// changed outside the cursor, which must be discarded.
    #[error("tree was structurally modified after the cursor was created")]
    ConcurrentModification,

    /// `remove_last` was called before `next` produced an element, or twice
    /// in a row without an intervening `next`.
    #[error("no element has been produced since construction or the previous removal")]
    NoLastAccess,
}
