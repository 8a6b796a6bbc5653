//! End markers.
//!
//! A view's end is either another cursor of the same type (a symmetric, or "common",
//! end), or the zero-sized [`End`] marker that defers to the cursor's own
//! [`Cursor::at_end`]. Adaptors expose [`End`] and compute termination themselves,
//! which lets them wrap infinite or self-terminating sequences such as C strings.

use crate::cursor::{Cursor, ForwardCursor, Tier};

/// Termination test for cursors of type `C`.
pub trait Sentinel<C>: Clone {
    /// Highest cursor tier that can be walked against this sentinel. Backward
    /// traversal from the end needs a real end cursor, so [`End`] caps at
    /// [`Tier::Forward`].
    const LIMIT: Tier;

    /// Returns `true` if `cursor` has reached this end.
    fn is_end(&self, cursor: &C) -> bool;

    /// Number of steps from `cursor` to this end.
    fn distance_from(&self, cursor: &C) -> usize;
}

/// Zero-sized end marker: a cursor is at the end when its own
/// [`at_end`](Cursor::at_end) says so.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct End;

impl<C: Cursor> Sentinel<C> for End {
    const LIMIT: Tier = Tier::Forward;

    #[inline]
    fn is_end(&self, cursor: &C) -> bool {
        cursor.at_end()
    }

    #[inline]
    fn distance_from(&self, cursor: &C) -> usize {
        cursor.remaining()
    }
}

impl<C: ForwardCursor> Sentinel<C> for C {
    const LIMIT: Tier = Tier::RandomAccess;

    #[inline]
    fn is_end(&self, cursor: &C) -> bool {
        cursor == self
    }

    #[inline]
    fn distance_from(&self, cursor: &C) -> usize {
        cursor.steps_to(self)
    }
}
