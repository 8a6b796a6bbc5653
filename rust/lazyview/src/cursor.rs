//! Cursor capability tiers.
//!
//! A cursor is a cheaply clonable position within a sequence. What a cursor can do is
//! expressed by the trait tower below, one trait per capability [`Tier`]:
//!
//! - [`Cursor`]: single-pass. Read the current element, step forward, and tell whether
//!   the natural end of the underlying sequence was reached.
//! - [`ForwardCursor`]: multi-pass. Copies are independent and comparable.
//! - [`BidirectionalCursor`]: can step backward.
//! - [`RandomAccessCursor`]: can jump by a signed offset and measure the signed offset
//!   between two positions, both in O(1).
//!
//! Adaptors implement each trait only when every wrapped cursor supports it, so asking a
//! composed cursor for an operation its weakest participant lacks is a trait-bound error
//! at compile time. Each cursor also declares its tier as the associated constant
//! [`Cursor::TIER`], computed with [`Tier::min`] from the tiers it wraps.

use crate::sentinel::Sentinel;

/// Capability tier of a cursor. Each tier is a superset of the operations of the
/// tiers before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    SinglePass,
    Forward,
    Bidirectional,
    RandomAccess,
}

impl Tier {
    /// Returns the weaker of the two tiers.
    pub const fn min(self, other: Tier) -> Tier {
        if (self as u8) <= (other as u8) {
            self
        } else {
            other
        }
    }

    /// Returns `true` if this tier provides every operation of `other`.
    pub const fn includes(self, other: Tier) -> bool {
        (self as u8) >= (other as u8)
    }
}

/// Tier of an adaptor that supports random-access jumps only when it holds a real
/// end cursor (`end` is the sentinel's limit), and otherwise tops out at `cap`.
pub const fn jump_tier(cursor: Tier, end: Tier, cap: Tier) -> Tier {
    if matches!(cursor.min(end), Tier::RandomAccess) {
        Tier::RandomAccess
    } else {
        cursor.min(cap)
    }
}

/// Single-pass cursor.
pub trait Cursor: Clone {
    /// The element (or projected value) produced by [`Cursor::get`].
    type Item;

    /// Declared capability tier.
    const TIER: Tier;

    /// Returns the element at the current position.
    ///
    /// Calling this on a cursor that is at its end is a logic error and may panic.
    fn get(&self) -> Self::Item;

    /// Steps to the next position.
    fn advance(&mut self);

    /// Returns `true` when the cursor has reached the natural end of what it walks.
    ///
    /// This is the termination predicate behind the zero-sized [`End`](crate::End)
    /// sentinel.
    fn at_end(&self) -> bool;

    /// Number of steps until [`Cursor::at_end`] holds.
    ///
    /// The default walks a copy of the cursor; cursors that know their length
    /// override this with an O(1) computation.
    fn remaining(&self) -> usize {
        let mut cursor = self.clone();
        let mut count = 0;
        while !cursor.at_end() {
            cursor.advance();
            count += 1;
        }
        count
    }

    /// Steps forward `n` times.
    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Steps forward at most `n` times, stopping early at `end`. Returns the number
    /// of steps taken.
    fn advance_within<S: Sentinel<Self>>(&mut self, n: usize, end: &S) -> usize {
        let mut taken = 0;
        while taken < n && !end.is_end(self) {
            self.advance();
            taken += 1;
        }
        taken
    }
}

/// Multi-pass cursor. Equality compares logical positions, and is only meaningful
/// between cursors produced by the same view.
pub trait ForwardCursor: Cursor + PartialEq {
    /// Number of forward steps from `self` to `other`. `other` must not precede `self`.
    fn steps_to(&self, other: &Self) -> usize {
        let mut cursor = self.clone();
        let mut count = 0;
        while cursor != *other {
            cursor.advance();
            count += 1;
        }
        count
    }
}

pub trait BidirectionalCursor: ForwardCursor {
    /// Steps to the previous position. Retreating from the first position is a logic
    /// error.
    fn retreat(&mut self);

    fn retreat_n(&mut self, n: usize) {
        for _ in 0..n {
            self.retreat();
        }
    }
}

pub trait RandomAccessCursor: BidirectionalCursor {
    /// Jumps by `n` positions (negative `n` moves backward) in O(1).
    fn advance_by(&mut self, n: isize);

    /// Signed number of positions from `origin` to `self`.
    fn offset_from(&self, origin: &Self) -> isize;
}

/// Number of elements between `begin` and `end`.
///
/// O(1) when the pair can measure itself (slice cursors, and adaptors over them that
/// override [`Cursor::remaining`] / [`ForwardCursor::steps_to`]); a forward scan
/// otherwise.
pub fn distance<C: Cursor, S: Sentinel<C>>(begin: &C, end: &S) -> usize {
    end.distance_from(begin)
}

/// Returns `cursor` advanced by `n` steps.
pub fn next<C: Cursor>(mut cursor: C, n: usize) -> C {
    cursor.advance_n(n);
    cursor
}

/// Returns `cursor` moved back by `n` steps.
pub fn prev<C: BidirectionalCursor>(mut cursor: C, n: usize) -> C {
    cursor.retreat_n(n);
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_order() {
        assert!(Tier::SinglePass < Tier::Forward);
        assert!(Tier::Forward < Tier::Bidirectional);
        assert!(Tier::Bidirectional < Tier::RandomAccess);
    }

    #[test]
    fn test_tier_min() {
        assert_eq!(Tier::RandomAccess.min(Tier::Forward), Tier::Forward);
        assert_eq!(Tier::SinglePass.min(Tier::RandomAccess), Tier::SinglePass);
        assert_eq!(Tier::Bidirectional.min(Tier::Bidirectional), Tier::Bidirectional);
    }

    #[test]
    fn test_tier_includes() {
        assert!(Tier::RandomAccess.includes(Tier::Forward));
        assert!(!Tier::Forward.includes(Tier::Bidirectional));
    }

    #[test]
    fn test_jump_tier() {
        assert_eq!(
            jump_tier(Tier::RandomAccess, Tier::RandomAccess, Tier::Forward),
            Tier::RandomAccess
        );
        assert_eq!(
            jump_tier(Tier::RandomAccess, Tier::Forward, Tier::Bidirectional),
            Tier::Bidirectional
        );
        assert_eq!(
            jump_tier(Tier::Bidirectional, Tier::RandomAccess, Tier::Forward),
            Tier::Forward
        );
    }
}
