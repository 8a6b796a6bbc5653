//! Removal of a half-open index window `[from, to)`.
//!
//! The cursor tracks the underlying index of its position and never rests inside the
//! window: stepping onto `from` jumps straight to `to`, clamped at the end of the
//! underlying sequence. Logical (post-removal) indices map to underlying ones as
//!
//! ```text
//! logical(i)  = i                    if i <= from
//!             = from + (i - to)      otherwise
//! physical(k) = k                    if k < from
//!             = min(k + (to - from), len)
//! ```

use lazyview_common::{verify_arg, Result};

use crate::{
    cursor::{jump_tier, BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

/// View of `V` without the elements at underlying indices `[from, to)`.
#[derive(Debug, Clone)]
pub struct Exclude<V> {
    view: V,
    from: usize,
    to: usize,
}

impl<V: View> Exclude<V> {
    /// Fails when `from > to`. A window reaching past the end of the sequence is
    /// clamped.
    pub fn new(view: V, from: usize, to: usize) -> Result<Exclude<V>> {
        verify_arg!(from, from <= to);
        Ok(Exclude { view, from, to })
    }
}

/// Removes the elements at indices `[from, to)` of `view`.
pub fn exclude<V: View>(view: V, from: usize, to: usize) -> Result<Exclude<V>> {
    Exclude::new(view, from, to)
}

#[derive(Debug, Clone)]
pub struct ExcludeCursor<C, S> {
    cur: C,
    end: S,
    /// Underlying index of `cur`.
    index: usize,
    from: usize,
    to: usize,
}

impl<C: Cursor, S: Sentinel<C>> ExcludeCursor<C, S> {
    fn skip_window(&mut self) {
        self.index += self.cur.advance_within(self.to - self.index, &self.end);
    }

    fn logical(&self, index: usize) -> usize {
        if index <= self.from {
            index
        } else {
            self.from + index.saturating_sub(self.to)
        }
    }

    /// Number of removed elements at or after the current position, given the
    /// underlying length `len`.
    fn removed_ahead(&self, len: usize) -> usize {
        let to = self.to.min(len);
        if self.index >= to {
            // window entirely behind
            0
        } else if self.index <= self.from {
            // window entirely ahead
            to.saturating_sub(self.from)
        } else {
            to - self.index
        }
    }
}

impl<C: Cursor, S: Sentinel<C>> Cursor for ExcludeCursor<C, S> {
    type Item = C::Item;

    const TIER: Tier = jump_tier(C::TIER, S::LIMIT, Tier::Bidirectional);

    #[inline]
    fn get(&self) -> C::Item {
        self.cur.get()
    }

    #[inline]
    fn advance(&mut self) {
        self.cur.advance();
        self.index += 1;
        if self.index == self.from {
            self.skip_window();
        }
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.end.is_end(&self.cur)
    }

    fn remaining(&self) -> usize {
        let rest = self.end.distance_from(&self.cur);
        rest - self.removed_ahead(self.index + rest)
    }
}

impl<C, S> PartialEq for ExcludeCursor<C, S> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<C: ForwardCursor, S: Sentinel<C>> ForwardCursor for ExcludeCursor<C, S> {
    fn steps_to(&self, other: &Self) -> usize {
        self.logical(other.index) - self.logical(self.index)
    }
}

impl<C: BidirectionalCursor, S: Sentinel<C>> BidirectionalCursor for ExcludeCursor<C, S> {
    fn retreat(&mut self) {
        self.cur.retreat();
        self.index -= 1;
        if self.index >= self.from && self.index < self.to {
            debug_assert!(self.from > 0, "retreat past the first element");
            self.cur.retreat_n(self.index - self.from + 1);
            self.index = self.from - 1;
        }
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for ExcludeCursor<C, C> {
    fn advance_by(&mut self, n: isize) {
        let len = self.index + self.end.offset_from(&self.cur) as usize;
        let target = self.logical(self.index).wrapping_add_signed(n);
        let physical = if target < self.from {
            target
        } else {
            (target + (self.to - self.from)).min(len)
        };
        self.cur.advance_by(physical as isize - self.index as isize);
        self.index = physical;
    }

    fn offset_from(&self, origin: &Self) -> isize {
        self.logical(self.index) as isize - self.logical(origin.index) as isize
    }
}

impl<V: View> View for Exclude<V> {
    type Cursor = ExcludeCursor<V::Cursor, V::Sentinel>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        let mut cursor = ExcludeCursor {
            cur: self.view.begin(),
            end: self.view.end(),
            index: 0,
            from: self.from,
            to: self.to,
        };
        if self.from == 0 {
            cursor.skip_window();
        }
        cursor
    }

    fn end(&self) -> End {
        End
    }
}

impl<V: CommonView> CommonView for Exclude<V> {
    fn end_cursor(&self) -> Self::Cursor {
        let begin = self.view.begin();
        let end = self.view.end();
        ExcludeCursor {
            cur: self.view.end_cursor(),
            index: end.distance_from(&begin),
            end,
            from: self.from,
            to: self.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{source::slice::seq, ViewExt};

    fn excluded(data: &[i32], from: usize, to: usize) -> Vec<i32> {
        seq(data)
            .exclude(from, to)
            .unwrap()
            .iter()
            .copied()
            .collect()
    }

    #[test]
    fn test_exclude_middle() {
        let data: Vec<i32> = (1..=10).collect();
        assert_eq!(excluded(&data, 3, 5), vec![1, 2, 3, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_exclude_edges() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(excluded(&data, 0, 2), vec![3, 4, 5]);
        assert_eq!(excluded(&data, 3, 5), vec![1, 2, 3]);
        assert_eq!(excluded(&data, 3, 100), vec![1, 2, 3]);
        assert_eq!(excluded(&data, 0, 100), Vec::<i32>::new());
        assert_eq!(excluded(&data, 2, 2), vec![1, 2, 3, 4, 5]);
        assert_eq!(excluded(&data, 7, 9), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_exclude_rejects_inverted_window() {
        let data = [1, 2, 3];
        let err = seq(&data).exclude(2, 1).unwrap_err();
        assert!(err.is_invalid_arg("from"));
    }

    #[test]
    fn test_exclude_reverse() {
        let data: Vec<i32> = (0..8).collect();
        let view = seq(&data).exclude(2, 5).unwrap();
        assert_eq!(
            view.common_iter().rev().copied().collect::<Vec<_>>(),
            vec![7, 6, 5, 1, 0]
        );
        let view = seq(&data).exclude(0, 3).unwrap();
        assert_eq!(
            view.common_iter().rev().copied().collect::<Vec<_>>(),
            vec![7, 6, 5, 4, 3]
        );
    }

    #[test]
    fn test_exclude_distance() {
        let data: Vec<i32> = (0..10).collect();
        for (from, to, expected) in [(3, 5, 8), (0, 4, 6), (8, 20, 8), (12, 15, 10), (0, 10, 0)] {
            let view = seq(&data).exclude(from, to).unwrap();
            assert_eq!(view.distance(), expected, "window [{from}, {to})");
            assert_eq!(view.begin().remaining(), expected);
            assert_eq!(view.begin().steps_to(&view.end_cursor()), expected);
        }
    }

    #[test]
    fn test_exclude_random_access() {
        let data: Vec<i32> = (0..10).collect();
        let view = seq(&data).exclude(3, 6).unwrap();
        let expected = [0, 1, 2, 6, 7, 8, 9];
        let begin = view.begin();
        for (k, value) in expected.iter().enumerate() {
            let mut cursor = begin.clone();
            cursor.advance_by(k as isize);
            assert_eq!(cursor.get(), value);
            assert_eq!(cursor.offset_from(&begin), k as isize);
        }
        let mut cursor = view.end_cursor();
        assert_eq!(cursor.offset_from(&begin), 7);
        cursor.advance_by(-5);
        assert_eq!(*cursor.get(), 2);
        cursor.advance_by(1);
        assert_eq!(*cursor.get(), 6);
    }

    #[test]
    fn test_exclude_over_end_sentinel() {
        let view = crate::c_string(c"abcdef").exclude(1, 3).unwrap();
        assert_eq!(view.to::<Vec<u8>>(), b"adef".to_vec());
        assert_eq!(
            <ExcludeCursor<crate::CStrCursor<'_>, End> as Cursor>::TIER,
            Tier::Forward
        );
    }
}
