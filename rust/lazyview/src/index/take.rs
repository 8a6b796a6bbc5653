//! Prefixes, suffixes and index windows.
//!
//! [`Take`] counts the elements it hands out, so it keeps every capability of the
//! wrapped cursor. [`Skip`] only moves the begin of the wrapped view forward and
//! hands out its cursors unchanged.

use lazyview_common::{verify_arg, Result};

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

#[derive(Debug, Clone)]
pub struct Take<V> {
    view: V,
    n: usize,
}

/// The first `n` elements of `view`, or all of them when there are fewer.
pub fn take<V: View>(view: V, n: usize) -> Take<V> {
    Take { view, n }
}

#[derive(Debug, Clone)]
pub struct TakeCursor<C, S> {
    cur: C,
    /// Number of elements before `cur`.
    index: usize,
    limit: usize,
    end: S,
}

impl<C: Cursor, S: Sentinel<C>> Cursor for TakeCursor<C, S> {
    type Item = C::Item;

    const TIER: Tier = C::TIER;

    #[inline]
    fn get(&self) -> C::Item {
        self.cur.get()
    }

    #[inline]
    fn advance(&mut self) {
        self.cur.advance();
        self.index += 1;
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.index >= self.limit || self.end.is_end(&self.cur)
    }

    /// Walks at most the elements left to take, so a prefix of an unbounded
    /// sequence still has a length.
    fn remaining(&self) -> usize {
        let mut cursor = self.cur.clone();
        cursor.advance_within(self.limit.saturating_sub(self.index), &self.end)
    }

    fn advance_n(&mut self, n: usize) {
        self.cur.advance_n(n);
        self.index += n;
    }
}

impl<C, S> PartialEq for TakeCursor<C, S> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<C: ForwardCursor, S: Sentinel<C>> ForwardCursor for TakeCursor<C, S> {
    fn steps_to(&self, other: &Self) -> usize {
        other.index - self.index
    }
}

impl<C: BidirectionalCursor, S: Sentinel<C>> BidirectionalCursor for TakeCursor<C, S> {
    fn retreat(&mut self) {
        self.cur.retreat();
        self.index -= 1;
    }
}

impl<C: RandomAccessCursor, S: Sentinel<C>> RandomAccessCursor for TakeCursor<C, S> {
    fn advance_by(&mut self, n: isize) {
        self.cur.advance_by(n);
        self.index = self.index.wrapping_add_signed(n);
    }

    fn offset_from(&self, origin: &Self) -> isize {
        self.index as isize - origin.index as isize
    }
}

impl<V: View> View for Take<V> {
    type Cursor = TakeCursor<V::Cursor, V::Sentinel>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        TakeCursor {
            cur: self.view.begin(),
            index: 0,
            limit: self.n,
            end: self.view.end(),
        }
    }

    fn end(&self) -> End {
        End
    }
}

impl<V: View> CommonView for Take<V> {
    /// The begin cursor moved past the taken elements.
    fn end_cursor(&self) -> Self::Cursor {
        let mut cursor = self.begin();
        cursor.index = cursor.cur.advance_within(self.n, &cursor.end);
        cursor
    }
}

#[derive(Debug, Clone)]
pub struct Skip<V> {
    view: V,
    n: usize,
}

/// Everything after the first `n` elements of `view`. The elements are skipped
/// each time a traversal begins.
pub fn skip<V: View>(view: V, n: usize) -> Skip<V> {
    Skip { view, n }
}

impl<V: View> View for Skip<V> {
    type Cursor = V::Cursor;
    type Sentinel = V::Sentinel;

    fn begin(&self) -> V::Cursor {
        let mut cursor = self.view.begin();
        cursor.advance_within(self.n, &self.view.end());
        cursor
    }

    fn end(&self) -> V::Sentinel {
        self.view.end()
    }
}

impl<V: CommonView> CommonView for Skip<V> {
    fn end_cursor(&self) -> V::Cursor {
        self.view.end_cursor()
    }
}

/// The elements of `view` at indices `from..to`, clamped to its length. Fails when
/// `from > to`.
pub fn slice<V: View>(view: V, from: usize, to: usize) -> Result<Take<Skip<V>>> {
    verify_arg!(to, from <= to);
    Ok(take(skip(view, from), to - from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{c_string, iter_source, source::slice::seq, ViewExt};

    #[test]
    fn test_take_prefix() {
        let data = [1, 2, 3, 4, 5];
        let view = seq(&data).take(3);
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(view.distance(), 3);
        assert_eq!(
            view.common_iter().rev().copied().collect::<Vec<_>>(),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn test_take_more_than_available() {
        let data = [1, 2];
        let view = seq(&data).take(10);
        assert_eq!(view.distance(), 2);
        assert!(view.end_cursor() == next_n(view.begin(), 2));
        assert!(seq(&data).take(0).is_empty());
    }

    fn next_n<C: Cursor>(mut cursor: C, n: usize) -> C {
        cursor.advance_n(n);
        cursor
    }

    #[test]
    fn test_take_random_access() {
        let data: Vec<i32> = (0..10).collect();
        let view = seq(&data).take(6);
        let begin = view.begin();
        let mut cursor = view.end_cursor();
        assert_eq!(cursor.offset_from(&begin), 6);
        cursor.advance_by(-2);
        assert_eq!(*cursor.get(), 4);
        cursor.advance_by(-4);
        assert!(cursor == begin);
        type Slice<'a> = crate::SliceCursor<'a, i32>;
        assert_eq!(
            <TakeCursor<Slice<'_>, Slice<'_>> as Cursor>::TIER,
            Tier::RandomAccess
        );
    }

    #[test]
    fn test_take_forward_and_single_pass() {
        let text: String = c_string(c"hello").take(4).iter().map(char::from).collect();
        assert_eq!(text, "hell");
        let counted = iter_source(0..).take(3);
        assert_eq!(counted.to::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(counted.distance(), 3);
    }

    #[test]
    fn test_skip_suffix() {
        let data = [1, 2, 3, 4, 5];
        let view = seq(&data).skip(2);
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(
            view.common_iter().rev().copied().collect::<Vec<_>>(),
            vec![5, 4, 3]
        );
        assert!(seq(&data).skip(9).is_empty());
        let rest: String = c_string(c"abc").skip(1).iter().map(char::from).collect();
        assert_eq!(rest, "bc");
    }

    #[test]
    fn test_slice_window() {
        let data: Vec<i32> = (0..10).collect();
        let view = seq(&data).slice(2, 5).unwrap();
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
        let clamped = seq(&data).slice(8, 20).unwrap();
        assert_eq!(clamped.iter().copied().collect::<Vec<_>>(), vec![8, 9]);
        assert!(seq(&data).slice(12, 20).unwrap().is_empty());
        assert!(seq(&data).slice(3, 3).unwrap().is_empty());
    }

    #[test]
    fn test_slice_rejects_reversed_window() {
        let data = [1, 2, 3];
        assert!(seq(&data).slice(2, 1).unwrap_err().is_invalid_arg("to"));
    }
}
