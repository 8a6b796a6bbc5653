//! Contiguous slices: the random-access base of most compositions.

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Tier},
    sentinel::Sentinel,
    view::{CommonView, IntoView, SubRange, View},
};

/// Random-access cursor over a borrowed slice. Yields `&'a T`.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(slice: &'a [T], pos: usize) -> SliceCursor<'a, T> {
        debug_assert!(pos <= slice.len());
        SliceCursor { slice, pos }
    }

    /// Index of the current element within the slice.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(std::ptr::eq(self.slice, other.slice));
        self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    const TIER: Tier = Tier::RandomAccess;

    #[inline]
    fn get(&self) -> &'a T {
        &self.slice[self.pos]
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.pos >= self.slice.len()
    }

    fn remaining(&self) -> usize {
        self.slice.len() - self.pos
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn advance_within<S: Sentinel<Self>>(&mut self, n: usize, end: &S) -> usize {
        let taken = n.min(end.distance_from(self));
        self.pos += taken;
        taken
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {
    fn steps_to(&self, other: &Self) -> usize {
        other.pos - self.pos
    }
}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline]
    fn retreat(&mut self) {
        self.pos -= 1;
    }

    fn retreat_n(&mut self, n: usize) {
        self.pos -= n;
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn advance_by(&mut self, n: isize) {
        self.pos = self.pos.wrapping_add_signed(n);
        debug_assert!(self.pos <= self.slice.len());
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        self.pos as isize - origin.pos as isize
    }
}

/// View over a borrowed slice.
///
/// A plain `&[T]` is a view on its own, but its inherent methods (`chunks`,
/// `split`, `concat`, ...) take precedence over the adaptor methods of
/// [`ViewExt`](crate::ViewExt). This wrapper has no such methods. Vectors and arrays
/// are not views by reference, so `vec.chunks(n)` keeps meaning [`slice::chunks`]
/// with `ViewExt` in scope; they convert through [`IntoView`] where a view is
/// expected of them, as with the items of a flattened sequence.
#[derive(Debug)]
pub struct SliceView<'a, T> {
    slice: &'a [T],
}

impl<'a, T> SliceView<'a, T> {
    pub fn as_slice(&self) -> &'a [T] {
        self.slice
    }
}

impl<T> Clone for SliceView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceView<'_, T> {}

/// Wraps a slice as a view.
pub fn seq<T>(slice: &[T]) -> SliceView<'_, T> {
    SliceView { slice }
}

impl<'a, T> SubRange<SliceCursor<'a, T>> {
    /// Returns the elements of the sub-range as a slice of the underlying storage.
    pub fn as_slice(&self) -> &'a [T] {
        let (begin, end) = (self.begin(), self.end());
        &begin.slice[begin.pos..end.pos]
    }
}

macro_rules! impl_slice_view {
    ($(impl<$lt:lifetime, T $(, const $n:ident: usize)?> for $ty:ty => |$this:ident| $slice:expr;)+) => {
        $(
            impl<$lt, T $(, const $n: usize)?> View for $ty {
                type Cursor = SliceCursor<$lt, T>;
                type Sentinel = SliceCursor<$lt, T>;

                fn begin(&self) -> SliceCursor<$lt, T> {
                    let $this = self;
                    SliceCursor::new($slice, 0)
                }

                fn end(&self) -> SliceCursor<$lt, T> {
                    self.end_cursor()
                }
            }

            impl<$lt, T $(, const $n: usize)?> CommonView for $ty {
                fn end_cursor(&self) -> SliceCursor<$lt, T> {
                    let $this = self;
                    let slice: &$lt [T] = $slice;
                    SliceCursor::new(slice, slice.len())
                }
            }
        )+
    };
}

impl_slice_view! {
    impl<'a, T> for SliceView<'a, T> => |this| this.slice;
    impl<'a, T> for &'a [T] => |this| *this;
}

impl<'a, T> IntoView for &'a Vec<T> {
    type View = SliceView<'a, T>;

    fn into_view(self) -> SliceView<'a, T> {
        seq(self)
    }
}

impl<'a, T, const N: usize> IntoView for &'a [T; N] {
    type View = SliceView<'a, T>;

    fn into_view(self) -> SliceView<'a, T> {
        seq(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cursor::{distance, next, prev},
        ViewExt,
    };

    #[test]
    fn test_slice_cursor_walk() {
        let data = [10, 20, 30];
        let view = seq(&data);
        let mut cursor = view.begin();
        assert_eq!(*cursor.get(), 10);
        cursor.advance();
        assert_eq!(*cursor.get(), 20);
        assert_eq!(cursor.remaining(), 2);
        cursor.advance_n(2);
        assert!(cursor.at_end());
        assert_eq!(cursor, view.end());
    }

    #[test]
    fn test_slice_cursor_random_access() {
        let data = [1, 2, 3, 4, 5];
        let view = seq(&data);
        let begin = view.begin();
        let mut cursor = begin;
        cursor.advance_by(4);
        assert_eq!(*cursor.get(), 5);
        assert_eq!(cursor.offset_from(&begin), 4);
        cursor.advance_by(-3);
        assert_eq!(*cursor.get(), 2);
        assert_eq!(begin.offset_from(&cursor), -1);
        assert_eq!(begin.steps_to(&view.end()), 5);
    }

    #[test]
    fn test_advance_within_clamps() {
        let data = [1, 2, 3];
        let view = seq(&data);
        let mut cursor = view.begin();
        assert_eq!(cursor.advance_within(2, &view.end()), 2);
        assert_eq!(cursor.advance_within(5, &view.end()), 1);
        assert!(cursor.at_end());
        assert_eq!(cursor.advance_within(1, &crate::End), 0);
    }

    #[test]
    fn test_distance_next_prev() {
        let data = vec![1, 2, 3, 4];
        let view = seq(&data);
        let begin = view.begin();
        assert_eq!(distance(&begin, &view.end()), 4);
        assert_eq!(distance(&begin, &crate::End), 4);
        let third = next(begin, 2);
        assert_eq!(*third.get(), 3);
        assert_eq!(*prev(third, 1).get(), 2);
    }

    #[test]
    fn test_reference_views() {
        let array = [1, 2, 3];
        let vec = vec![4, 5];
        let slice: &[i32] = &array[1..];
        assert_eq!((&array).into_view().to::<Vec<_>>(), vec![&1, &2, &3]);
        assert_eq!((&vec).into_view().distance(), 2);
        assert_eq!(ViewExt::iter(&slice).copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_std_slice_methods_are_not_shadowed() {
        let vec = vec![1, 2, 3, 4, 5];
        let array = [1, 0, 2];
        let nested = vec![vec![1], vec![2, 3]];
        let pairs: Vec<&[i32]> = vec.chunks(2).collect();
        assert_eq!(pairs, vec![&[1, 2][..], &[3, 4], &[5]]);
        assert_eq!(array.split(|x| *x == 0).count(), 2);
        assert_eq!(nested.concat(), vec![1, 2, 3]);
        assert!(!vec.is_empty());
        assert_eq!(seq(&vec).chunks(2).unwrap().distance(), 3);
    }

    #[test]
    fn test_double_ended_walk() {
        let data = [1, 2, 3, 4];
        let reversed: Vec<i32> = seq(&data).common_iter().rev().copied().collect();
        assert_eq!(reversed, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_sub_range_as_slice() {
        let data = [1, 2, 3, 4, 5];
        let view = seq(&data);
        let range = SubRange::new(next(view.begin(), 1), next(view.begin(), 4));
        assert_eq!(range.as_slice(), &[2, 3, 4]);
        assert_eq!(range.distance(), 3);
    }

    #[test]
    fn test_empty_slice() {
        let data: [u8; 0] = [];
        let view = seq(&data);
        assert!(view.is_empty());
        assert!(view.begin().at_end());
        assert_eq!(view.iter().count(), 0);
    }
}
