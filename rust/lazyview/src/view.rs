//! Views and their traversal.

use std::iter::FusedIterator;

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor},
    sentinel::Sentinel,
};

/// A re-iterable, non-owning description of a sequence: a begin cursor plus an end
/// sentinel. Every call to [`View::begin`] starts a fresh traversal.
pub trait View {
    type Cursor: Cursor;
    type Sentinel: Sentinel<Self::Cursor>;

    fn begin(&self) -> Self::Cursor;

    fn end(&self) -> Self::Sentinel;
}

/// A view that can also produce its end as a cursor of the begin cursor's type,
/// which is what backward traversal from the end needs.
pub trait CommonView: View {
    fn end_cursor(&self) -> Self::Cursor;
}

/// Conversion into a [`View`].
///
/// Every view converts into itself. Borrowed vectors and arrays, which are not views,
/// convert into a [`SliceView`](crate::SliceView).
pub trait IntoView {
    type View: View;

    fn into_view(self) -> Self::View;
}

impl<V: View> IntoView for V {
    type View = V;

    #[inline]
    fn into_view(self) -> V {
        self
    }
}

/// Iterator over a `[cursor, sentinel)` pair.
///
/// Walking a pair with a symmetric end (`Walk<C, C>`) also yields elements from the
/// back when the cursor is bidirectional.
#[derive(Debug, Clone)]
pub struct Walk<C, S> {
    front: C,
    back: S,
}

impl<C, S> Walk<C, S> {
    pub fn new(front: C, back: S) -> Walk<C, S> {
        Walk { front, back }
    }

    /// Returns the current front cursor and end.
    pub fn into_parts(self) -> (C, S) {
        (self.front, self.back)
    }
}

impl<C: Cursor, S: Sentinel<C>> Iterator for Walk<C, S> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        if self.back.is_end(&self.front) {
            return None;
        }
        let item = self.front.get();
        self.front.advance();
        Some(item)
    }

    fn count(self) -> usize {
        self.back.distance_from(&self.front)
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for Walk<C, C> {
    fn next_back(&mut self) -> Option<C::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.retreat();
        Some(self.back.get())
    }
}

impl<C: Cursor, S: Sentinel<C>> FusedIterator for Walk<C, S> {}

/// A `[begin, end)` sub-range of some underlying view, itself a view.
///
/// Segmenting adaptors (`chunks`, `chunk_if`, `split`, `group_by`) yield these.
#[derive(Debug, Clone, PartialEq)]
pub struct SubRange<C, S = C> {
    begin: C,
    end: S,
}

impl<C, S> SubRange<C, S> {
    pub fn new(begin: C, end: S) -> SubRange<C, S> {
        SubRange { begin, end }
    }

    pub fn into_parts(self) -> (C, S) {
        (self.begin, self.end)
    }
}

impl<C: Cursor, S: Sentinel<C>> View for SubRange<C, S> {
    type Cursor = C;
    type Sentinel = S;

    fn begin(&self) -> C {
        self.begin.clone()
    }

    fn end(&self) -> S {
        self.end.clone()
    }
}

impl<C: ForwardCursor> CommonView for SubRange<C, C> {
    fn end_cursor(&self) -> C {
        self.end.clone()
    }
}

impl<C: Cursor, S: Sentinel<C>> IntoIterator for SubRange<C, S> {
    type Item = C::Item;
    type IntoIter = Walk<C, S>;

    fn into_iter(self) -> Walk<C, S> {
        Walk::new(self.begin, self.end)
    }
}
