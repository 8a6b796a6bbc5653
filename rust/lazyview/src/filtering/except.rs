//! Set difference against a sorted exclusion slice.
//!
//! Membership is decided with a binary search, so the exclusion slice must be sorted
//! under the same ordering the view is built with. The primary view needs no
//! particular order and keeps its duplicates.

use std::{borrow::Borrow, cmp::Ordering, rc::Rc};

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

/// Ordering between a primary item and an exclusion element, as used by
/// [`ViewExt::except`](crate::ViewExt::except).
pub type Natural<I, T> = fn(&I, &T) -> Ordering;

/// Compares a primary item with an exclusion element by the element it refers to.
pub fn natural<I: Borrow<T>, T: Ord>(item: &I, excluded: &T) -> Ordering {
    item.borrow().cmp(excluded)
}

pub struct Except<'e, V, T, F> {
    view: V,
    excluded: &'e [T],
    cmp: Rc<F>,
}

impl<V: Clone, T, F> Clone for Except<'_, V, T, F> {
    fn clone(&self) -> Self {
        Except {
            view: self.view.clone(),
            excluded: self.excluded,
            cmp: self.cmp.clone(),
        }
    }
}

/// Skips the elements of `view` that compare equal under `cmp` to some element of
/// the sorted slice `excluded`.
pub fn except_by<'e, V: View, T, F>(view: V, excluded: &'e [T], cmp: F) -> Except<'e, V, T, F>
where
    F: Fn(&<V::Cursor as Cursor>::Item, &T) -> Ordering,
{
    Except {
        view,
        excluded,
        cmp: Rc::new(cmp),
    }
}

pub struct ExceptCursor<'e, C, S, T, F> {
    first: C,
    cur: C,
    end: S,
    excluded: &'e [T],
    cmp: Rc<F>,
}

impl<C: Clone, S: Clone, T, F> Clone for ExceptCursor<'_, C, S, T, F> {
    fn clone(&self) -> Self {
        ExceptCursor {
            first: self.first.clone(),
            cur: self.cur.clone(),
            end: self.end.clone(),
            excluded: self.excluded,
            cmp: self.cmp.clone(),
        }
    }
}

impl<C, S, T, F> ExceptCursor<'_, C, S, T, F>
where
    C: Cursor,
    S: Sentinel<C>,
    F: Fn(&C::Item, &T) -> Ordering,
{
    fn is_excluded(&self, item: &C::Item) -> bool {
        self.excluded
            .binary_search_by(|entry| (self.cmp)(item, entry).reverse())
            .is_ok()
    }

    fn seek(&mut self) {
        while !self.end.is_end(&self.cur) && self.is_excluded(&self.cur.get()) {
            self.cur.advance();
        }
    }
}

impl<C, S, T, F> Cursor for ExceptCursor<'_, C, S, T, F>
where
    C: Cursor,
    S: Sentinel<C>,
    F: Fn(&C::Item, &T) -> Ordering,
{
    type Item = C::Item;

    const TIER: Tier = C::TIER.min(Tier::Bidirectional);

    #[inline]
    fn get(&self) -> C::Item {
        self.cur.get()
    }

    fn advance(&mut self) {
        self.cur.advance();
        self.seek();
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.end.is_end(&self.cur)
    }
}

impl<C: PartialEq, S, T, F> PartialEq for ExceptCursor<'_, C, S, T, F> {
    fn eq(&self, other: &Self) -> bool {
        self.cur == other.cur
    }
}

impl<C, S, T, F> ForwardCursor for ExceptCursor<'_, C, S, T, F>
where
    C: ForwardCursor,
    S: Sentinel<C>,
    F: Fn(&C::Item, &T) -> Ordering,
{
}

impl<C, S, T, F> BidirectionalCursor for ExceptCursor<'_, C, S, T, F>
where
    C: BidirectionalCursor,
    S: Sentinel<C>,
    F: Fn(&C::Item, &T) -> Ordering,
{
    fn retreat(&mut self) {
        loop {
            self.cur.retreat();
            if self.cur == self.first || !self.is_excluded(&self.cur.get()) {
                break;
            }
        }
    }
}

impl<'e, V, T, F> View for Except<'e, V, T, F>
where
    V: View,
    F: Fn(&<V::Cursor as Cursor>::Item, &T) -> Ordering,
{
    type Cursor = ExceptCursor<'e, V::Cursor, V::Sentinel, T, F>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        let first = self.view.begin();
        let mut cursor = ExceptCursor {
            cur: first.clone(),
            first,
            end: self.view.end(),
            excluded: self.excluded,
            cmp: self.cmp.clone(),
        };
        cursor.seek();
        cursor
    }

    fn end(&self) -> End {
        End
    }
}

impl<V, T, F> CommonView for Except<'_, V, T, F>
where
    V: CommonView,
    F: Fn(&<V::Cursor as Cursor>::Item, &T) -> Ordering,
{
    fn end_cursor(&self) -> Self::Cursor {
        ExceptCursor {
            first: self.view.begin(),
            cur: self.view.end_cursor(),
            end: self.view.end(),
            excluded: self.excluded,
            cmp: self.cmp.clone(),
        }
    }
}
