//! Distinct elements of a slice.
//!
//! **Building this view sorts the caller's slice in place.** It is the one factory in
//! the crate that is not lazy: the sort happens once, when [`unique`] or
//! [`unique_by`] is called, and the returned view then walks the sorted slice
//! yielding the first element of each run of equal elements.

use std::{cmp::Ordering, rc::Rc};

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor, Tier},
    view::{CommonView, View},
};

/// Natural ordering, as used by [`unique`].
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

pub struct Unique<'a, T, F> {
    slice: &'a [T],
    cmp: Rc<F>,
}

impl<T, F> Clone for Unique<'_, T, F> {
    fn clone(&self) -> Self {
        Unique {
            slice: self.slice,
            cmp: self.cmp.clone(),
        }
    }
}

impl<'a, T, F> Unique<'a, T, F> {
    /// The sorted slice the view walks.
    pub fn as_sorted(&self) -> &'a [T] {
        self.slice
    }
}

/// Sorts `data` in place and returns a view of its distinct elements.
pub fn unique<T: Ord>(data: &mut [T]) -> Unique<'_, T, NaturalOrder<T>> {
    unique_by(data, T::cmp as NaturalOrder<T>)
}

/// Sorts `data` in place with `cmp` and returns a view of the elements that are
/// distinct under `cmp`.
pub fn unique_by<T, F>(data: &mut [T], cmp: F) -> Unique<'_, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    log::debug!("unique: sorting {} elements in place", data.len());
    data.sort_unstable_by(&cmp);
    Unique {
        slice: data,
        cmp: Rc::new(cmp),
    }
}

pub struct UniqueCursor<'a, T, F> {
    slice: &'a [T],
    pos: usize,
    cmp: Rc<F>,
}

impl<T, F> Clone for UniqueCursor<'_, T, F> {
    fn clone(&self) -> Self {
        UniqueCursor {
            slice: self.slice,
            pos: self.pos,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T, F> UniqueCursor<'_, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn same(&self, a: usize, b: usize) -> bool {
        (self.cmp)(&self.slice[a], &self.slice[b]) == Ordering::Equal
    }
}

impl<'a, T, F> Cursor for UniqueCursor<'a, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;

    const TIER: Tier = Tier::Bidirectional;

    #[inline]
    fn get(&self) -> &'a T {
        &self.slice[self.pos]
    }

    fn advance(&mut self) {
        let mut last = self.pos;
        while last + 1 < self.slice.len() && self.same(last, last + 1) {
            last += 1;
        }
        self.pos = last + 1;
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.pos >= self.slice.len()
    }
}

impl<T, F> PartialEq for UniqueCursor<'_, T, F> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T, F> ForwardCursor for UniqueCursor<'_, T, F> where F: Fn(&T, &T) -> Ordering {}

impl<T, F> BidirectionalCursor for UniqueCursor<'_, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn retreat(&mut self) {
        self.pos -= 1;
        while self.pos > 0 && self.same(self.pos - 1, self.pos) {
            self.pos -= 1;
        }
    }
}

impl<'a, T, F> View for Unique<'a, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    type Cursor = UniqueCursor<'a, T, F>;
    type Sentinel = UniqueCursor<'a, T, F>;

    fn begin(&self) -> Self::Cursor {
        UniqueCursor {
            slice: self.slice,
            pos: 0,
            cmp: self.cmp.clone(),
        }
    }

    fn end(&self) -> Self::Sentinel {
        self.end_cursor()
    }
}

impl<T, F> CommonView for Unique<'_, T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn end_cursor(&self) -> Self::Cursor {
        UniqueCursor {
            slice: self.slice,
            pos: self.slice.len(),
            cmp: self.cmp.clone(),
        }
    }
}
