//! Left rotation around a pivot position.
//!
//! Elements are produced from the pivot to the end, then from the beginning up to the
//! pivot. The cursor carries a `lapped` flag recording whether it has wrapped past the
//! underlying end; the rotated end is the pivot reached a second time.

use lazyview_common::{verify_arg, Result};

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

/// View of `V` rotated left so that it starts at the pivot.
pub struct Rotate<V: View> {
    view: V,
    /// Cursor at the pivot. Located once, when the view is built.
    pivot: V::Cursor,
}

impl<V: View> Clone for Rotate<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        Rotate {
            view: self.view.clone(),
            pivot: self.pivot.clone(),
        }
    }
}

impl<V: View + std::fmt::Debug> std::fmt::Debug for Rotate<V>
where
    V::Cursor: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rotate")
            .field("view", &self.view)
            .field("pivot", &self.pivot)
            .finish()
    }
}

impl<V: View> Rotate<V>
where
    V::Cursor: ForwardCursor,
{
    /// Fails when `pivot` lies beyond the length of the sequence. A pivot equal to
    /// the length is the identity rotation.
    pub fn new(view: V, pivot: usize) -> Result<Rotate<V>> {
        let begin = view.begin();
        let end = view.end();
        let mut cursor = begin.clone();
        let len_seen = cursor.advance_within(pivot, &end);
        verify_arg!(pivot, pivot <= len_seen);
        if end.is_end(&cursor) {
            cursor = begin;
        }
        log::debug!("rotate: located pivot {pivot}");
        Ok(Rotate {
            view,
            pivot: cursor,
        })
    }
}

/// Rotates `view` left by `pivot` positions.
pub fn rotate<V: View>(view: V, pivot: usize) -> Result<Rotate<V>>
where
    V::Cursor: ForwardCursor,
{
    Rotate::new(view, pivot)
}

#[derive(Debug, Clone)]
pub struct RotateCursor<C, S> {
    begin: C,
    pivot: C,
    cur: C,
    end: S,
    lapped: bool,
}

impl<C: ForwardCursor, S: Sentinel<C>> RotateCursor<C, S> {
    fn tail_len(&self) -> usize {
        self.end.distance_from(&self.pivot)
    }

    fn logical(&self) -> usize {
        if self.lapped {
            self.tail_len() + self.begin.steps_to(&self.cur)
        } else {
            self.pivot.steps_to(&self.cur)
        }
    }
}

impl<C: RandomAccessCursor> RotateCursor<C, C> {
    fn jump_to(&mut self, logical: usize) {
        let tail = self.end.offset_from(&self.pivot) as usize;
        if logical < tail {
            self.cur = self.pivot.clone();
            self.cur.advance_by(logical as isize);
            self.lapped = false;
        } else {
            self.cur = self.begin.clone();
            self.cur.advance_by((logical - tail) as isize);
            self.lapped = true;
        }
    }

    fn index(&self) -> usize {
        if self.lapped {
            (self.end.offset_from(&self.pivot) + self.cur.offset_from(&self.begin)) as usize
        } else {
            self.cur.offset_from(&self.pivot) as usize
        }
    }
}

impl<C: ForwardCursor, S: Sentinel<C>> Cursor for RotateCursor<C, S> {
    type Item = C::Item;

    const TIER: Tier = C::TIER.min(S::LIMIT);

    #[inline]
    fn get(&self) -> C::Item {
        self.cur.get()
    }

    #[inline]
    fn advance(&mut self) {
        self.cur.advance();
        if self.end.is_end(&self.cur) {
            self.cur = self.begin.clone();
            self.lapped = true;
        }
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.lapped && self.cur == self.pivot
    }

    fn remaining(&self) -> usize {
        if self.lapped {
            self.cur.steps_to(&self.pivot)
        } else {
            self.end.distance_from(&self.cur) + self.begin.steps_to(&self.pivot)
        }
    }
}

impl<C: PartialEq, S> PartialEq for RotateCursor<C, S> {
    fn eq(&self, other: &Self) -> bool {
        self.lapped == other.lapped && self.cur == other.cur
    }
}

impl<C: ForwardCursor, S: Sentinel<C>> ForwardCursor for RotateCursor<C, S> {
    fn steps_to(&self, other: &Self) -> usize {
        other.logical() - self.logical()
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for RotateCursor<C, C> {
    fn retreat(&mut self) {
        if self.cur == self.begin {
            self.cur = self.end.clone();
            self.lapped = false;
        }
        self.cur.retreat();
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for RotateCursor<C, C> {
    fn advance_by(&mut self, n: isize) {
        let logical = self.index().wrapping_add_signed(n);
        self.jump_to(logical);
    }

    fn offset_from(&self, origin: &Self) -> isize {
        self.index() as isize - origin.index() as isize
    }
}

impl<V: View> View for Rotate<V>
where
    V::Cursor: ForwardCursor,
{
    type Cursor = RotateCursor<V::Cursor, V::Sentinel>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        let begin = self.view.begin();
        let end = self.view.end();
        RotateCursor {
            lapped: end.is_end(&begin),
            cur: self.pivot.clone(),
            pivot: self.pivot.clone(),
            begin,
            end,
        }
    }

    fn end(&self) -> End {
        End
    }
}

impl<V: CommonView> CommonView for Rotate<V>
where
    V::Cursor: ForwardCursor,
{
    fn end_cursor(&self) -> Self::Cursor {
        RotateCursor {
            begin: self.view.begin(),
            pivot: self.pivot.clone(),
            cur: self.pivot.clone(),
            end: self.view.end(),
            lapped: true,
        }
    }
}
