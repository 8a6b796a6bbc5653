//! Concatenation of any number of same-typed views. Views of different types are
//! joined with [`chain`](crate::chain).
//!
//! The lanes are shared between the view and all of its cursors through an `Rc`,
//! so cloning a cursor stays cheap regardless of the number of lanes.
//!
//! A cursor is kept normalized: it never rests at the end of a lane other than the
//! last one, and it never rests inside an empty lane. The global end is the last
//! lane's end.

use std::rc::Rc;

use lazyview_common::{verify_arg, Result};

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

/// Sequential concatenation of one or more views of the same type.
#[derive(Debug)]
pub struct Concatenate<V> {
    lanes: Rc<[V]>,
}

impl<V> Clone for Concatenate<V> {
    fn clone(&self) -> Self {
        Concatenate {
            lanes: self.lanes.clone(),
        }
    }
}

impl<V: View> Concatenate<V> {
    pub fn new(lanes: impl IntoIterator<Item = V>) -> Result<Concatenate<V>> {
        let lanes: Rc<[V]> = lanes.into_iter().collect();
        verify_arg!(lanes, !lanes.is_empty());
        log::trace!("concatenate: {} lanes", lanes.len());
        Ok(Concatenate { lanes })
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }
}

/// Concatenates `lanes` in order. Fails when no lane is given.
pub fn concatenate<V: View>(lanes: impl IntoIterator<Item = V>) -> Result<Concatenate<V>> {
    Concatenate::new(lanes)
}

pub struct ConcatenateCursor<V: View> {
    lanes: Rc<[V]>,
    index: usize,
    cur: V::Cursor,
    end: V::Sentinel,
}

impl<V: View> Clone for ConcatenateCursor<V> {
    fn clone(&self) -> Self {
        ConcatenateCursor {
            lanes: self.lanes.clone(),
            index: self.index,
            cur: self.cur.clone(),
            end: self.end.clone(),
        }
    }
}

impl<V: View> ConcatenateCursor<V> {
    fn enter(&mut self, index: usize) {
        self.index = index;
        self.cur = self.lanes[index].begin();
        self.end = self.lanes[index].end();
    }

    fn is_last_lane(&self) -> bool {
        self.index + 1 == self.lanes.len()
    }

    /// Moves off exhausted lanes until a non-empty lane or the last lane is reached.
    fn settle(&mut self) {
        while !self.is_last_lane() && self.end.is_end(&self.cur) {
            self.enter(self.index + 1);
        }
    }

    fn lane_len(&self, index: usize) -> usize {
        let lane = &self.lanes[index];
        lane.end().distance_from(&lane.begin())
    }

    fn lanes_len(&self, range: std::ops::Range<usize>) -> usize {
        range.map(|index| self.lane_len(index)).sum()
    }
}

impl<V: CommonView> ConcatenateCursor<V> {
    fn enter_from_back(&mut self, index: usize) {
        self.index = index;
        self.cur = self.lanes[index].end_cursor();
        self.end = self.lanes[index].end();
    }
}

impl<V: View> Cursor for ConcatenateCursor<V> {
    type Item = <V::Cursor as Cursor>::Item;

    /// Lanes are re-entered from the back through their end cursors, so a lane's own
    /// end marker does not limit the tier.
    const TIER: Tier = <V::Cursor as Cursor>::TIER;

    #[inline]
    fn get(&self) -> Self::Item {
        self.cur.get()
    }

    #[inline]
    fn advance(&mut self) {
        self.cur.advance();
        self.settle();
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.is_last_lane() && self.end.is_end(&self.cur)
    }

    fn remaining(&self) -> usize {
        self.end.distance_from(&self.cur) + self.lanes_len(self.index + 1..self.lanes.len())
    }

    fn advance_n(&mut self, mut n: usize) {
        loop {
            let left = self.end.distance_from(&self.cur);
            if n < left || self.is_last_lane() {
                self.cur.advance_n(n);
                break;
            }
            n -= left;
            self.enter(self.index + 1);
        }
        self.settle();
    }
}

impl<V: View> PartialEq for ConcatenateCursor<V>
where
    V::Cursor: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.cur == other.cur
    }
}

impl<V: View> ForwardCursor for ConcatenateCursor<V>
where
    V::Cursor: ForwardCursor,
{
    fn steps_to(&self, other: &Self) -> usize {
        if self.index == other.index {
            return self.cur.steps_to(&other.cur);
        }
        debug_assert!(self.index < other.index);
        self.end.distance_from(&self.cur)
            + self.lanes_len(self.index + 1..other.index)
            + self.lanes[other.index].begin().steps_to(&other.cur)
    }
}

impl<V: CommonView> BidirectionalCursor for ConcatenateCursor<V>
where
    V::Cursor: BidirectionalCursor,
{
    fn retreat(&mut self) {
        while self.cur == self.lanes[self.index].begin() {
            debug_assert!(self.index > 0, "retreat past the first element");
            self.enter_from_back(self.index - 1);
        }
        self.cur.retreat();
    }
}

impl<V: CommonView> RandomAccessCursor for ConcatenateCursor<V>
where
    V::Cursor: RandomAccessCursor,
{
    fn advance_by(&mut self, n: isize) {
        if n >= 0 {
            self.advance_n(n as usize);
            return;
        }
        let mut back = n.unsigned_abs();
        loop {
            let before = self.cur.offset_from(&self.lanes[self.index].begin()) as usize;
            if back <= before {
                self.cur.advance_by(-(back as isize));
                return;
            }
            back -= before;
            debug_assert!(self.index > 0, "retreat past the first element");
            self.enter_from_back(self.index - 1);
        }
    }

    fn offset_from(&self, origin: &Self) -> isize {
        let global = |cursor: &Self| {
            cursor.lanes_len(0..cursor.index)
                + cursor
                    .cur
                    .offset_from(&cursor.lanes[cursor.index].begin()) as usize
        };
        global(self) as isize - global(origin) as isize
    }
}

impl<V: View> View for Concatenate<V> {
    type Cursor = ConcatenateCursor<V>;
    type Sentinel = End;

    fn begin(&self) -> ConcatenateCursor<V> {
        let first = &self.lanes[0];
        let mut cursor = ConcatenateCursor {
            lanes: self.lanes.clone(),
            index: 0,
            cur: first.begin(),
            end: first.end(),
        };
        cursor.settle();
        cursor
    }

    fn end(&self) -> End {
        End
    }
}

impl<V: CommonView> CommonView for Concatenate<V> {
    fn end_cursor(&self) -> ConcatenateCursor<V> {
        let last = self.lanes.len() - 1;
        ConcatenateCursor {
            lanes: self.lanes.clone(),
            index: last,
            cur: self.lanes[last].end_cursor(),
            end: self.lanes[last].end(),
        }
    }
}
