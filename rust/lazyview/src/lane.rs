//! Per-input state shared by the multi-input adaptors.

use crate::{
    cursor::{Cursor, RandomAccessCursor},
    sentinel::Sentinel,
};

/// One input of a multi-input cursor: where it started, where it is, and where it
/// stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane<C, S> {
    pub(crate) begin: C,
    pub(crate) cur: C,
    pub(crate) end: S,
}

impl<C: Cursor, S: Sentinel<C>> Lane<C, S> {
    pub(crate) fn new(begin: C, end: S) -> Lane<C, S> {
        Lane {
            cur: begin.clone(),
            begin,
            end,
        }
    }

    /// A lane positioned at `cur` rather than at its begin.
    pub(crate) fn at(begin: C, cur: C, end: S) -> Lane<C, S> {
        Lane { begin, cur, end }
    }

    #[inline]
    pub(crate) fn at_end(&self) -> bool {
        self.end.is_end(&self.cur)
    }

    pub(crate) fn remaining(&self) -> usize {
        self.end.distance_from(&self.cur)
    }

    pub(crate) fn len(&self) -> usize {
        self.end.distance_from(&self.begin)
    }

    pub(crate) fn rewind(&mut self) {
        self.cur = self.begin.clone();
    }
}

impl<C: RandomAccessCursor> Lane<C, C> {
    pub(crate) fn position(&self) -> usize {
        self.cur.offset_from(&self.begin) as usize
    }

    pub(crate) fn size(&self) -> usize {
        self.end.offset_from(&self.begin) as usize
    }

    pub(crate) fn seek(&mut self, pos: usize) {
        self.cur = self.begin.clone();
        self.cur.advance_by(pos as isize);
    }
}
