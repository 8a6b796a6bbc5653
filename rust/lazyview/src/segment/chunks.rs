//! Fixed-size chunking. The last chunk may be shorter.

use lazyview_common::{verify_arg, Result};

use crate::{
    cursor::{jump_tier, BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, SubRange, View},
};

#[derive(Debug, Clone)]
pub struct Chunks<V> {
    view: V,
    size: usize,
}

impl<V: View> Chunks<V> {
    /// Fails when `size` is zero.
    pub fn new(view: V, size: usize) -> Result<Chunks<V>> {
        verify_arg!(size, size != 0);
        Ok(Chunks { view, size })
    }
}

/// Splits `view` into consecutive sub-ranges of `size` elements.
pub fn chunks<V: View>(view: V, size: usize) -> Result<Chunks<V>> {
    Chunks::new(view, size)
}

#[derive(Debug, Clone)]
pub struct ChunksCursor<C, S> {
    begin: C,
    cur: C,
    /// End of the current chunk.
    stop: C,
    end: S,
    size: usize,
}

impl<C: Cursor, S: Sentinel<C>> ChunksCursor<C, S> {
    fn new(begin: C, cur: C, end: S, size: usize) -> ChunksCursor<C, S> {
        let mut stop = cur.clone();
        stop.advance_within(size, &end);
        ChunksCursor {
            begin,
            cur,
            stop,
            end,
            size,
        }
    }
}

impl<C: RandomAccessCursor> ChunksCursor<C, C> {
    fn index(&self) -> usize {
        (self.cur.offset_from(&self.begin) as usize).div_ceil(self.size)
    }
}

impl<C: ForwardCursor, S: Sentinel<C>> Cursor for ChunksCursor<C, S> {
    type Item = SubRange<C>;

    const TIER: Tier = jump_tier(C::TIER, S::LIMIT, Tier::Forward);

    #[inline]
    fn get(&self) -> SubRange<C> {
        SubRange::new(self.cur.clone(), self.stop.clone())
    }

    fn advance(&mut self) {
        self.cur = self.stop.clone();
        self.stop.advance_within(self.size, &self.end);
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.end.is_end(&self.cur)
    }

    fn remaining(&self) -> usize {
        self.end.distance_from(&self.cur).div_ceil(self.size)
    }
}

impl<C: PartialEq, S> PartialEq for ChunksCursor<C, S> {
    fn eq(&self, other: &Self) -> bool {
        self.cur == other.cur
    }
}

impl<C: ForwardCursor, S: Sentinel<C>> ForwardCursor for ChunksCursor<C, S> {
    fn steps_to(&self, other: &Self) -> usize {
        self.cur.steps_to(&other.cur).div_ceil(self.size)
    }
}

impl<C: RandomAccessCursor> BidirectionalCursor for ChunksCursor<C, C> {
    fn retreat(&mut self) {
        self.advance_by(-1);
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for ChunksCursor<C, C> {
    fn advance_by(&mut self, n: isize) {
        let len = self.end.offset_from(&self.begin) as usize;
        let index = self.index().wrapping_add_signed(n);
        let pos = (index * self.size).min(len);
        self.cur = self.begin.clone();
        self.cur.advance_by(pos as isize);
        self.stop = self.cur.clone();
        self.stop.advance_by(self.size.min(len - pos) as isize);
    }

    fn offset_from(&self, origin: &Self) -> isize {
        self.index() as isize - origin.index() as isize
    }
}

impl<V: View> View for Chunks<V>
where
    V::Cursor: ForwardCursor,
{
    type Cursor = ChunksCursor<V::Cursor, V::Sentinel>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        let begin = self.view.begin();
        ChunksCursor::new(begin.clone(), begin, self.view.end(), self.size)
    }

    fn end(&self) -> End {
        End
    }
}

impl<V: CommonView> CommonView for Chunks<V>
where
    V::Cursor: ForwardCursor,
{
    fn end_cursor(&self) -> Self::Cursor {
        ChunksCursor::new(
            self.view.begin(),
            self.view.end_cursor(),
            self.view.end(),
            self.size,
        )
    }
}
