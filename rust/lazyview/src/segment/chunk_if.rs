//! Splitting at delimiter elements chosen by a predicate.
//!
//! Delimiters are consumed and never appear in a chunk. A non-empty input with `n`
//! delimiters produces `n + 1` chunks, so leading, trailing and adjacent delimiters
//! produce empty chunks. An empty input produces no chunks at all.

use std::rc::Rc;

use crate::{
    cursor::{Cursor, ForwardCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, SubRange, View},
};

pub struct ChunkIf<V, P> {
    view: V,
    predicate: Rc<P>,
}

impl<V: Clone, P> Clone for ChunkIf<V, P> {
    fn clone(&self) -> Self {
        ChunkIf {
            view: self.view.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

/// Splits `view` at every element for which `predicate` holds.
pub fn chunk_if<V: View, P>(view: V, predicate: P) -> ChunkIf<V, P>
where
    P: Fn(&<V::Cursor as Cursor>::Item) -> bool,
{
    ChunkIf {
        view,
        predicate: Rc::new(predicate),
    }
}

pub struct ChunkIfCursor<C, S, P> {
    start: C,
    /// Delimiter ending the current chunk, or the end.
    stop: C,
    end: S,
    predicate: Rc<P>,
    done: bool,
}

impl<C: Clone, S: Clone, P> Clone for ChunkIfCursor<C, S, P> {
    fn clone(&self) -> Self {
        ChunkIfCursor {
            start: self.start.clone(),
            stop: self.stop.clone(),
            end: self.end.clone(),
            predicate: self.predicate.clone(),
            done: self.done,
        }
    }
}

impl<C, S, P> ChunkIfCursor<C, S, P>
where
    C: ForwardCursor,
    S: Sentinel<C>,
    P: Fn(&C::Item) -> bool,
{
    fn find_delimiter(&self, from: &C) -> C {
        let mut cursor = from.clone();
        while !self.end.is_end(&cursor) && !(self.predicate)(&cursor.get()) {
            cursor.advance();
        }
        cursor
    }
}

impl<C, S, P> Cursor for ChunkIfCursor<C, S, P>
where
    C: ForwardCursor,
    S: Sentinel<C>,
    P: Fn(&C::Item) -> bool,
{
    type Item = SubRange<C>;

    const TIER: Tier = C::TIER.min(Tier::Forward);

    #[inline]
    fn get(&self) -> SubRange<C> {
        SubRange::new(self.start.clone(), self.stop.clone())
    }

    fn advance(&mut self) {
        if self.end.is_end(&self.stop) {
            self.start = self.stop.clone();
            self.done = true;
            return;
        }
        let mut next = self.stop.clone();
        next.advance();
        self.stop = self.find_delimiter(&next);
        self.start = next;
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.done
    }
}

impl<C: PartialEq, S, P> PartialEq for ChunkIfCursor<C, S, P> {
    fn eq(&self, other: &Self) -> bool {
        self.done == other.done && self.start == other.start
    }
}

impl<C, S, P> ForwardCursor for ChunkIfCursor<C, S, P>
where
    C: ForwardCursor,
    S: Sentinel<C>,
    P: Fn(&C::Item) -> bool,
{
}

impl<V, P> View for ChunkIf<V, P>
where
    V: View,
    V::Cursor: ForwardCursor,
    P: Fn(&<V::Cursor as Cursor>::Item) -> bool,
{
    type Cursor = ChunkIfCursor<V::Cursor, V::Sentinel, P>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        let start = self.view.begin();
        let end = self.view.end();
        let mut cursor = ChunkIfCursor {
            stop: start.clone(),
            done: end.is_end(&start),
            start,
            end,
            predicate: self.predicate.clone(),
        };
        if !cursor.done {
            cursor.stop = cursor.find_delimiter(&cursor.start);
        }
        cursor
    }

    fn end(&self) -> End {
        End
    }
}

impl<V, P> CommonView for ChunkIf<V, P>
where
    V: CommonView,
    V::Cursor: ForwardCursor,
    P: Fn(&<V::Cursor as Cursor>::Item) -> bool,
{
    fn end_cursor(&self) -> Self::Cursor {
        let end_cursor = self.view.end_cursor();
        ChunkIfCursor {
            start: end_cursor.clone(),
            stop: end_cursor,
            end: self.view.end(),
            predicate: self.predicate.clone(),
            done: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{c_string, source::slice::seq, ViewExt};

    fn chunked(data: &[i32]) -> Vec<Vec<i32>> {
        seq(data)
            .chunk_if(|x: &&i32| **x == 0)
            .iter()
            .map(|chunk| chunk.as_slice().to_vec())
            .collect()
    }

    #[test]
    fn test_chunk_if_basic() {
        assert_eq!(
            chunked(&[1, 2, 0, 3, 0, 4, 5]),
            vec![vec![1, 2], vec![3], vec![4, 5]]
        );
    }

    #[test]
    fn test_chunk_if_empty_chunks() {
        assert_eq!(
            chunked(&[0, 1, 0, 0, 2, 0]),
            vec![vec![], vec![1], vec![], vec![2], vec![]]
        );
        assert_eq!(chunked(&[0]), vec![Vec::<i32>::new(), vec![]]);
    }

    #[test]
    fn test_chunk_if_no_delimiter() {
        assert_eq!(chunked(&[1, 2, 3]), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_chunk_if_empty_input() {
        assert!(chunked(&[]).is_empty());
    }

    #[test]
    fn test_chunk_if_chunk_count() {
        let data = [5, 0, 6, 0, 0, 7];
        let view = seq(&data).chunk_if(|x: &&i32| **x == 0);
        let delimiters = data.iter().filter(|x| **x == 0).count();
        assert_eq!(view.distance(), delimiters + 1);
        assert!(view.begin().steps_to(&view.end_cursor()) == delimiters + 1);
    }

    #[test]
    fn test_chunk_if_on_c_string() {
        let view = c_string(c"a,bc,").chunk_if(|b: &u8| *b == b',');
        let parts: Vec<Vec<u8>> = view.iter().map(|chunk| chunk.to()).collect();
        assert_eq!(parts, vec![b"a".to_vec(), b"bc".to_vec(), vec![]]);
    }
}
