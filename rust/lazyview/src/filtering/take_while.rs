//! Predicate-bounded prefixes and suffixes.
//!
//! [`TakeWhile`] is a sequence whose end is found by a predicate rather than by
//! position: its cursor reports the end on the first element the predicate rejects.
//! Its end cursor is found by walking from the begin, once per call.
//!
//! [`SkipWhile`] moves the begin of the wrapped view past the accepted prefix each
//! time a traversal begins, and hands out the wrapped cursors unchanged.

use std::rc::Rc;

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

pub struct TakeWhile<V, P> {
    view: V,
    predicate: Rc<P>,
}

impl<V: Clone, P> Clone for TakeWhile<V, P> {
    fn clone(&self) -> Self {
        TakeWhile {
            view: self.view.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

/// Elements of `view` up to, not including, the first one `predicate` rejects.
pub fn take_while<V: View, P>(view: V, predicate: P) -> TakeWhile<V, P>
where
    P: Fn(&<V::Cursor as Cursor>::Item) -> bool,
{
    TakeWhile {
        view,
        predicate: Rc::new(predicate),
    }
}

pub struct TakeWhileCursor<C, S, P> {
    cur: C,
    end: S,
    predicate: Rc<P>,
    /// Set once `cur` reached the underlying end or a rejected element.
    stopped: bool,
}

impl<C: Clone, S: Clone, P> Clone for TakeWhileCursor<C, S, P> {
    fn clone(&self) -> Self {
        TakeWhileCursor {
            cur: self.cur.clone(),
            end: self.end.clone(),
            predicate: self.predicate.clone(),
            stopped: self.stopped,
        }
    }
}

impl<C, S, P> TakeWhileCursor<C, S, P>
where
    C: Cursor,
    S: Sentinel<C>,
    P: Fn(&C::Item) -> bool,
{
    fn check(&mut self) {
        self.stopped = self.end.is_end(&self.cur) || !(self.predicate)(&self.cur.get());
    }
}

impl<C, S, P> Cursor for TakeWhileCursor<C, S, P>
where
    C: Cursor,
    S: Sentinel<C>,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    const TIER: Tier = C::TIER.min(Tier::Bidirectional);

    #[inline]
    fn get(&self) -> C::Item {
        self.cur.get()
    }

    #[inline]
    fn advance(&mut self) {
        self.cur.advance();
        self.check();
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.stopped
    }
}

impl<C: PartialEq, S, P> PartialEq for TakeWhileCursor<C, S, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cur == other.cur
    }
}

impl<C, S, P> ForwardCursor for TakeWhileCursor<C, S, P>
where
    C: ForwardCursor,
    S: Sentinel<C>,
    P: Fn(&C::Item) -> bool,
{
}

impl<C, S, P> BidirectionalCursor for TakeWhileCursor<C, S, P>
where
    C: BidirectionalCursor,
    S: Sentinel<C>,
    P: Fn(&C::Item) -> bool,
{
    /// Every element before the stop point was accepted.
    fn retreat(&mut self) {
        self.cur.retreat();
        self.stopped = false;
    }
}

impl<V, P> View for TakeWhile<V, P>
where
    V: View,
    P: Fn(&<V::Cursor as Cursor>::Item) -> bool,
{
    type Cursor = TakeWhileCursor<V::Cursor, V::Sentinel, P>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        let mut cursor = TakeWhileCursor {
            cur: self.view.begin(),
            end: self.view.end(),
            predicate: self.predicate.clone(),
            stopped: false,
        };
        cursor.check();
        cursor
    }

    fn end(&self) -> End {
        End
    }
}

impl<V, P> CommonView for TakeWhile<V, P>
where
    V: View,
    V::Cursor: ForwardCursor,
    P: Fn(&<V::Cursor as Cursor>::Item) -> bool,
{
    /// The cursor on the first rejected element, or at the underlying end.
    fn end_cursor(&self) -> Self::Cursor {
        let mut cursor = self.begin();
        while !cursor.stopped {
            cursor.advance();
        }
        cursor
    }
}

pub struct SkipWhile<V, P> {
    view: V,
    predicate: Rc<P>,
}

impl<V: Clone, P> Clone for SkipWhile<V, P> {
    fn clone(&self) -> Self {
        SkipWhile {
            view: self.view.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

/// Elements of `view` from the first one `predicate` rejects onward.
pub fn skip_while<V: View, P>(view: V, predicate: P) -> SkipWhile<V, P>
where
    P: Fn(&<V::Cursor as Cursor>::Item) -> bool,
{
    SkipWhile {
        view,
        predicate: Rc::new(predicate),
    }
}

impl<V, P> View for SkipWhile<V, P>
where
    V: View,
    P: Fn(&<V::Cursor as Cursor>::Item) -> bool,
{
    type Cursor = V::Cursor;
    type Sentinel = V::Sentinel;

    fn begin(&self) -> V::Cursor {
        let end = self.view.end();
        let mut cursor = self.view.begin();
        while !end.is_end(&cursor) && (self.predicate)(&cursor.get()) {
            cursor.advance();
        }
        cursor
    }

    fn end(&self) -> V::Sentinel {
        self.view.end()
    }
}

impl<V, P> CommonView for SkipWhile<V, P>
where
    V: CommonView,
    P: Fn(&<V::Cursor as Cursor>::Item) -> bool,
{
    fn end_cursor(&self) -> V::Cursor {
        self.view.end_cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{c_string, iter_source, source::slice::seq, RandomAccessCursor, ViewExt};

    #[test]
    fn test_take_while_prefix() {
        let data = [1, 5, 1, 7];
        let view = seq(&data).take_while(|x: &&i32| **x < 3);
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(view.distance(), 1);
        // backward walks start at the first rejected element, not at the last
        // accepted one in the whole input
        assert_eq!(view.common_iter().rev().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_take_while_everything_or_nothing() {
        let data = [1, 2, 3];
        let all = seq(&data).take_while(|_: &&i32| true);
        assert_eq!(all.distance(), 3);
        assert!(all.end_cursor() == {
            let mut cursor = all.begin();
            cursor.advance_n(3);
            cursor
        });
        let none = seq(&data).take_while(|x: &&i32| **x > 5);
        assert!(none.is_empty());
        assert!(none.begin() == none.end_cursor());
    }

    #[test]
    fn test_take_while_unbounded_source() {
        let view = iter_source(1..).take_while(|x: &i32| x * x < 30);
        assert_eq!(view.to::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        let word: String = c_string(c"key=value")
            .take_while(|b: &u8| *b != b'=')
            .iter()
            .map(char::from)
            .collect();
        assert_eq!(word, "key");
    }

    #[test]
    fn test_take_while_reverse() {
        let data = [2, 4, 6, 7, 8];
        let view = seq(&data).take_while(|x: &&i32| **x % 2 == 0);
        assert_eq!(
            view.common_iter().rev().copied().collect::<Vec<_>>(),
            vec![6, 4, 2]
        );
        type Slice<'a> = crate::SliceCursor<'a, i32>;
        assert_eq!(
            <TakeWhileCursor<Slice<'_>, Slice<'_>, fn(&&i32) -> bool> as Cursor>::TIER,
            Tier::Bidirectional
        );
    }

    #[test]
    fn test_skip_while_suffix() {
        let data = [1, 2, 5, 1, 7];
        let view = seq(&data).skip_while(|x: &&i32| **x < 3);
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![5, 1, 7]);
        assert_eq!(
            view.common_iter().rev().copied().collect::<Vec<_>>(),
            vec![7, 1, 5]
        );
        assert!(seq(&data).skip_while(|_: &&i32| true).is_empty());
        let value: String = c_string(c"key=value")
            .skip_while(|b: &u8| *b != b'=')
            .iter()
            .skip(1)
            .map(char::from)
            .collect();
        assert_eq!(value, "value");
    }

    #[test]
    fn test_skip_while_keeps_random_access() {
        let data: Vec<i32> = (0..10).collect();
        let view = seq(&data).skip_while(|x: &&i32| **x < 4);
        let mut cursor = view.begin();
        cursor.advance_by(3);
        assert_eq!(*cursor.get(), 7);
        assert_eq!(view.end_cursor().offset_from(&view.begin()), 6);
    }
}
