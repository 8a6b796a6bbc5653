//! Predicate filtering.
//!
//! The predicate runs when the cursor moves, never in `get`. Moving backward stops at
//! the underlying begin even when the predicate rejects the element there.

use std::rc::Rc;

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

pub struct Filter<V, P> {
    view: V,
    predicate: Rc<P>,
}

impl<V: Clone, P> Clone for Filter<V, P> {
    fn clone(&self) -> Self {
        Filter {
            view: self.view.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

/// Keeps the elements of `view` for which `predicate` holds.
pub fn filter<V: View, P>(view: V, predicate: P) -> Filter<V, P>
where
    P: Fn(&<V::Cursor as Cursor>::Item) -> bool,
{
    Filter {
        view,
        predicate: Rc::new(predicate),
    }
}

pub struct FilterCursor<C, S, P> {
    first: C,
    cur: C,
    end: S,
    predicate: Rc<P>,
}

impl<C: Clone, S: Clone, P> Clone for FilterCursor<C, S, P> {
    fn clone(&self) -> Self {
        FilterCursor {
            first: self.first.clone(),
            cur: self.cur.clone(),
            end: self.end.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

impl<C, S, P> FilterCursor<C, S, P>
where
    C: Cursor,
    S: Sentinel<C>,
    P: Fn(&C::Item) -> bool,
{
    fn seek(&mut self) {
        while !self.end.is_end(&self.cur) && !(self.predicate)(&self.cur.get()) {
            self.cur.advance();
        }
    }
}

impl<C, S, P> Cursor for FilterCursor<C, S, P>
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
        self.seek();
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.end.is_end(&self.cur)
    }
}

impl<C: PartialEq, S, P> PartialEq for FilterCursor<C, S, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cur == other.cur
    }
}

impl<C, S, P> ForwardCursor for FilterCursor<C, S, P>
where
    C: ForwardCursor,
    S: Sentinel<C>,
    P: Fn(&C::Item) -> bool,
{
}

impl<C, S, P> BidirectionalCursor for FilterCursor<C, S, P>
where
    C: BidirectionalCursor,
    S: Sentinel<C>,
    P: Fn(&C::Item) -> bool,
{
    fn retreat(&mut self) {
        loop {
            self.cur.retreat();
            if self.cur == self.first || (self.predicate)(&self.cur.get()) {
                break;
            }
        }
    }
}

impl<V, P> View for Filter<V, P>
where
    V: View,
    P: Fn(&<V::Cursor as Cursor>::Item) -> bool,
{
    type Cursor = FilterCursor<V::Cursor, V::Sentinel, P>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        let first = self.view.begin();
        let mut cursor = FilterCursor {
            cur: first.clone(),
            first,
            end: self.view.end(),
            predicate: self.predicate.clone(),
        };
        cursor.seek();
        cursor
    }

    fn end(&self) -> End {
        End
    }
}

impl<V, P> CommonView for Filter<V, P>
where
    V: CommonView,
    P: Fn(&<V::Cursor as Cursor>::Item) -> bool,
{
    fn end_cursor(&self) -> Self::Cursor {
        FilterCursor {
            first: self.view.begin(),
            cur: self.view.end_cursor(),
            end: self.view.end(),
            predicate: self.predicate.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{iter_source, source::slice::seq, ViewExt};

    #[test]
    fn test_filter_even() {
        let data: Vec<i32> = (1..=10).collect();
        let view = seq(&data).filter(|x: &&i32| **x % 2 == 0);
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6, 8, 10]);
        assert_eq!(
            view.common_iter().rev().copied().collect::<Vec<_>>(),
            vec![10, 8, 6, 4, 2]
        );
        assert_eq!(view.distance(), 5);
    }

    #[test]
    fn test_filter_nothing_passes() {
        let data = [1, 3, 5];
        let view = seq(&data).filter(|x: &&i32| **x % 2 == 0);
        assert!(view.is_empty());
        assert!(view.begin() == view.end_cursor());
    }

    #[test]
    fn test_filter_get_does_not_reevaluate() {
        let calls = Cell::new(0);
        let data = [1, 2, 3, 4];
        let view = seq(&data).filter(|x: &&i32| {
            calls.set(calls.get() + 1);
            **x > 2
        });
        let cursor = view.begin();
        assert_eq!(calls.get(), 3);
        assert_eq!(*cursor.get(), 3);
        assert_eq!(*cursor.get(), 3);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_filter_single_pass() {
        let view = iter_source(1..20).filter(|x: &i32| x % 7 == 0);
        assert_eq!(view.to::<Vec<_>>(), vec![7, 14]);
    }
}
