//! Runs of adjacent equivalent elements.
//!
//! Each item pairs the first element of a run with the run itself. Walking forward,
//! a run extends while elements are equivalent to its first element; walking
//! backward, while they are equivalent to its last one. Both agree when the
//! relation is an equivalence.

use std::rc::Rc;

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, SubRange, View},
};

pub struct GroupBy<V, F> {
    view: V,
    eq: Rc<F>,
}

impl<V: Clone, F> Clone for GroupBy<V, F> {
    fn clone(&self) -> Self {
        GroupBy {
            view: self.view.clone(),
            eq: self.eq.clone(),
        }
    }
}

/// Groups adjacent elements of `view` for which `eq` holds.
pub fn group_by<V: View, F>(view: V, eq: F) -> GroupBy<V, F>
where
    F: Fn(&<V::Cursor as Cursor>::Item, &<V::Cursor as Cursor>::Item) -> bool,
{
    GroupBy {
        view,
        eq: Rc::new(eq),
    }
}

pub struct GroupByCursor<C, S, F> {
    /// Begin of the underlying sequence; bounds backward scans.
    first: C,
    start: C,
    stop: C,
    end: S,
    eq: Rc<F>,
}

impl<C: Clone, S: Clone, F> Clone for GroupByCursor<C, S, F> {
    fn clone(&self) -> Self {
        GroupByCursor {
            first: self.first.clone(),
            start: self.start.clone(),
            stop: self.stop.clone(),
            end: self.end.clone(),
            eq: self.eq.clone(),
        }
    }
}

impl<C, S, F> GroupByCursor<C, S, F>
where
    C: ForwardCursor,
    S: Sentinel<C>,
    F: Fn(&C::Item, &C::Item) -> bool,
{
    fn run_end(&self, start: &C) -> C {
        let mut cursor = start.clone();
        if self.end.is_end(&cursor) {
            return cursor;
        }
        let key = cursor.get();
        cursor.advance();
        while !self.end.is_end(&cursor) && (self.eq)(&key, &cursor.get()) {
            cursor.advance();
        }
        cursor
    }
}

impl<C, S, F> Cursor for GroupByCursor<C, S, F>
where
    C: ForwardCursor,
    S: Sentinel<C>,
    F: Fn(&C::Item, &C::Item) -> bool,
{
    type Item = (C::Item, SubRange<C>);

    const TIER: Tier = C::TIER.min(Tier::Bidirectional);

    fn get(&self) -> Self::Item {
        (
            self.start.get(),
            SubRange::new(self.start.clone(), self.stop.clone()),
        )
    }

    fn advance(&mut self) {
        self.start = self.stop.clone();
        self.stop = self.run_end(&self.start);
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.end.is_end(&self.start)
    }
}

impl<C: PartialEq, S, F> PartialEq for GroupByCursor<C, S, F> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
    }
}

impl<C, S, F> ForwardCursor for GroupByCursor<C, S, F>
where
    C: ForwardCursor,
    S: Sentinel<C>,
    F: Fn(&C::Item, &C::Item) -> bool,
{
}

impl<C, S, F> BidirectionalCursor for GroupByCursor<C, S, F>
where
    C: BidirectionalCursor,
    S: Sentinel<C>,
    F: Fn(&C::Item, &C::Item) -> bool,
{
    fn retreat(&mut self) {
        self.stop = self.start.clone();
        self.start.retreat();
        let key = self.start.get();
        while self.start != self.first {
            let mut prev = self.start.clone();
            prev.retreat();
            if !(self.eq)(&prev.get(), &key) {
                break;
            }
            self.start = prev;
        }
    }
}

impl<V, F> View for GroupBy<V, F>
where
    V: View,
    V::Cursor: ForwardCursor,
    F: Fn(&<V::Cursor as Cursor>::Item, &<V::Cursor as Cursor>::Item) -> bool,
{
    type Cursor = GroupByCursor<V::Cursor, V::Sentinel, F>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        let first = self.view.begin();
        let mut cursor = GroupByCursor {
            start: first.clone(),
            stop: first.clone(),
            first,
            end: self.view.end(),
            eq: self.eq.clone(),
        };
        cursor.stop = cursor.run_end(&cursor.start);
        cursor
    }

    fn end(&self) -> End {
        End
    }
}

impl<V, F> CommonView for GroupBy<V, F>
where
    V: CommonView,
    V::Cursor: ForwardCursor,
    F: Fn(&<V::Cursor as Cursor>::Item, &<V::Cursor as Cursor>::Item) -> bool,
{
    fn end_cursor(&self) -> Self::Cursor {
        let end_cursor = self.view.end_cursor();
        GroupByCursor {
            first: self.view.begin(),
            start: end_cursor.clone(),
            stop: end_cursor,
            end: self.view.end(),
            eq: self.eq.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::{source::slice::seq, ViewExt};

    fn same(a: &&i32, b: &&i32) -> bool {
        a == b
    }

    #[test]
    fn test_group_by_runs() {
        let data = [1, 1, 2, 3, 3, 3, 1];
        let view = seq(&data).group_by(same);
        let groups: Vec<(i32, Vec<i32>)> = view
            .iter()
            .map(|(key, run)| (*key, run.as_slice().to_vec()))
            .collect();
        assert_eq!(
            groups,
            vec![
                (1, vec![1, 1]),
                (2, vec![2]),
                (3, vec![3, 3, 3]),
                (1, vec![1])
            ]
        );
    }

    #[test]
    fn test_group_by_matches_itertools() {
        let data = [4, 6, 8, 1, 3, 2, 2, 5];
        let parity = |a: &&i32, b: &&i32| **a % 2 == **b % 2;
        let actual: Vec<Vec<i32>> = seq(&data)
            .group_by(parity)
            .iter()
            .map(|(_, run)| run.as_slice().to_vec())
            .collect();
        let expected: Vec<Vec<i32>> = data
            .iter()
            .chunk_by(|x| **x % 2)
            .into_iter()
            .map(|(_, run)| run.copied().collect())
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_group_by_reverse() {
        let data = [1, 1, 2, 3, 3, 3, 1];
        let view = seq(&data).group_by(same);
        let backward: Vec<Vec<i32>> = view
            .common_iter()
            .rev()
            .map(|(_, run)| run.as_slice().to_vec())
            .collect();
        assert_eq!(
            backward,
            vec![vec![1], vec![3, 3, 3], vec![2], vec![1, 1]]
        );
    }

    #[test]
    fn test_group_by_empty() {
        let data: [i32; 0] = [];
        let view = seq(&data).group_by(same);
        assert!(view.is_empty());
        assert_eq!(view.distance(), 0);
    }
}
