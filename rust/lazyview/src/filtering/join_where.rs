//! Inner join of a view against a slice sorted by key.
//!
//! For each element of the left view, the matching run of the right slice is located
//! with a binary search and one item is produced per matching pair. Pairs come out
//! in left order, and within one left element in right order.

use std::{marker::PhantomData, rc::Rc};

use crate::{
    cursor::{Cursor, ForwardCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

pub struct JoinWhere<'r, V, U, KL, KR, K> {
    view: V,
    right: &'r [U],
    left_key: Rc<KL>,
    right_key: Rc<KR>,
    _key: PhantomData<fn() -> K>,
}

impl<V: Clone, U, KL, KR, K> Clone for JoinWhere<'_, V, U, KL, KR, K> {
    fn clone(&self) -> Self {
        JoinWhere {
            view: self.view.clone(),
            right: self.right,
            left_key: self.left_key.clone(),
            right_key: self.right_key.clone(),
            _key: PhantomData,
        }
    }
}

/// Joins `view` with `right`, which must be sorted by `right_key`, pairing the
/// elements whose keys are equal.
pub fn join_where<'r, V, U, KL, KR, K>(
    view: V,
    right: &'r [U],
    left_key: KL,
    right_key: KR,
) -> JoinWhere<'r, V, U, KL, KR, K>
where
    V: View,
    KL: Fn(&<V::Cursor as Cursor>::Item) -> K,
    KR: Fn(&U) -> K,
    K: Ord,
{
    JoinWhere {
        view,
        right,
        left_key: Rc::new(left_key),
        right_key: Rc::new(right_key),
        _key: PhantomData,
    }
}

pub struct JoinWhereCursor<'r, C, S, U, KL, KR, K> {
    cur: C,
    end: S,
    right: &'r [U],
    /// Index of the current match in `right`. Zero whenever `cur` is at the end.
    pos: usize,
    left_key: Rc<KL>,
    right_key: Rc<KR>,
    _key: PhantomData<fn() -> K>,
}

impl<C: Clone, S: Clone, U, KL, KR, K> Clone for JoinWhereCursor<'_, C, S, U, KL, KR, K> {
    fn clone(&self) -> Self {
        JoinWhereCursor {
            cur: self.cur.clone(),
            end: self.end.clone(),
            right: self.right,
            pos: self.pos,
            left_key: self.left_key.clone(),
            right_key: self.right_key.clone(),
            _key: PhantomData,
        }
    }
}

impl<C, S, U, KL, KR, K> JoinWhereCursor<'_, C, S, U, KL, KR, K>
where
    C: Cursor,
    S: Sentinel<C>,
    KL: Fn(&C::Item) -> K,
    KR: Fn(&U) -> K,
    K: Ord,
{
    /// Moves to the first match at or after the current `(cur, pos)` pair.
    fn find_next(&mut self) {
        while !self.end.is_end(&self.cur) {
            let key = (self.left_key)(&self.cur.get());
            let rest = &self.right[self.pos..];
            self.pos += rest.partition_point(|u| (self.right_key)(u) < key);
            if self.pos < self.right.len() && (self.right_key)(&self.right[self.pos]) == key {
                return;
            }
            self.pos = 0;
            self.cur.advance();
        }
    }
}

impl<'r, C, S, U, KL, KR, K> Cursor for JoinWhereCursor<'r, C, S, U, KL, KR, K>
where
    C: Cursor,
    S: Sentinel<C>,
    KL: Fn(&C::Item) -> K,
    KR: Fn(&U) -> K,
    K: Ord,
{
    type Item = (C::Item, &'r U);

    const TIER: Tier = C::TIER.min(Tier::Forward);

    #[inline]
    fn get(&self) -> Self::Item {
        (self.cur.get(), &self.right[self.pos])
    }

    fn advance(&mut self) {
        self.pos += 1;
        self.find_next();
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.end.is_end(&self.cur)
    }
}

impl<C: PartialEq, S, U, KL, KR, K> PartialEq for JoinWhereCursor<'_, C, S, U, KL, KR, K> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && self.cur == other.cur
    }
}

impl<C, S, U, KL, KR, K> ForwardCursor for JoinWhereCursor<'_, C, S, U, KL, KR, K>
where
    C: ForwardCursor,
    S: Sentinel<C>,
    KL: Fn(&C::Item) -> K,
    KR: Fn(&U) -> K,
    K: Ord,
{
}

impl<'r, V, U, KL, KR, K> View for JoinWhere<'r, V, U, KL, KR, K>
where
    V: View,
    KL: Fn(&<V::Cursor as Cursor>::Item) -> K,
    KR: Fn(&U) -> K,
    K: Ord,
{
    type Cursor = JoinWhereCursor<'r, V::Cursor, V::Sentinel, U, KL, KR, K>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        let mut cursor = JoinWhereCursor {
            cur: self.view.begin(),
            end: self.view.end(),
            right: self.right,
            pos: 0,
            left_key: self.left_key.clone(),
            right_key: self.right_key.clone(),
            _key: PhantomData,
        };
        cursor.find_next();
        cursor
    }

    fn end(&self) -> End {
        End
    }
}

impl<V, U, KL, KR, K> CommonView for JoinWhere<'_, V, U, KL, KR, K>
where
    V: CommonView,
    KL: Fn(&<V::Cursor as Cursor>::Item) -> K,
    KR: Fn(&U) -> K,
    K: Ord,
{
    fn end_cursor(&self) -> Self::Cursor {
        JoinWhereCursor {
            cur: self.view.end_cursor(),
            end: self.view.end(),
            right: self.right,
            pos: 0,
            left_key: self.left_key.clone(),
            right_key: self.right_key.clone(),
            _key: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{source::slice::seq, ViewExt};

    #[derive(Debug, PartialEq)]
    struct Order {
        customer: u32,
        item: &'static str,
    }

    #[test]
    fn test_join_where_pairs() {
        let customers = [(1, "ann"), (2, "bob"), (3, "cid"), (2, "bob again")];
        let orders = [
            Order { customer: 1, item: "tea" },
            Order { customer: 2, item: "cake" },
            Order { customer: 2, item: "jam" },
            Order { customer: 4, item: "milk" },
        ];
        let view = seq(&customers).join_where(
            &orders,
            |c: &&(u32, &str)| c.0,
            |o: &Order| o.customer,
        );
        let pairs: Vec<(&str, &str)> = view.iter().map(|(c, o)| (c.1, o.item)).collect();
        assert_eq!(
            pairs,
            vec![
                ("ann", "tea"),
                ("bob", "cake"),
                ("bob", "jam"),
                ("bob again", "cake"),
                ("bob again", "jam"),
            ]
        );
        assert_eq!(view.distance(), 5);
    }

    #[test]
    fn test_join_where_no_matches() {
        let left = [1, 3, 5];
        let right = [2, 4, 6];
        let view = join_where(seq(&left), &right, |x: &&i32| **x, |y: &i32| *y);
        assert!(view.is_empty());
        assert!(view.begin() == view.end_cursor());
    }

    #[test]
    fn test_join_where_matches_nested_loop() {
        let mut rng = fastrand::Rng::with_seed(42);
        let left: Vec<u8> = (0..40).map(|_| rng.u8(0..12)).collect();
        let mut right: Vec<u8> = (0..30).map(|_| rng.u8(0..12)).collect();
        right.sort_unstable();
        let expected: Vec<(u8, u8)> = left
            .iter()
            .flat_map(|l| right.iter().filter(move |r| *r == l).map(move |r| (*l, *r)))
            .collect();
        let view = join_where(seq(&left), &right, |x: &&u8| **x, |y: &u8| *y);
        let actual: Vec<(u8, u8)> = view.iter().map(|(l, r)| (*l, *r)).collect();
        assert_eq!(actual, expected);
    }
}
