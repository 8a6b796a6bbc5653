//! Fused filter and projection.
//!
//! The chooser returns `Some(value)` for elements to keep. The value is cached on the
//! cursor when it moves, so `get` hands out clones without calling the chooser again.

use std::{marker::PhantomData, rc::Rc};

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

pub struct Choose<V, F, T> {
    view: V,
    chooser: Rc<F>,
    _value: PhantomData<fn() -> T>,
}

impl<V: Clone, F, T> Clone for Choose<V, F, T> {
    fn clone(&self) -> Self {
        Choose {
            view: self.view.clone(),
            chooser: self.chooser.clone(),
            _value: PhantomData,
        }
    }
}

/// Keeps the values `chooser` produces for the elements of `view`.
pub fn choose<V: View, F, T>(view: V, chooser: F) -> Choose<V, F, T>
where
    F: Fn(<V::Cursor as Cursor>::Item) -> Option<T>,
{
    Choose {
        view,
        chooser: Rc::new(chooser),
        _value: PhantomData,
    }
}

pub struct ChooseCursor<C, S, F, T> {
    first: C,
    cur: C,
    end: S,
    chooser: Rc<F>,
    value: Option<T>,
}

impl<C: Clone, S: Clone, F, T: Clone> Clone for ChooseCursor<C, S, F, T> {
    fn clone(&self) -> Self {
        ChooseCursor {
            first: self.first.clone(),
            cur: self.cur.clone(),
            end: self.end.clone(),
            chooser: self.chooser.clone(),
            value: self.value.clone(),
        }
    }
}

impl<C, S, F, T> ChooseCursor<C, S, F, T>
where
    C: Cursor,
    S: Sentinel<C>,
    F: Fn(C::Item) -> Option<T>,
{
    fn seek(&mut self) {
        while !self.end.is_end(&self.cur) {
            self.value = (self.chooser)(self.cur.get());
            if self.value.is_some() {
                return;
            }
            self.cur.advance();
        }
        self.value = None;
    }
}

impl<C, S, F, T> Cursor for ChooseCursor<C, S, F, T>
where
    C: Cursor,
    S: Sentinel<C>,
    F: Fn(C::Item) -> Option<T>,
    T: Clone,
{
    type Item = T;

    const TIER: Tier = C::TIER.min(Tier::Bidirectional);

    fn get(&self) -> T {
        self.value
            .clone()
            .expect("get() called on an exhausted cursor")
    }

    fn advance(&mut self) {
        self.cur.advance();
        self.seek();
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.end.is_end(&self.cur)
    }
}

impl<C: PartialEq, S, F, T> PartialEq for ChooseCursor<C, S, F, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cur == other.cur
    }
}

impl<C, S, F, T> ForwardCursor for ChooseCursor<C, S, F, T>
where
    C: ForwardCursor,
    S: Sentinel<C>,
    F: Fn(C::Item) -> Option<T>,
    T: Clone,
{
}

impl<C, S, F, T> BidirectionalCursor for ChooseCursor<C, S, F, T>
where
    C: BidirectionalCursor,
    S: Sentinel<C>,
    F: Fn(C::Item) -> Option<T>,
    T: Clone,
{
    fn retreat(&mut self) {
        loop {
            self.cur.retreat();
            self.value = (self.chooser)(self.cur.get());
            if self.value.is_some() || self.cur == self.first {
                return;
            }
        }
    }
}

impl<V, F, T> View for Choose<V, F, T>
where
    V: View,
    F: Fn(<V::Cursor as Cursor>::Item) -> Option<T>,
    T: Clone,
{
    type Cursor = ChooseCursor<V::Cursor, V::Sentinel, F, T>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        let first = self.view.begin();
        let mut cursor = ChooseCursor {
            cur: first.clone(),
            first,
            end: self.view.end(),
            chooser: self.chooser.clone(),
            value: None,
        };
        cursor.seek();
        cursor
    }

    fn end(&self) -> End {
        End
    }
}

impl<V, F, T> CommonView for Choose<V, F, T>
where
    V: CommonView,
    F: Fn(<V::Cursor as Cursor>::Item) -> Option<T>,
    T: Clone,
{
    fn end_cursor(&self) -> Self::Cursor {
        ChooseCursor {
            first: self.view.begin(),
            cur: self.view.end_cursor(),
            end: self.view.end(),
            chooser: self.chooser.clone(),
            value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{source::slice::seq, ViewExt};

    fn parse(word: &&str) -> Option<i32> {
        word.parse().ok()
    }

    #[test]
    fn test_choose_parses() {
        let words = ["1", "x", "22", "", "333"];
        let view = seq(&words).choose(parse);
        assert_eq!(view.to::<Vec<i32>>(), vec![1, 22, 333]);
        assert_eq!(view.distance(), 3);
    }

    #[test]
    fn test_choose_reverse() {
        let data: Vec<i32> = (1..=9).collect();
        let view = seq(&data).choose(|x: &i32| (x % 3 == 0).then_some(x * 10));
        assert_eq!(
            view.common_iter().rev().collect::<Vec<_>>(),
            vec![90, 60, 30]
        );
    }

    #[test]
    fn test_choose_none() {
        let data = [1, 2, 3];
        let view = seq(&data).choose(|_: &i32| None::<i32>);
        assert!(view.is_empty());
    }
}
