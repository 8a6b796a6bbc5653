//! Running folds.
//!
//! Both scans yield one accumulated value per input element. The inclusive scan
//! folds the current element in before yielding; the exclusive scan yields `init`
//! first and never folds in the last element. The accumulator lives on the cursor,
//! so copies of a cursor accumulate independently.

use std::rc::Rc;

use crate::{
    cursor::{Cursor, ForwardCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

pub struct Scan<V, T, F> {
    view: V,
    init: T,
    op: Rc<F>,
    inclusive: bool,
}

impl<V: Clone, T: Clone, F> Clone for Scan<V, T, F> {
    fn clone(&self) -> Self {
        Scan {
            view: self.view.clone(),
            init: self.init.clone(),
            op: self.op.clone(),
            inclusive: self.inclusive,
        }
    }
}

/// Yields `op(init, x0)`, `op(op(init, x0), x1)`, ... for the elements of `view`.
pub fn inclusive_scan<V: View, T, F>(view: V, init: T, op: F) -> Scan<V, T, F>
where
    T: Clone,
    F: Fn(T, <V::Cursor as Cursor>::Item) -> T,
{
    Scan {
        view,
        init,
        op: Rc::new(op),
        inclusive: true,
    }
}

/// Yields `init`, `op(init, x0)`, ... for the elements of `view`, one value per
/// element, each leaving out the element it is yielded for.
pub fn exclusive_scan<V: View, T, F>(view: V, init: T, op: F) -> Scan<V, T, F>
where
    T: Clone,
    F: Fn(T, <V::Cursor as Cursor>::Item) -> T,
{
    Scan {
        view,
        init,
        op: Rc::new(op),
        inclusive: false,
    }
}

pub struct ScanCursor<C, S, T, F> {
    cur: C,
    end: S,
    acc: T,
    op: Rc<F>,
    inclusive: bool,
}

impl<C: Clone, S: Clone, T: Clone, F> Clone for ScanCursor<C, S, T, F> {
    fn clone(&self) -> Self {
        ScanCursor {
            cur: self.cur.clone(),
            end: self.end.clone(),
            acc: self.acc.clone(),
            op: self.op.clone(),
            inclusive: self.inclusive,
        }
    }
}

impl<C, S, T, F> Cursor for ScanCursor<C, S, T, F>
where
    C: Cursor,
    S: Sentinel<C>,
    T: Clone,
    F: Fn(T, C::Item) -> T,
{
    type Item = T;

    const TIER: Tier = C::TIER.min(Tier::Forward);

    #[inline]
    fn get(&self) -> T {
        self.acc.clone()
    }

    fn advance(&mut self) {
        if self.inclusive {
            self.cur.advance();
            if !self.end.is_end(&self.cur) {
                self.acc = (self.op)(self.acc.clone(), self.cur.get());
            }
        } else {
            self.acc = (self.op)(self.acc.clone(), self.cur.get());
            self.cur.advance();
        }
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.end.is_end(&self.cur)
    }

    fn remaining(&self) -> usize {
        self.end.distance_from(&self.cur)
    }
}

impl<C: PartialEq, S, T, F> PartialEq for ScanCursor<C, S, T, F> {
    fn eq(&self, other: &Self) -> bool {
        self.cur == other.cur
    }
}

impl<C, S, T, F> ForwardCursor for ScanCursor<C, S, T, F>
where
    C: ForwardCursor,
    S: Sentinel<C>,
    T: Clone,
    F: Fn(T, C::Item) -> T,
{
    fn steps_to(&self, other: &Self) -> usize {
        self.cur.steps_to(&other.cur)
    }
}

impl<V, T, F> View for Scan<V, T, F>
where
    V: View,
    T: Clone,
    F: Fn(T, <V::Cursor as Cursor>::Item) -> T,
{
    type Cursor = ScanCursor<V::Cursor, V::Sentinel, T, F>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        let cur = self.view.begin();
        let end = self.view.end();
        let acc = if self.inclusive && !end.is_end(&cur) {
            (self.op)(self.init.clone(), cur.get())
        } else {
            self.init.clone()
        };
        ScanCursor {
            cur,
            end,
            acc,
            op: self.op.clone(),
            inclusive: self.inclusive,
        }
    }

    fn end(&self) -> End {
        End
    }
}

impl<V, T, F> CommonView for Scan<V, T, F>
where
    V: CommonView,
    T: Clone,
    F: Fn(T, <V::Cursor as Cursor>::Item) -> T,
{
    /// Positioned at the underlying end; its accumulator is never read.
    fn end_cursor(&self) -> Self::Cursor {
        ScanCursor {
            cur: self.view.end_cursor(),
            end: self.view.end(),
            acc: self.init.clone(),
            op: self.op.clone(),
            inclusive: self.inclusive,
        }
    }
}
