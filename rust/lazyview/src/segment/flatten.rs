//! One level of flattening for a view of views.
//!
//! Each call removes exactly one level of nesting; it does not recurse into inner
//! items that are themselves nested. Deeper nesting is flattened by chaining one
//! call per level: `view.flatten().flatten()` walks three levels down to the leaf
//! elements. The cursor is either at the outer end, or rests on an element of a
//! non-empty inner view; empty inner views are skipped in both directions.

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor, Tier},
    ext::ItemOf,
    sentinel::{End, Sentinel},
    view::{CommonView, IntoView, View},
};

#[derive(Debug, Clone)]
pub struct Flatten<V> {
    view: V,
}

/// Flattens one level of a view whose items convert into views. Chain one call per
/// level of nesting.
pub fn flatten<V: View>(view: V) -> Flatten<V> {
    Flatten { view }
}

struct Inner<I: View> {
    view: I,
    cur: I::Cursor,
    end: I::Sentinel,
}

impl<I: View + Clone> Clone for Inner<I> {
    fn clone(&self) -> Self {
        Inner {
            view: self.view.clone(),
            cur: self.cur.clone(),
            end: self.end.clone(),
        }
    }
}

impl<I: View> Inner<I> {
    fn enter(view: I) -> Option<Inner<I>> {
        let cur = view.begin();
        let end = view.end();
        if end.is_end(&cur) {
            return None;
        }
        Some(Inner { view, cur, end })
    }
}

pub struct FlattenCursor<C, S, I: View> {
    outer: C,
    outer_end: S,
    inner: Option<Inner<I>>,
}

impl<C: Clone, S: Clone, I: View + Clone> Clone for FlattenCursor<C, S, I> {
    fn clone(&self) -> Self {
        FlattenCursor {
            outer: self.outer.clone(),
            outer_end: self.outer_end.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<C, S, I> FlattenCursor<C, S, I>
where
    C: Cursor,
    C::Item: IntoView<View = I>,
    S: Sentinel<C>,
    I: View + Clone,
{
    fn new(outer: C, outer_end: S) -> FlattenCursor<C, S, I> {
        let mut cursor = FlattenCursor {
            outer,
            outer_end,
            inner: None,
        };
        cursor.settle();
        cursor
    }

    /// Moves the outer cursor to the first non-empty inner view at or after it.
    fn settle(&mut self) {
        while !self.outer_end.is_end(&self.outer) {
            self.inner = Inner::enter(self.outer.get().into_view());
            if self.inner.is_some() {
                return;
            }
            self.outer.advance();
        }
        self.inner = None;
    }
}

impl<C, S, I> Cursor for FlattenCursor<C, S, I>
where
    C: Cursor,
    C::Item: IntoView<View = I>,
    S: Sentinel<C>,
    I: View + Clone,
{
    type Item = <I::Cursor as Cursor>::Item;

    /// Backward steps only retreat the outer cursor and enter inner views from their
    /// end cursors, so neither end marker limits the tier.
    const TIER: Tier = C::TIER
        .min(<I::Cursor as Cursor>::TIER)
        .min(Tier::Bidirectional);

    fn get(&self) -> Self::Item {
        self.inner
            .as_ref()
            .expect("get() called on an exhausted cursor")
            .cur
            .get()
    }

    fn advance(&mut self) {
        let Some(inner) = self.inner.as_mut() else {
            return;
        };
        inner.cur.advance();
        if inner.end.is_end(&inner.cur) {
            self.outer.advance();
            self.settle();
        }
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.inner.is_none()
    }

    fn remaining(&self) -> usize {
        let Some(inner) = &self.inner else {
            return 0;
        };
        let mut count = inner.end.distance_from(&inner.cur);
        let mut outer = self.outer.clone();
        outer.advance();
        while !self.outer_end.is_end(&outer) {
            let view = outer.get().into_view();
            count += view.end().distance_from(&view.begin());
            outer.advance();
        }
        count
    }
}

impl<C: PartialEq, S, I: View> PartialEq for FlattenCursor<C, S, I>
where
    I::Cursor: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.outer == other.outer
            && match (&self.inner, &other.inner) {
                (Some(a), Some(b)) => a.cur == b.cur,
                (None, None) => true,
                _ => false,
            }
    }
}

impl<C, S, I> ForwardCursor for FlattenCursor<C, S, I>
where
    C: ForwardCursor,
    C::Item: IntoView<View = I>,
    S: Sentinel<C>,
    I: View + Clone,
    I::Cursor: ForwardCursor,
{
}

impl<C, S, I> BidirectionalCursor for FlattenCursor<C, S, I>
where
    C: BidirectionalCursor,
    C::Item: IntoView<View = I>,
    S: Sentinel<C>,
    I: CommonView + Clone,
    I::Cursor: BidirectionalCursor,
{
    fn retreat(&mut self) {
        if let Some(inner) = self.inner.as_mut() {
            if inner.cur != inner.view.begin() {
                inner.cur.retreat();
                return;
            }
        }
        loop {
            self.outer.retreat();
            let view = self.outer.get().into_view();
            let mut cur = view.end_cursor();
            if cur != view.begin() {
                cur.retreat();
                let end = view.end();
                self.inner = Some(Inner { view, cur, end });
                return;
            }
        }
    }
}

impl<V: View> View for Flatten<V>
where
    ItemOf<V>: IntoView,
    <ItemOf<V> as IntoView>::View: Clone,
{
    type Cursor = FlattenCursor<V::Cursor, V::Sentinel, <ItemOf<V> as IntoView>::View>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        FlattenCursor::new(self.view.begin(), self.view.end())
    }

    fn end(&self) -> End {
        End
    }
}

impl<V: CommonView> CommonView for Flatten<V>
where
    ItemOf<V>: IntoView,
    <ItemOf<V> as IntoView>::View: Clone,
{
    fn end_cursor(&self) -> Self::Cursor {
        FlattenCursor {
            outer: self.view.end_cursor(),
            outer_end: self.view.end(),
            inner: None,
        }
    }
}
