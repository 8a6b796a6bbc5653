//! Single-pass sources backed by a standard iterator.

use crate::{
    cursor::{Cursor, Tier},
    sentinel::End,
    view::View,
};

/// Single-pass cursor that pulls from a cloned iterator and buffers the current item.
#[derive(Debug, Clone)]
pub struct IterCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    fn new(mut iter: I) -> IterCursor<I> {
        let current = iter.next();
        IterCursor { iter, current }
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;

    const TIER: Tier = Tier::SinglePass;

    fn get(&self) -> I::Item {
        self.current
            .clone()
            .expect("get() called on an exhausted cursor")
    }

    fn advance(&mut self) {
        self.current = self.iter.next();
    }

    fn at_end(&self) -> bool {
        self.current.is_none()
    }
}

/// View over a clonable iterator. Each traversal starts from a fresh clone, but the
/// cursors it hands out are single-pass.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

/// Wraps a clonable iterator as a single-pass view.
pub fn iter_source<I>(iter: I) -> IterSource<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    IterSource {
        iter: iter.into_iter(),
    }
}

impl<I> View for IterSource<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Cursor = IterCursor<I>;
    type Sentinel = End;

    fn begin(&self) -> IterCursor<I> {
        IterCursor::new(self.iter.clone())
    }

    fn end(&self) -> End {
        End
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ViewExt;

    #[test]
    fn test_iter_source_walk() {
        let view = iter_source((1..=4).map(|x| x * 10));
        assert_eq!(view.to::<Vec<_>>(), vec![10, 20, 30, 40]);
        // Each traversal restarts from the beginning.
        assert_eq!(view.distance(), 4);
    }

    #[test]
    fn test_iter_source_tier() {
        assert_eq!(
            <IterCursor<std::ops::Range<u32>> as Cursor>::TIER,
            Tier::SinglePass
        );
    }

    #[test]
    fn test_iter_source_empty() {
        let view = iter_source(std::iter::empty::<u8>());
        assert!(view.is_empty());
    }
}
