//! Strided selection: every `step`-th element, starting at `offset`.

use lazyview_common::{verify_arg, Result};

use crate::{
    cursor::{jump_tier, BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

#[derive(Debug, Clone)]
pub struct TakeEvery<V> {
    view: V,
    step: usize,
    offset: usize,
}

impl<V: View> TakeEvery<V> {
    /// Fails when `step` is zero.
    pub fn new(view: V, step: usize, offset: usize) -> Result<TakeEvery<V>> {
        verify_arg!(step, step != 0);
        Ok(TakeEvery { view, step, offset })
    }
}

/// Selects the elements at indices `offset`, `offset + step`, `offset + 2 * step`, ...
pub fn take_every<V: View>(view: V, step: usize, offset: usize) -> Result<TakeEvery<V>> {
    TakeEvery::new(view, step, offset)
}

#[derive(Debug, Clone)]
pub struct TakeEveryCursor<C, S> {
    begin: C,
    cur: C,
    end: S,
    step: usize,
    offset: usize,
}

impl<C: RandomAccessCursor> TakeEveryCursor<C, C> {
    fn len(&self) -> usize {
        self.end.offset_from(&self.begin) as usize
    }

    fn count(&self) -> usize {
        self.len().saturating_sub(self.offset).div_ceil(self.step)
    }

    fn index(&self) -> usize {
        let pos = self.cur.offset_from(&self.begin) as usize;
        if pos >= self.len() {
            self.count()
        } else {
            (pos - self.offset) / self.step
        }
    }
}

impl<C: Cursor, S: Sentinel<C>> Cursor for TakeEveryCursor<C, S> {
    type Item = C::Item;

    const TIER: Tier = jump_tier(C::TIER, S::LIMIT, Tier::Forward);

    #[inline]
    fn get(&self) -> C::Item {
        self.cur.get()
    }

    #[inline]
    fn advance(&mut self) {
        self.cur.advance_within(self.step, &self.end);
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.end.is_end(&self.cur)
    }

    fn remaining(&self) -> usize {
        self.end.distance_from(&self.cur).div_ceil(self.step)
    }
}

impl<C: PartialEq, S> PartialEq for TakeEveryCursor<C, S> {
    fn eq(&self, other: &Self) -> bool {
        self.cur == other.cur
    }
}

impl<C: ForwardCursor, S: Sentinel<C>> ForwardCursor for TakeEveryCursor<C, S> {
    fn steps_to(&self, other: &Self) -> usize {
        self.cur.steps_to(&other.cur).div_ceil(self.step)
    }
}

impl<C: RandomAccessCursor> BidirectionalCursor for TakeEveryCursor<C, C> {
    fn retreat(&mut self) {
        self.advance_by(-1);
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for TakeEveryCursor<C, C> {
    fn advance_by(&mut self, n: isize) {
        let target = self.index().wrapping_add_signed(n);
        let pos = if target >= self.count() {
            self.len()
        } else {
            self.offset + target * self.step
        };
        self.cur = self.begin.clone();
        self.cur.advance_by(pos as isize);
    }

    fn offset_from(&self, origin: &Self) -> isize {
        self.index() as isize - origin.index() as isize
    }
}

impl<V: View> View for TakeEvery<V> {
    type Cursor = TakeEveryCursor<V::Cursor, V::Sentinel>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        let begin = self.view.begin();
        let end = self.view.end();
        let mut cur = begin.clone();
        cur.advance_within(self.offset, &end);
        TakeEveryCursor {
            begin,
            cur,
            end,
            step: self.step,
            offset: self.offset,
        }
    }

    fn end(&self) -> End {
        End
    }
}

impl<V: CommonView> CommonView for TakeEvery<V> {
    fn end_cursor(&self) -> Self::Cursor {
        TakeEveryCursor {
            begin: self.view.begin(),
            cur: self.view.end_cursor(),
            end: self.view.end(),
            step: self.step,
            offset: self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{source::slice::seq, ViewExt};

    #[test]
    fn test_take_every() {
        let data: Vec<i32> = (0..10).collect();
        let view = seq(&data).take_every(3, 0).unwrap();
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![0, 3, 6, 9]);
        let view = seq(&data).take_every(4, 1).unwrap();
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![1, 5, 9]);
        assert_eq!(view.distance(), 3);
    }

    #[test]
    fn test_take_every_offset_past_end() {
        let data = [1, 2, 3];
        let view = seq(&data).take_every(2, 5).unwrap();
        assert!(view.is_empty());
        assert!(view.begin() == view.end_cursor());
    }

    #[test]
    fn test_take_every_rejects_zero_step() {
        let data = [1, 2, 3];
        assert!(seq(&data).take_every(0, 0).unwrap_err().is_invalid_arg("step"));
    }

    #[test]
    fn test_take_every_random_access() {
        let data: Vec<i32> = (0..11).collect();
        let view = seq(&data).take_every(3, 1).unwrap();
        let begin = view.begin();
        let end = view.end_cursor();
        assert_eq!(end.offset_from(&begin), 4);
        let mut cursor = end.clone();
        cursor.advance_by(-1);
        assert_eq!(*cursor.get(), 10);
        cursor.advance_by(-2);
        assert_eq!(*cursor.get(), 4);
        cursor.advance_by(2);
        assert_eq!(*cursor.get(), 10);
        cursor.advance_by(1);
        assert!(cursor == end);
        assert_eq!(
            view.common_iter().rev().copied().collect::<Vec<_>>(),
            vec![10, 7, 4, 1]
        );
    }
}
