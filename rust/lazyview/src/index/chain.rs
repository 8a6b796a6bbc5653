//! Concatenation of 2 to 4 views of possibly different types.
//!
//! The inputs only have to agree on their item type, so a slice can be followed by a
//! filtered slice or a C string. Each lane keeps its own cursor: lanes before the
//! active one rest at their end and lanes after it rest at their begin, which makes
//! `remaining`, `steps_to` and `offset_from` plain sums over the lanes.
//!
//! Like [`Concatenate`](crate::Concatenate), the cursor never rests at the end of a
//! lane other than the last one.

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Tier},
    lane::Lane,
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

/// Tuple-of-views concatenation.
#[derive(Debug, Clone)]
pub struct Chain<T> {
    views: T,
}

/// Concatenates a tuple of 2 to 4 views that yield the same item type.
pub fn chain<T>(views: T) -> Chain<T> {
    Chain { views }
}

#[derive(Debug, Clone)]
pub struct ChainCursor<L> {
    lanes: L,
    active: usize,
}

macro_rules! impl_chain {
    (($AV:ident, $AC:ident, $AS:ident) $(, ($V:ident, $C:ident, $S:ident, $idx:tt))+) => {
        impl<$AC, $AS, $($C, $S),+> ChainCursor<(Lane<$AC, $AS>, $(Lane<$C, $S>,)+)>
        where
            $AC: Cursor,
            $AS: Sentinel<$AC>,
            $($C: Cursor<Item = $AC::Item>, $S: Sentinel<$C>,)+
        {
            const LAST: usize = [$($idx),+].len();

            fn lane_at_end(&self, lane: usize) -> bool {
                match lane {
                    0 => self.lanes.0.at_end(),
                    $($idx => self.lanes.$idx.at_end(),)+
                    _ => unreachable!("no lane {lane}"),
                }
            }

            fn lane_remaining(&self, lane: usize) -> usize {
                match lane {
                    0 => self.lanes.0.remaining(),
                    $($idx => self.lanes.$idx.remaining(),)+
                    _ => unreachable!("no lane {lane}"),
                }
            }

            fn lane_advance_n(&mut self, lane: usize, n: usize) {
                match lane {
                    0 => self.lanes.0.cur.advance_n(n),
                    $($idx => self.lanes.$idx.cur.advance_n(n),)+
                    _ => unreachable!("no lane {lane}"),
                }
            }

            /// Moves off exhausted lanes until a non-empty lane or the last lane.
            fn settle(&mut self) {
                while self.active < Self::LAST && self.lane_at_end(self.active) {
                    self.active += 1;
                }
            }
        }

        impl<$AC, $AS, $($C, $S),+> Cursor for ChainCursor<(Lane<$AC, $AS>, $(Lane<$C, $S>,)+)>
        where
            $AC: Cursor,
            $AS: Sentinel<$AC>,
            $($C: Cursor<Item = $AC::Item>, $S: Sentinel<$C>,)+
        {
            type Item = $AC::Item;

            const TIER: Tier = $AC::TIER $(.min($C::TIER))+;

            fn get(&self) -> Self::Item {
                match self.active {
                    0 => self.lanes.0.cur.get(),
                    $($idx => self.lanes.$idx.cur.get(),)+
                    _ => unreachable!("no lane {}", self.active),
                }
            }

            fn advance(&mut self) {
                match self.active {
                    0 => self.lanes.0.cur.advance(),
                    $($idx => self.lanes.$idx.cur.advance(),)+
                    _ => unreachable!("no lane {}", self.active),
                }
                self.settle();
            }

            #[inline]
            fn at_end(&self) -> bool {
                self.active == Self::LAST && self.lane_at_end(Self::LAST)
            }

            fn remaining(&self) -> usize {
                self.lanes.0.remaining() $(+ self.lanes.$idx.remaining())+
            }

            fn advance_n(&mut self, mut n: usize) {
                loop {
                    let left = self.lane_remaining(self.active);
                    if n < left || self.active == Self::LAST {
                        self.lane_advance_n(self.active, n);
                        break;
                    }
                    self.lane_advance_n(self.active, left);
                    n -= left;
                    self.active += 1;
                }
                self.settle();
            }
        }

        impl<$AC: PartialEq, $AS, $($C: PartialEq, $S),+> PartialEq
            for ChainCursor<(Lane<$AC, $AS>, $(Lane<$C, $S>,)+)>
        {
            fn eq(&self, other: &Self) -> bool {
                self.active == other.active
                    && self.lanes.0.cur == other.lanes.0.cur
                    $(&& self.lanes.$idx.cur == other.lanes.$idx.cur)+
            }
        }

        impl<$AC, $AS, $($C, $S),+> ForwardCursor for ChainCursor<(Lane<$AC, $AS>, $(Lane<$C, $S>,)+)>
        where
            $AC: ForwardCursor,
            $AS: Sentinel<$AC>,
            $($C: ForwardCursor<Item = $AC::Item>, $S: Sentinel<$C>,)+
        {
            fn steps_to(&self, other: &Self) -> usize {
                self.lanes.0.cur.steps_to(&other.lanes.0.cur)
                    $(+ self.lanes.$idx.cur.steps_to(&other.lanes.$idx.cur))+
            }
        }

        impl<$AC, $AS, $($C, $S),+> BidirectionalCursor
            for ChainCursor<(Lane<$AC, $AS>, $(Lane<$C, $S>,)+)>
        where
            $AC: BidirectionalCursor,
            $AS: Sentinel<$AC>,
            $($C: BidirectionalCursor<Item = $AC::Item>, $S: Sentinel<$C>,)+
        {
            fn retreat(&mut self) {
                loop {
                    let at_begin = match self.active {
                        0 => self.lanes.0.cur == self.lanes.0.begin,
                        $($idx => self.lanes.$idx.cur == self.lanes.$idx.begin,)+
                        _ => unreachable!("no lane {}", self.active),
                    };
                    if !at_begin {
                        break;
                    }
                    debug_assert!(self.active > 0, "retreat past the first element");
                    self.active -= 1;
                }
                match self.active {
                    0 => self.lanes.0.cur.retreat(),
                    $($idx => self.lanes.$idx.cur.retreat(),)+
                    _ => unreachable!("no lane {}", self.active),
                }
            }
        }

        impl<$AC, $AS, $($C, $S),+> RandomAccessCursor
            for ChainCursor<(Lane<$AC, $AS>, $(Lane<$C, $S>,)+)>
        where
            $AC: RandomAccessCursor,
            $AS: Sentinel<$AC>,
            $($C: RandomAccessCursor<Item = $AC::Item>, $S: Sentinel<$C>,)+
        {
            fn advance_by(&mut self, n: isize) {
                if n >= 0 {
                    self.advance_n(n as usize);
                    return;
                }
                let mut back = n.unsigned_abs();
                loop {
                    let before = match self.active {
                        0 => self.lanes.0.cur.offset_from(&self.lanes.0.begin),
                        $($idx => self.lanes.$idx.cur.offset_from(&self.lanes.$idx.begin),)+
                        _ => unreachable!("no lane {}", self.active),
                    } as usize;
                    let step = back.min(before) as isize;
                    match self.active {
                        0 => self.lanes.0.cur.advance_by(-step),
                        $($idx => self.lanes.$idx.cur.advance_by(-step),)+
                        _ => unreachable!("no lane {}", self.active),
                    }
                    if back <= before {
                        return;
                    }
                    back -= before;
                    debug_assert!(self.active > 0, "retreat past the first element");
                    self.active -= 1;
                }
            }

            fn offset_from(&self, origin: &Self) -> isize {
                self.lanes.0.cur.offset_from(&origin.lanes.0.cur)
                    $(+ self.lanes.$idx.cur.offset_from(&origin.lanes.$idx.cur))+
            }
        }

        impl<$AV: View, $($V: View),+> View for Chain<($AV, $($V,)+)>
        where
            $(<$V as View>::Cursor: Cursor<Item = <<$AV as View>::Cursor as Cursor>::Item>,)+
        {
            type Cursor = ChainCursor<(
                Lane<<$AV as View>::Cursor, <$AV as View>::Sentinel>,
                $(Lane<<$V as View>::Cursor, <$V as View>::Sentinel>,)+
            )>;
            type Sentinel = End;

            fn begin(&self) -> Self::Cursor {
                let mut cursor = ChainCursor {
                    lanes: (
                        Lane::new(self.views.0.begin(), self.views.0.end()),
                        $(Lane::new(self.views.$idx.begin(), self.views.$idx.end()),)+
                    ),
                    active: 0,
                };
                cursor.settle();
                cursor
            }

            fn end(&self) -> End {
                End
            }
        }

        impl<$AV: CommonView, $($V: CommonView),+> CommonView for Chain<($AV, $($V,)+)>
        where
            $(<$V as View>::Cursor: Cursor<Item = <<$AV as View>::Cursor as Cursor>::Item>,)+
        {
            /// Every lane at its end cursor, the last one active.
            fn end_cursor(&self) -> Self::Cursor {
                ChainCursor {
                    lanes: (
                        Lane::at(self.views.0.begin(), self.views.0.end_cursor(), self.views.0.end()),
                        $(Lane::at(
                            self.views.$idx.begin(),
                            self.views.$idx.end_cursor(),
                            self.views.$idx.end(),
                        ),)+
                    ),
                    active: [$($idx),+].len(),
                }
            }
        }
    };
}

impl_chain!((A, AC, AS), (B, BC, BS, 1));
impl_chain!((A, AC, AS), (B, BC, BS, 1), (X, XC, XS, 2));
impl_chain!((A, AC, AS), (B, BC, BS, 1), (X, XC, XS, 2), (Y, YC, YS, 3));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{c_string, iter_source, source::slice::seq, ViewExt};

    #[test]
    fn test_chain_mixed_views() {
        let a = [1, 2];
        let b = [3, 4, 5, 6];
        let view = chain((seq(&a), seq(&b).filter(|x: &&i32| **x % 2 == 0)));
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![1, 2, 4, 6]);
        assert_eq!(view.distance(), 4);
        assert_eq!(
            view.common_iter().rev().copied().collect::<Vec<_>>(),
            vec![6, 4, 2, 1]
        );
    }

    #[test]
    fn test_chain_slice_and_c_string() {
        let head = b"key=".as_slice();
        let view = chain((seq(head).choose(|b: &u8| Some(*b)), c_string(c"value")));
        let text: String = view.iter().map(char::from).collect();
        assert_eq!(text, "key=value");
    }

    #[test]
    fn test_chain_skips_empty_lanes() {
        let empty: [i32; 0] = [];
        let a = [1];
        let b = [2, 3];
        let view = chain((seq(&empty), seq(&a), seq(&empty), seq(&b)));
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(view.begin().remaining(), 3);
        assert!(chain((seq(&empty), seq(&empty))).is_empty());
    }

    #[test]
    fn test_chain_random_access() {
        let a = [0, 1, 2];
        let empty: [i32; 0] = [];
        let b = [3, 4, 5];
        let view = chain((seq(&a), seq(&empty), seq(&b).exclude(2, 3).unwrap()));
        let begin = view.begin();
        for k in 0..5 {
            let mut cursor = begin.clone();
            cursor.advance_by(k);
            assert_eq!(*cursor.get(), k as i32);
            assert_eq!(cursor.offset_from(&begin), k);
        }
        let mut cursor = view.end_cursor();
        assert_eq!(cursor.offset_from(&begin), 5);
        cursor.advance_by(-5);
        assert!(cursor == begin);
    }

    #[test]
    fn test_chain_tier() {
        type Slice<'a> = crate::SliceCursor<'a, i32>;
        assert_eq!(
            <ChainCursor<(Lane<Slice<'_>, Slice<'_>>, Lane<Slice<'_>, Slice<'_>>)> as Cursor>::TIER,
            Tier::RandomAccess
        );
        let a = [1, 2];
        let view = chain((seq(&a), iter_source(vec![&3])));
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
