//! Lockstep traversal of 2 to 4 views, continuing until the longest one ends.
//!
//! Inputs that run out early stay parked at their end and contribute `None`. Backward
//! and random-access traversal need every input to be random-access with a real end
//! cursor: the logical position is the largest per-input position, and stepping back
//! only moves the inputs that are currently at that position.

use crate::{
    cursor::{jump_tier, BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Tier},
    lane::Lane,
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

/// Tuple-of-views zip padded with `None` for the inputs that ended.
#[derive(Debug, Clone)]
pub struct ZipLongest<T> {
    views: T,
}

/// Zips a tuple of 2 to 4 views until all of them are exhausted.
pub fn zip_longest<T>(views: T) -> ZipLongest<T> {
    ZipLongest { views }
}

#[derive(Debug, Clone)]
pub struct ZipLongestCursor<L> {
    lanes: L,
}

macro_rules! impl_zip_longest {
    ($(($V:ident, $C:ident, $S:ident, $idx:tt)),+) => {
        impl<$($C: Cursor, $S: Sentinel<$C>),+> Cursor for ZipLongestCursor<($(Lane<$C, $S>,)+)> {
            type Item = ($(Option<$C::Item>,)+);

            const TIER: Tier = jump_tier(
                Tier::RandomAccess $(.min($C::TIER))+,
                Tier::RandomAccess $(.min(<$S as Sentinel<$C>>::LIMIT))+,
                Tier::Forward,
            );

            fn get(&self) -> Self::Item {
                ($(
                    if self.lanes.$idx.at_end() {
                        None
                    } else {
                        Some(self.lanes.$idx.cur.get())
                    },
                )+)
            }

            fn advance(&mut self) {
                $(
                    if !self.lanes.$idx.at_end() {
                        self.lanes.$idx.cur.advance();
                    }
                )+
            }

            #[inline]
            fn at_end(&self) -> bool {
                true $(&& self.lanes.$idx.at_end())+
            }

            fn remaining(&self) -> usize {
                0usize $(.max(self.lanes.$idx.remaining()))+
            }
        }

        impl<$($C: PartialEq, $S),+> PartialEq for ZipLongestCursor<($(Lane<$C, $S>,)+)> {
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.lanes.$idx.cur == other.lanes.$idx.cur)+
            }
        }

        impl<$($C: ForwardCursor, $S: Sentinel<$C>),+> ForwardCursor
            for ZipLongestCursor<($(Lane<$C, $S>,)+)>
        {
            fn steps_to(&self, other: &Self) -> usize {
                0usize $(.max(self.lanes.$idx.cur.steps_to(&other.lanes.$idx.cur)))+
            }
        }

        impl<$($C: RandomAccessCursor),+> ZipLongestCursor<($(Lane<$C, $C>,)+)> {
            /// Logical position: the position of the input that got furthest.
            fn position(&self) -> usize {
                0usize $(.max(self.lanes.$idx.position()))+
            }
        }

        impl<$($C: RandomAccessCursor),+> BidirectionalCursor for ZipLongestCursor<($(Lane<$C, $C>,)+)> {
            fn retreat(&mut self) {
                let longest = self.position();
                $(
                    if self.lanes.$idx.position() == longest {
                        self.lanes.$idx.cur.retreat();
                    }
                )+
            }
        }

        impl<$($C: RandomAccessCursor),+> RandomAccessCursor for ZipLongestCursor<($(Lane<$C, $C>,)+)> {
            fn advance_by(&mut self, n: isize) {
                if n >= 0 {
                    let n = n as usize;
                    $(
                        let lane = &mut self.lanes.$idx;
                        let left = lane.remaining();
                        if n > left {
                            lane.cur = lane.end.clone();
                        } else {
                            lane.cur.advance_by(n as isize);
                        }
                    )+
                } else {
                    let back = n.unsigned_abs();
                    let longest = self.position();
                    $(
                        let lane = &mut self.lanes.$idx;
                        let pos = lane.position();
                        if pos == longest {
                            lane.cur.advance_by(n);
                        } else if pos + back > longest {
                            lane.cur.advance_by(-((pos + back - longest) as isize));
                        }
                    )+
                }
            }

            fn offset_from(&self, origin: &Self) -> isize {
                self.position() as isize - origin.position() as isize
            }
        }

        impl<$($V: View),+> View for ZipLongest<($($V,)+)> {
            type Cursor = ZipLongestCursor<($(Lane<<$V as View>::Cursor, <$V as View>::Sentinel>,)+)>;
            type Sentinel = End;

            fn begin(&self) -> Self::Cursor {
                ZipLongestCursor {
                    lanes: ($(Lane::new(self.views.$idx.begin(), self.views.$idx.end()),)+),
                }
            }

            fn end(&self) -> End {
                End
            }
        }

        impl<$($V: CommonView),+> CommonView for ZipLongest<($($V,)+)> {
            fn end_cursor(&self) -> Self::Cursor {
                ZipLongestCursor {
                    lanes: ($(
                        Lane::at(
                            self.views.$idx.begin(),
                            self.views.$idx.end_cursor(),
                            self.views.$idx.end(),
                        ),
                    )+),
                }
            }
        }
    };
}

impl_zip_longest!((A, AC, AS, 0), (B, BC, BS, 1));
impl_zip_longest!((A, AC, AS, 0), (B, BC, BS, 1), (X, XC, XS, 2));
impl_zip_longest!((A, AC, AS, 0), (B, BC, BS, 1), (X, XC, XS, 2), (Y, YC, YS, 3));

#[cfg(test)]
mod tests {
    use itertools::{EitherOrBoth, Itertools};

    use super::*;
    use crate::{c_string, source::slice::seq, ViewExt};

    fn owned(item: (Option<&i32>, Option<&i32>)) -> (Option<i32>, Option<i32>) {
        (item.0.copied(), item.1.copied())
    }

    #[test]
    fn test_zip_longest_pads() {
        let a = [1, 2, 3, 4];
        let b = [5, 6];
        let view = zip_longest((seq(&a), seq(&b)));
        let items: Vec<_> = view.iter().map(owned).collect();
        assert_eq!(
            items,
            vec![
                (Some(1), Some(5)),
                (Some(2), Some(6)),
                (Some(3), None),
                (Some(4), None)
            ]
        );
        assert_eq!(view.distance(), 4);
    }

    #[test]
    fn test_zip_longest_matches_itertools() {
        let a = [1, 2];
        let b = [3, 4, 5, 6, 7];
        let expected: Vec<_> = a
            .iter()
            .zip_longest(b.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(x, y) => (Some(*x), Some(*y)),
                EitherOrBoth::Left(x) => (Some(*x), None),
                EitherOrBoth::Right(y) => (None, Some(*y)),
            })
            .collect();
        let actual: Vec<_> = zip_longest((seq(&a), seq(&b))).iter().map(owned).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_zip_longest_reverse() {
        let a = [1, 2, 3, 4, 5];
        let b = [6, 7];
        let view = zip_longest((seq(&a), seq(&b)));
        let mut forward: Vec<_> = view.iter().map(owned).collect();
        forward.reverse();
        let backward: Vec<_> = view.common_iter().rev().map(owned).collect();
        assert_eq!(backward, forward);
    }

    #[test]
    fn test_zip_longest_random_access() {
        let a = [1, 2, 3, 4, 5];
        let b = [6, 7];
        let view = zip_longest((seq(&a), seq(&b)));
        let begin = view.begin();
        let end = view.end_cursor();
        assert_eq!(end.offset_from(&begin), 5);

        let mut cursor = begin.clone();
        cursor.advance_by(3);
        assert_eq!(owned(cursor.get()), (Some(4), None));
        assert_eq!(cursor.offset_from(&begin), 3);
        cursor.advance_by(-2);
        assert_eq!(owned(cursor.get()), (Some(2), Some(7)));
        cursor.advance_by(-1);
        assert!(cursor == begin);
        cursor.advance_by(5);
        assert!(cursor == end);
    }

    #[test]
    fn test_zip_longest_forward_only_lanes() {
        let a = [1u8, 2];
        let view = zip_longest((seq(&a), c_string(c"abc")));
        let items: Vec<(Option<u8>, Option<u8>)> =
            view.iter().map(|(x, c)| (x.copied(), c)).collect();
        assert_eq!(
            items,
            vec![(Some(1), Some(b'a')), (Some(2), Some(b'b')), (None, Some(b'c'))]
        );
        type Slice<'a> = crate::SliceCursor<'a, u8>;
        assert_eq!(
            <ZipLongestCursor<(Lane<Slice<'_>, Slice<'_>>, Lane<crate::CStrCursor<'_>, End>)> as Cursor>::TIER,
            Tier::Forward
        );
    }

    #[test]
    fn test_zip_longest_all_empty() {
        let empty: [i32; 0] = [];
        let view = zip_longest((seq(&empty), seq(&empty), seq(&empty)));
        assert!(view.is_empty());
    }
}
