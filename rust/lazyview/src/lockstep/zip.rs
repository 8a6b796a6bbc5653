//! Lockstep traversal of 2 to 4 views, stopping at the shortest.

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Tier},
    lane::Lane,
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

/// Tuple-of-views zip. Yields tuples of items until any input runs out.
#[derive(Debug, Clone)]
pub struct Zip<T> {
    views: T,
}

/// Zips a tuple of 2 to 4 views.
pub fn zip<T>(views: T) -> Zip<T> {
    Zip { views }
}

#[derive(Debug, Clone)]
pub struct ZipCursor<L> {
    lanes: L,
}

macro_rules! impl_zip {
    ($(($V:ident, $C:ident, $S:ident, $idx:tt)),+) => {
        impl<$($C: Cursor, $S: Sentinel<$C>),+> Cursor for ZipCursor<($(Lane<$C, $S>,)+)> {
            type Item = ($($C::Item,)+);

            const TIER: Tier = Tier::RandomAccess $(.min($C::TIER))+;

            #[inline]
            fn get(&self) -> Self::Item {
                ($(self.lanes.$idx.cur.get(),)+)
            }

            #[inline]
            fn advance(&mut self) {
                $(self.lanes.$idx.cur.advance();)+
            }

            #[inline]
            fn at_end(&self) -> bool {
                false $(|| self.lanes.$idx.at_end())+
            }

            fn remaining(&self) -> usize {
                usize::MAX $(.min(self.lanes.$idx.remaining()))+
            }

            fn advance_n(&mut self, n: usize) {
                $(self.lanes.$idx.cur.advance_n(n);)+
            }
        }

        impl<$($C: PartialEq, $S),+> PartialEq for ZipCursor<($(Lane<$C, $S>,)+)> {
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.lanes.$idx.cur == other.lanes.$idx.cur)+
            }
        }

        impl<$($C: ForwardCursor, $S: Sentinel<$C>),+> ForwardCursor for ZipCursor<($(Lane<$C, $S>,)+)> {
            fn steps_to(&self, other: &Self) -> usize {
                usize::MAX $(.min(self.lanes.$idx.cur.steps_to(&other.lanes.$idx.cur)))+
            }
        }

        impl<$($C: BidirectionalCursor, $S: Sentinel<$C>),+> BidirectionalCursor
            for ZipCursor<($(Lane<$C, $S>,)+)>
        {
            fn retreat(&mut self) {
                $(self.lanes.$idx.cur.retreat();)+
            }
        }

        impl<$($C: RandomAccessCursor, $S: Sentinel<$C>),+> RandomAccessCursor
            for ZipCursor<($(Lane<$C, $S>,)+)>
        {
            fn advance_by(&mut self, n: isize) {
                $(self.lanes.$idx.cur.advance_by(n);)+
            }

            fn offset_from(&self, origin: &Self) -> isize {
                isize::MAX $(.min(self.lanes.$idx.cur.offset_from(&origin.lanes.$idx.cur)))+
            }
        }

        impl<$($V: View),+> View for Zip<($($V,)+)> {
            type Cursor = ZipCursor<($(Lane<<$V as View>::Cursor, <$V as View>::Sentinel>,)+)>;
            type Sentinel = End;

            fn begin(&self) -> Self::Cursor {
                ZipCursor {
                    lanes: ($(Lane::new(self.views.$idx.begin(), self.views.$idx.end()),)+),
                }
            }

            fn end(&self) -> End {
                End
            }
        }

        impl<$($V: CommonView),+> CommonView for Zip<($($V,)+)> {
            /// The begin cursor advanced by the length of the shortest input.
            fn end_cursor(&self) -> Self::Cursor {
                let mut cursor = self.begin();
                let n = cursor.remaining();
                cursor.advance_n(n);
                cursor
            }
        }
    };
}

impl_zip!((A, AC, AS, 0), (B, BC, BS, 1));
impl_zip!((A, AC, AS, 0), (B, BC, BS, 1), (X, XC, XS, 2));
impl_zip!((A, AC, AS, 0), (B, BC, BS, 1), (X, XC, XS, 2), (Y, YC, YS, 3));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{c_string, iter_source, source::slice::seq, ViewExt};

    #[test]
    fn test_zip_stops_at_shortest() {
        let a = [1, 2, 3, 4];
        let b = [5, 6];
        let view = zip((seq(&a), seq(&b)));
        let pairs: Vec<(i32, i32)> = view.iter().map(|(x, y)| (*x, *y)).collect();
        assert_eq!(pairs, vec![(1, 5), (2, 6)]);
        assert_eq!(view.distance(), 2);
    }

    #[test]
    fn test_zip_three_heterogeneous() {
        let a = [1, 2, 3];
        let names = ["one", "two", "three"];
        let view = zip((seq(&a), seq(&names), c_string(c"xyz")));
        let items: Vec<(i32, &str, u8)> = view.iter().map(|(x, n, c)| (*x, *n, c)).collect();
        assert_eq!(items, vec![(1, "one", b'x'), (2, "two", b'y'), (3, "three", b'z')]);
    }

    #[test]
    fn test_zip_reverse_from_common_end() {
        let a = [1, 2, 3, 4, 5];
        let b = [10, 20, 30];
        let view = zip((seq(&a), seq(&b)));
        let backward: Vec<(i32, i32)> = view.common_iter().rev().map(|(x, y)| (*x, *y)).collect();
        assert_eq!(backward, vec![(3, 30), (2, 20), (1, 10)]);
    }

    #[test]
    fn test_zip_random_access() {
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7, 8, 9];
        let view = zip((seq(&a), seq(&b)));
        let mut cursor = view.begin();
        cursor.advance_by(3);
        assert_eq!(cursor.get(), (&4, &8));
        assert_eq!(cursor.offset_from(&view.begin()), 3);
        cursor.advance_by(1);
        assert!(cursor == view.end_cursor());
    }

    #[test]
    fn test_zip_tier_is_weakest_lane() {
        type Slice<'a> = crate::SliceCursor<'a, i32>;
        type Bytes<'a> = crate::CStrCursor<'a>;
        assert_eq!(
            <ZipCursor<(Lane<Slice<'_>, Slice<'_>>, Lane<Bytes<'_>, End>)> as Cursor>::TIER,
            Tier::Forward
        );
        assert_eq!(
            <ZipCursor<(Lane<Slice<'_>, Slice<'_>>, Lane<Slice<'_>, Slice<'_>>)> as Cursor>::TIER,
            Tier::RandomAccess
        );
    }

    #[test]
    fn test_zip_with_single_pass_lane() {
        let a = [1, 2, 3];
        let view = zip((seq(&a), iter_source(10..)));
        let items: Vec<(i32, i32)> = view.iter().map(|(x, y)| (*x, y)).collect();
        assert_eq!(items, vec![(1, 10), (2, 11), (3, 12)]);
    }
}
