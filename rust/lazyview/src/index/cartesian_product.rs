//! Cartesian product of 2 to 4 views.
//!
//! The cursor is an odometer over the input cursors with the last dimension varying
//! fastest. Its end is canonical: the first dimension at its end and every other
//! dimension at its begin. When any input is empty the product is empty, and the
//! begin cursor is moved to that canonical end straight away.
//!
//! Random access maps between the linear index and the mixed-radix digits formed by
//! the per-dimension positions.

use crate::{
    cursor::{BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Tier},
    lane::Lane,
    sentinel::{End, Sentinel},
    view::{CommonView, View},
};

/// Product of a tuple of views, yielding tuples of their items.
#[derive(Debug, Clone)]
pub struct CartesianProduct<T> {
    views: T,
}

/// Builds the product of a tuple of 2 to 4 views.
pub fn cartesian_product<T>(views: T) -> CartesianProduct<T> {
    CartesianProduct { views }
}

#[derive(Debug, Clone)]
pub struct CartesianProductCursor<L> {
    dims: L,
}

macro_rules! impl_cartesian_product {
    ($(($V:ident, $C:ident, $S:ident, $idx:tt)),+; rev [$($r:tt),+]) => {
        impl<$($C: ForwardCursor, $S: Sentinel<$C>),+> CartesianProductCursor<($(Lane<$C, $S>,)+)> {
            /// Position in the product order; the end maps to the product size.
            fn linear(&self) -> usize {
                let mut linear = 0;
                $(
                    let dim = &self.dims.$idx;
                    linear = linear * dim.len() + dim.begin.steps_to(&dim.cur);
                )+
                linear
            }

            fn size(&self) -> usize {
                1 $(* self.dims.$idx.len())+
            }
        }

        impl<$($C: ForwardCursor, $S: Sentinel<$C>),+> Cursor
            for CartesianProductCursor<($(Lane<$C, $S>,)+)>
        {
            type Item = ($($C::Item,)+);

            const TIER: Tier = Tier::RandomAccess $(.min($C::TIER).min(<$S as Sentinel<$C>>::LIMIT))+;

            #[inline]
            fn get(&self) -> Self::Item {
                ($(self.dims.$idx.cur.get(),)+)
            }

            fn advance(&mut self) {
                'carry: {
                    $(
                        self.dims.$r.cur.advance();
                        if $r == 0 || !self.dims.$r.at_end() {
                            break 'carry;
                        }
                        self.dims.$r.rewind();
                    )+
                }
            }

            #[inline]
            fn at_end(&self) -> bool {
                self.dims.0.at_end()
            }

            fn remaining(&self) -> usize {
                self.size() - self.linear()
            }
        }

        impl<$($C: PartialEq, $S),+> PartialEq for CartesianProductCursor<($(Lane<$C, $S>,)+)> {
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.dims.$idx.cur == other.dims.$idx.cur)+
            }
        }

        impl<$($C: ForwardCursor, $S: Sentinel<$C>),+> ForwardCursor
            for CartesianProductCursor<($(Lane<$C, $S>,)+)>
        {
            fn steps_to(&self, other: &Self) -> usize {
                other.linear() - self.linear()
            }
        }

        impl<$($C: BidirectionalCursor),+> BidirectionalCursor
            for CartesianProductCursor<($(Lane<$C, $C>,)+)>
        {
            fn retreat(&mut self) {
                'borrow: {
                    $(
                        if $r == 0 || self.dims.$r.cur != self.dims.$r.begin {
                            self.dims.$r.cur.retreat();
                            break 'borrow;
                        }
                        self.dims.$r.cur = self.dims.$r.end.clone();
                        self.dims.$r.cur.retreat();
                    )+
                }
            }
        }

        impl<$($C: RandomAccessCursor),+> RandomAccessCursor
            for CartesianProductCursor<($(Lane<$C, $C>,)+)>
        {
            #[allow(unused_assignments)]
            fn advance_by(&mut self, n: isize) {
                let sizes = ($(self.dims.$idx.size(),)+);
                if false $(|| sizes.$idx == 0)+ {
                    return;
                }
                let mut rest = self.linear().wrapping_add_signed(n);
                $(
                    let pos = if $r == 0 {
                        rest
                    } else {
                        let digit = rest % sizes.$r;
                        rest /= sizes.$r;
                        digit
                    };
                    self.dims.$r.seek(pos);
                )+
            }

            fn offset_from(&self, origin: &Self) -> isize {
                self.linear() as isize - origin.linear() as isize
            }
        }

        impl<$($V: View),+> View for CartesianProduct<($($V,)+)>
        where
            $(<$V as View>::Cursor: ForwardCursor),+
        {
            type Cursor = CartesianProductCursor<($(Lane<<$V as View>::Cursor, <$V as View>::Sentinel>,)+)>;
            type Sentinel = End;

            fn begin(&self) -> Self::Cursor {
                let mut dims = ($(Lane::new(self.views.$idx.begin(), self.views.$idx.end()),)+);
                if false $(|| dims.$idx.at_end())+ {
                    let n = dims.0.remaining();
                    dims.0.cur.advance_n(n);
                }
                log::trace!("cartesian_product: begin over {} dimensions", [$($idx),+].len());
                CartesianProductCursor { dims }
            }

            fn end(&self) -> End {
                End
            }
        }

        impl<$($V: CommonView),+> CommonView for CartesianProduct<($($V,)+)>
        where
            $(<$V as View>::Cursor: ForwardCursor),+
        {
            fn end_cursor(&self) -> Self::Cursor {
                let mut cursor = self.begin();
                cursor.dims.0.cur = self.views.0.end_cursor();
                cursor
            }
        }
    };
}

impl_cartesian_product!((A, AC, AS, 0), (B, BC, BS, 1); rev [1, 0]);
impl_cartesian_product!((A, AC, AS, 0), (B, BC, BS, 1), (X, XC, XS, 2); rev [2, 1, 0]);
impl_cartesian_product!(
    (A, AC, AS, 0), (B, BC, BS, 1), (X, XC, XS, 2), (Y, YC, YS, 3);
    rev [3, 2, 1, 0]
);

#[cfg(test)]
mod tests {
    use itertools::iproduct;

    use super::*;
    use crate::{source::slice::seq, ViewExt};

    #[test]
    fn test_product_of_two() {
        let a = [1, 2, 3];
        let b = ['x', 'y'];
        let view = cartesian_product((seq(&a), seq(&b)));
        let actual: Vec<(i32, char)> = view.iter().map(|(x, y)| (*x, *y)).collect();
        let expected: Vec<(i32, char)> = iproduct!(a, b).collect();
        assert_eq!(actual, expected);
        assert_eq!(view.distance(), 6);
    }

    #[test]
    fn test_product_of_three() {
        let a = [1, 2];
        let b = [3, 4, 5];
        let c = [6, 7];
        let view = cartesian_product((seq(&a), seq(&b), seq(&c)));
        let actual: Vec<(i32, i32, i32)> = view.iter().map(|(x, y, z)| (*x, *y, *z)).collect();
        let expected: Vec<(i32, i32, i32)> = iproduct!(a, b, c).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_product_with_empty_dimension() {
        let a = [1, 2];
        let empty: [i32; 0] = [];
        let c = [3];
        let view = cartesian_product((seq(&a), seq(&empty), seq(&c)));
        assert!(view.is_empty());
        assert!(view.begin() == view.end_cursor());
        let view = cartesian_product((seq(&empty), seq(&a)));
        assert_eq!(view.iter().count(), 0);
    }

    #[test]
    fn test_product_reverse() {
        let a = [1, 2, 3];
        let b = [4, 5];
        let c = [6, 7];
        let d = [8];
        let view = cartesian_product((seq(&a), seq(&b), seq(&c), seq(&d)));
        let mut forward: Vec<_> = view.iter().collect();
        forward.reverse();
        let backward: Vec<_> = view.common_iter().rev().collect();
        assert_eq!(backward, forward);
    }

    #[test]
    fn test_product_random_access() {
        let a = [0, 1, 2];
        let b = [0, 1, 2, 3];
        let view = cartesian_product((seq(&a), seq(&b)));
        let begin = view.begin();
        for k in 0..12 {
            let mut cursor = begin.clone();
            cursor.advance_by(k);
            let (x, y) = cursor.get();
            assert_eq!((*x * 4 + *y) as isize, k);
            assert_eq!(cursor.offset_from(&begin), k);
        }
        let mut cursor = begin.clone();
        cursor.advance_by(12);
        assert!(cursor == view.end_cursor());
        cursor.advance_by(-7);
        assert_eq!(cursor.get(), (&1, &1));
    }

    #[test]
    fn test_product_tier() {
        type Slice<'a> = crate::SliceCursor<'a, i32>;
        type Bytes<'a> = crate::CStrCursor<'a>;
        assert_eq!(
            <CartesianProductCursor<(Lane<Slice<'_>, Slice<'_>>, Lane<Slice<'_>, Slice<'_>>)> as Cursor>::TIER,
            Tier::RandomAccess
        );
        assert_eq!(
            <CartesianProductCursor<(Lane<Slice<'_>, Slice<'_>>, Lane<Bytes<'_>, End>)> as Cursor>::TIER,
            Tier::Forward
        );
    }
}
