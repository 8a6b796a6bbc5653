use std::{borrow::Borrow, cmp::Ordering};

use lazyview_common::Result;

use crate::{
    cursor::{Cursor, ForwardCursor},
    filtering::{
        choose::{choose, Choose},
        except::{except_by, natural, Except, Natural},
        filter::{filter, Filter},
        join_where::{join_where, JoinWhere},
        take_while::{skip_while, take_while, SkipWhile, TakeWhile},
    },
    index::{
        chain::{chain, Chain},
        exclude::Exclude,
        rotate::Rotate,
        take::{skip, slice, take, Skip, Take},
        take_every::TakeEvery,
    },
    lockstep::{
        zip::{zip, Zip},
        zip_longest::{zip_longest, ZipLongest},
    },
    segment::{
        chunk_if::{chunk_if, ChunkIf},
        chunks::Chunks,
        flatten::{flatten, Flatten},
        group_by::{group_by, GroupBy},
        split::Split,
    },
    scan::{exclusive_scan, inclusive_scan, Scan},
    sentinel::Sentinel,
    view::{CommonView, View, Walk},
};

/// Item type of the cursors of view `V`.
pub type ItemOf<V> = <<V as View>::Cursor as Cursor>::Item;

/// Extension methods available on every [`View`]: traversal helpers plus one method
/// per adaptor. Each adaptor method consumes the view; views are cheap to clone.
pub trait ViewExt: View + Sized {
    /// Iterates the view from begin to end.
    fn iter(&self) -> Walk<Self::Cursor, Self::Sentinel> {
        Walk::new(self.begin(), self.end())
    }

    /// Iterates the view between its begin and its end cursor. The iterator is
    /// double-ended when the cursor is bidirectional.
    fn common_iter(&self) -> Walk<Self::Cursor, Self::Cursor>
    where
        Self: CommonView,
    {
        Walk::new(self.begin(), self.end_cursor())
    }

    /// Number of elements in the view.
    fn distance(&self) -> usize {
        self.end().distance_from(&self.begin())
    }

    fn is_empty(&self) -> bool {
        self.end().is_end(&self.begin())
    }

    /// Collects the view into any container.
    fn to<B>(&self) -> B
    where
        B: FromIterator<ItemOf<Self>>,
    {
        self.iter().collect()
    }

    /// Follows this view with `other`, which may be of a different type as long as
    /// it yields the same items. See [`chain`](crate::chain) for more inputs.
    fn concat<W>(self, other: W) -> Chain<(Self, W)>
    where
        W: View,
        W::Cursor: Cursor<Item = ItemOf<Self>>,
    {
        chain((self, other))
    }

    fn exclude(self, from: usize, to: usize) -> Result<Exclude<Self>> {
        Exclude::new(self, from, to)
    }

    fn rotate(self, pivot: usize) -> Result<Rotate<Self>>
    where
        Self::Cursor: ForwardCursor,
    {
        Rotate::new(self, pivot)
    }

    fn take_every(self, step: usize, offset: usize) -> Result<TakeEvery<Self>> {
        TakeEvery::new(self, step, offset)
    }

    /// The first `n` elements, or all of them when there are fewer.
    fn take(self, n: usize) -> Take<Self> {
        take(self, n)
    }

    /// Everything after the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self> {
        skip(self, n)
    }

    /// The elements at indices `from..to`, clamped to the length of the view.
    fn slice(self, from: usize, to: usize) -> Result<Take<Skip<Self>>> {
        slice(self, from, to)
    }

    /// Removes one level of nesting. Chain one call per level to reach the leaf
    /// elements of deeper nesting.
    fn flatten(self) -> Flatten<Self> {
        flatten(self)
    }

    fn chunks(self, size: usize) -> Result<Chunks<Self>> {
        Chunks::new(self, size)
    }

    fn chunk_if<P>(self, predicate: P) -> ChunkIf<Self, P>
    where
        P: Fn(&ItemOf<Self>) -> bool,
    {
        chunk_if(self, predicate)
    }

    fn group_by<F>(self, eq: F) -> GroupBy<Self, F>
    where
        F: Fn(&ItemOf<Self>, &ItemOf<Self>) -> bool,
    {
        group_by(self, eq)
    }

    fn split<T>(self, delimiter: &[T]) -> Result<Split<'_, Self, T>> {
        Split::new(self, delimiter)
    }

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&ItemOf<Self>) -> bool,
    {
        filter(self, predicate)
    }

    fn choose<F, T>(self, chooser: F) -> Choose<Self, F, T>
    where
        F: Fn(ItemOf<Self>) -> Option<T>,
    {
        choose(self, chooser)
    }

    /// Elements up to, not including, the first one for which `predicate` fails.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: Fn(&ItemOf<Self>) -> bool,
    {
        take_while(self, predicate)
    }

    /// Elements from the first one for which `predicate` fails onward.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: Fn(&ItemOf<Self>) -> bool,
    {
        skip_while(self, predicate)
    }

    /// Skips the elements found in the sorted slice `excluded`.
    fn except<T>(self, excluded: &[T]) -> Except<'_, Self, T, Natural<ItemOf<Self>, T>>
    where
        ItemOf<Self>: Borrow<T>,
        T: Ord,
    {
        except_by(self, excluded, natural::<ItemOf<Self>, T> as Natural<ItemOf<Self>, T>)
    }

    fn except_by<T, F>(self, excluded: &[T], cmp: F) -> Except<'_, Self, T, F>
    where
        F: Fn(&ItemOf<Self>, &T) -> Ordering,
    {
        except_by(self, excluded, cmp)
    }

    fn join_where<U, KL, KR, K>(
        self,
        right: &[U],
        left_key: KL,
        right_key: KR,
    ) -> JoinWhere<'_, Self, U, KL, KR, K>
    where
        KL: Fn(&ItemOf<Self>) -> K,
        KR: Fn(&U) -> K,
        K: Ord,
    {
        join_where(self, right, left_key, right_key)
    }

    /// Running fold that includes the current element: `op(..op(init, x0).., xk)`.
    fn inclusive_scan<T, F>(self, init: T, op: F) -> Scan<Self, T, F>
    where
        T: Clone,
        F: Fn(T, ItemOf<Self>) -> T,
    {
        inclusive_scan(self, init, op)
    }

    /// Running fold of the elements before the current one, starting with `init`.
    fn exclusive_scan<T, F>(self, init: T, op: F) -> Scan<Self, T, F>
    where
        T: Clone,
        F: Fn(T, ItemOf<Self>) -> T,
    {
        exclusive_scan(self, init, op)
    }

    /// Zips this view with `other`; see [`zip`](crate::zip) for more inputs.
    fn zip_with<W: View>(self, other: W) -> Zip<(Self, W)> {
        zip((self, other))
    }

    fn zip_longest_with<W: View>(self, other: W) -> ZipLongest<(Self, W)> {
        zip_longest((self, other))
    }
}

impl<V: View> ViewExt for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::slice::seq;

    #[test]
    fn test_composition() {
        let data: Vec<i32> = (1..=12).collect();
        let view = seq(&data)
            .exclude(0, 2)
            .unwrap()
            .filter(|x: &&i32| **x % 3 != 0)
            .rotate(1)
            .unwrap();
        assert_eq!(view.to::<Vec<_>>(), vec![&5, &7, &8, &10, &11, &4]);
        assert_eq!(view.distance(), 6);
    }

    #[test]
    fn test_zip_with() {
        let a = [1, 2, 3];
        let b = ['a', 'b'];
        let pairs: Vec<(i32, char)> = seq(&a)
            .zip_with(seq(&b))
            .iter()
            .map(|(x, y)| (*x, *y))
            .collect();
        assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
        assert_eq!(seq(&a).zip_longest_with(seq(&b)).distance(), 3);
    }

    #[test]
    fn test_to_other_containers() {
        let data = [3, 1, 3, 2];
        let set: std::collections::BTreeSet<i32> = seq(&data).iter().copied().collect();
        assert_eq!(set.len(), 3);
        let text: String = crate::c_string(c"abc").iter().map(char::from).collect();
        assert_eq!(text, "abc");
    }
}
