//! Splitting at occurrences of a delimiter subsequence.
//!
//! Follows the conventions of [`str::split`]: an empty input yields one empty part,
//! and leading, trailing or adjacent delimiters yield empty parts. Matches are found
//! left to right with a naive scan and never overlap.

use std::borrow::Borrow;

use lazyview_common::{verify_arg, Result};

use crate::{
    cursor::{Cursor, ForwardCursor, Tier},
    sentinel::{End, Sentinel},
    view::{CommonView, SubRange, View},
};

#[derive(Debug, Clone)]
pub struct Split<'d, V, T> {
    view: V,
    delimiter: &'d [T],
}

impl<'d, V: View, T> Split<'d, V, T> {
    /// Fails when `delimiter` is empty.
    pub fn new(view: V, delimiter: &'d [T]) -> Result<Split<'d, V, T>> {
        verify_arg!(delimiter, !delimiter.is_empty());
        Ok(Split { view, delimiter })
    }
}

/// Splits `view` into the parts separated by `delimiter`.
pub fn split<'d, V: View, T>(view: V, delimiter: &'d [T]) -> Result<Split<'d, V, T>> {
    Split::new(view, delimiter)
}

#[derive(Debug)]
pub struct SplitCursor<'d, C, S, T> {
    start: C,
    /// Begin of the delimiter match ending the current part, or the end.
    stop: C,
    /// Position right after that match.
    resume: C,
    end: S,
    delimiter: &'d [T],
    done: bool,
}

impl<C: Clone, S: Clone, T> Clone for SplitCursor<'_, C, S, T> {
    fn clone(&self) -> Self {
        SplitCursor {
            start: self.start.clone(),
            stop: self.stop.clone(),
            resume: self.resume.clone(),
            end: self.end.clone(),
            delimiter: self.delimiter,
            done: self.done,
        }
    }
}

impl<C, S, T> SplitCursor<'_, C, S, T>
where
    C: ForwardCursor,
    C::Item: Borrow<T>,
    S: Sentinel<C>,
    T: PartialEq,
{
    /// Finds the first match at or after `from`. Returns the match bounds, or the end
    /// twice when there is none.
    fn find_match(&self, from: &C) -> (C, C) {
        let mut candidate = from.clone();
        loop {
            if self.end.is_end(&candidate) {
                return (candidate.clone(), candidate);
            }
            let mut walker = candidate.clone();
            let mut matched = 0;
            while matched < self.delimiter.len()
                && !self.end.is_end(&walker)
                && <C::Item as Borrow<T>>::borrow(&walker.get()) == &self.delimiter[matched]
            {
                walker.advance();
                matched += 1;
            }
            if matched == self.delimiter.len() {
                return (candidate, walker);
            }
            candidate.advance();
        }
    }

    fn start_at(&mut self, start: C) {
        let (stop, resume) = self.find_match(&start);
        self.start = start;
        self.stop = stop;
        self.resume = resume;
    }
}

impl<C, S, T> Cursor for SplitCursor<'_, C, S, T>
where
    C: ForwardCursor,
    C::Item: Borrow<T>,
    S: Sentinel<C>,
    T: PartialEq,
{
    type Item = SubRange<C>;

    const TIER: Tier = C::TIER.min(Tier::Forward);

    #[inline]
    fn get(&self) -> SubRange<C> {
        SubRange::new(self.start.clone(), self.stop.clone())
    }

    fn advance(&mut self) {
        if self.end.is_end(&self.stop) {
            self.start = self.stop.clone();
            self.done = true;
            return;
        }
        let resume = self.resume.clone();
        self.start_at(resume);
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.done
    }
}

impl<C: PartialEq, S, T> PartialEq for SplitCursor<'_, C, S, T> {
    fn eq(&self, other: &Self) -> bool {
        self.done == other.done && self.start == other.start
    }
}

impl<C, S, T> ForwardCursor for SplitCursor<'_, C, S, T>
where
    C: ForwardCursor,
    C::Item: Borrow<T>,
    S: Sentinel<C>,
    T: PartialEq,
{
}

impl<'d, V, T> View for Split<'d, V, T>
where
    V: View,
    V::Cursor: ForwardCursor,
    <V::Cursor as Cursor>::Item: Borrow<T>,
    T: PartialEq,
{
    type Cursor = SplitCursor<'d, V::Cursor, V::Sentinel, T>;
    type Sentinel = End;

    fn begin(&self) -> Self::Cursor {
        let begin = self.view.begin();
        let mut cursor = SplitCursor {
            start: begin.clone(),
            stop: begin.clone(),
            resume: begin.clone(),
            end: self.view.end(),
            delimiter: self.delimiter,
            done: false,
        };
        cursor.start_at(begin);
        cursor
    }

    fn end(&self) -> End {
        End
    }
}

impl<'d, V, T> CommonView for Split<'d, V, T>
where
    V: CommonView,
    V::Cursor: ForwardCursor,
    <V::Cursor as Cursor>::Item: Borrow<T>,
    T: PartialEq,
{
    fn end_cursor(&self) -> Self::Cursor {
        let end_cursor = self.view.end_cursor();
        SplitCursor {
            start: end_cursor.clone(),
            stop: end_cursor.clone(),
            resume: end_cursor,
            end: self.view.end(),
            delimiter: self.delimiter,
            done: true,
        }
    }
}
