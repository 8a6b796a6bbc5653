//! Cursor-contract checks.
//!
//! Each check walks a view against the list of elements it is expected to produce.
//! `project` maps a cursor item to a comparable value, so views yielding references,
//! tuples or sub-ranges can be checked against plain vectors.

use std::fmt::Debug;

use anyhow::{Context, ensure};
use lazyview::{
    BidirectionalCursor, CommonView, Cursor, ForwardCursor, RandomAccessCursor, Sentinel, View,
};

/// Single-pass and forward contract: the walk yields `expected`, `remaining` and the
/// sentinel distance agree at every position, `advance_n` lands where repeated
/// `advance` does, and copies of a cursor traverse independently.
pub fn check_forward<V, T, F>(view: &V, expected: &[T], project: F) -> anyhow::Result<()>
where
    V: View,
    V::Cursor: ForwardCursor,
    T: PartialEq + Debug,
    F: Fn(<V::Cursor as Cursor>::Item) -> T,
{
    let end = view.end();
    let begin = view.begin();
    let mut cursor = begin.clone();
    for (index, value) in expected.iter().enumerate() {
        ensure!(!end.is_end(&cursor), "walk ended early at {index}");
        ensure!(!cursor.at_end(), "cursor reports its end early at {index}");
        let left = expected.len() - index;
        ensure!(
            cursor.remaining() == left,
            "remaining() at {index} is {}, expected {left}",
            cursor.remaining()
        );
        ensure!(
            end.distance_from(&cursor) == left,
            "sentinel distance at {index} is {}, expected {left}",
            end.distance_from(&cursor)
        );
        let actual = project(cursor.get());
        ensure!(actual == *value, "element {index}: {actual:?} != {value:?}");
        ensure!(
            begin.steps_to(&cursor) == index,
            "steps_to from begin at {index} is {}",
            begin.steps_to(&cursor)
        );

        let mut jumped = begin.clone();
        jumped.advance_n(index);
        ensure!(jumped == cursor, "advance_n({index}) disagrees with advance");

        cursor.advance();
    }
    ensure!(end.is_end(&cursor), "walk did not end after {} elements", expected.len());
    ensure!(cursor.at_end(), "cursor does not report its end");
    ensure!(cursor.remaining() == 0, "remaining() at the end is not zero");

    // a second pass from a fresh begin sees the same elements
    let mut again = view.begin();
    for (index, value) in expected.iter().enumerate() {
        let actual = project(again.get());
        ensure!(actual == *value, "second pass, element {index}: {actual:?} != {value:?}");
        again.advance();
    }
    Ok(())
}

/// Bidirectional contract on top of [`check_forward`]: walking back from the end
/// cursor yields `expected` reversed, and `retreat` undoes `advance`.
pub fn check_bidirectional<V, T, F>(view: &V, expected: &[T], project: F) -> anyhow::Result<()>
where
    V: CommonView,
    V::Cursor: BidirectionalCursor,
    T: PartialEq + Debug,
    F: Fn(<V::Cursor as Cursor>::Item) -> T,
{
    check_forward(view, expected, &project).context("forward laws")?;

    let begin = view.begin();
    let mut cursor = view.end_cursor();
    ensure!(
        begin.steps_to(&cursor) == expected.len(),
        "end cursor is {} steps from begin, expected {}",
        begin.steps_to(&cursor),
        expected.len()
    );
    for (index, value) in expected.iter().enumerate().rev() {
        cursor.retreat();
        let actual = project(cursor.get());
        ensure!(actual == *value, "backward element {index}: {actual:?} != {value:?}");

        let mut round_trip = cursor.clone();
        round_trip.advance();
        round_trip.retreat();
        ensure!(round_trip == cursor, "advance then retreat moved the cursor at {index}");
    }
    ensure!(cursor == begin, "backward walk did not stop at begin");
    Ok(())
}

/// Random-access contract on top of [`check_bidirectional`]: signed jumps land on the
/// right element from either end, and `offset_from` measures them back.
pub fn check_random_access<V, T, F>(view: &V, expected: &[T], project: F) -> anyhow::Result<()>
where
    V: CommonView,
    V::Cursor: RandomAccessCursor,
    T: PartialEq + Debug,
    F: Fn(<V::Cursor as Cursor>::Item) -> T,
{
    check_bidirectional(view, expected, &project).context("bidirectional laws")?;

    let begin = view.begin();
    let end = view.end_cursor();
    let len = expected.len() as isize;
    ensure!(end.offset_from(&begin) == len, "end offset is {}", end.offset_from(&begin));
    ensure!(begin.offset_from(&end) == -len, "begin offset is {}", begin.offset_from(&end));

    for (index, value) in expected.iter().enumerate() {
        let k = index as isize;

        let mut forward = begin.clone();
        forward.advance_by(k);
        let actual = project(forward.get());
        ensure!(actual == *value, "advance_by({k}) from begin: {actual:?} != {value:?}");
        ensure!(forward.offset_from(&begin) == k, "offset of element {index}");

        let mut backward = end.clone();
        backward.advance_by(k - len);
        ensure!(backward == forward, "advance_by({}) from end disagrees", k - len);

        let mut stepped = begin.clone();
        stepped.advance_n(index);
        ensure!(stepped == forward, "advance_by({k}) disagrees with advance_n");

        let mut rest = forward.clone();
        rest.advance_by(len - k);
        ensure!(rest == end, "advance_by({}) from {index} misses the end", len - k);
    }
    Ok(())
}
