//! NUL-terminated byte strings, walked without measuring them first.

use std::ffi::CStr;

use crate::{
    cursor::{Cursor, ForwardCursor, Tier},
    sentinel::End,
    view::View,
};

/// Forward cursor over the bytes of a C string. The terminating NUL is the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CStrCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Cursor for CStrCursor<'_> {
    type Item = u8;

    const TIER: Tier = Tier::Forward;

    #[inline]
    fn get(&self) -> u8 {
        self.bytes[self.pos]
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(!self.at_end());
        self.pos += 1;
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.bytes[self.pos] == 0
    }
}

impl ForwardCursor for CStrCursor<'_> {
    fn steps_to(&self, other: &Self) -> usize {
        other.pos - self.pos
    }
}

/// View over the bytes of a C string, excluding the terminator.
#[derive(Debug, Clone, Copy)]
pub struct CStrView<'a> {
    bytes: &'a [u8],
}

/// Wraps a C string as a forward view whose end is found by scanning for the NUL.
pub fn c_string(value: &CStr) -> CStrView<'_> {
    CStrView {
        bytes: value.to_bytes_with_nul(),
    }
}

impl<'a> View for CStrView<'a> {
    type Cursor = CStrCursor<'a>;
    type Sentinel = End;

    fn begin(&self) -> CStrCursor<'a> {
        CStrCursor {
            bytes: self.bytes,
            pos: 0,
        }
    }

    fn end(&self) -> End {
        End
    }
}
