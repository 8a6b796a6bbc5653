//! Lazy, composable views over sequences.
//!
//! A view describes a sequence without materializing it. It hands out a begin
//! [`Cursor`] and an end marker (a [`Sentinel`]); every adaptor wraps one or more
//! views and produces a new view whose cursors translate positions on the fly.
//! Nothing is copied or buffered, except for [`unique`], which sorts its input in
//! place before exposing it.
//!
//! # Capability tiers
//!
//! Cursors advertise one of four [`Tier`]s: single-pass, forward, bidirectional or
//! random access. An adaptor's cursor reports the strongest tier it can honor given
//! its inputs, so for example excluding a window from a slice keeps O(1) jumps,
//! while the same exclusion over a C string only walks forward.
//!
//! # Adaptor families
//!
//! - [`index`]: exclusion of an index window, rotation, strided selection,
//!   prefixes and suffixes by count, concatenation of equal views, chaining of
//!   different views and cartesian product.
//! - [`lockstep`]: zip and zip-longest over tuples of views.
//! - [`segment`]: fixed-size chunks, predicate-started chunks, group-by, delimiter
//!   split and flattening.
//! - [`filtering`]: filter, choose, predicate-bounded prefixes and suffixes,
//!   unique, set difference and key join.
//! - [`scan`]: inclusive and exclusive running folds.
//!
//! # Example
//!
//! ```
//! use lazyview::{seq, ViewExt};
//!
//! let data: Vec<i32> = (1..=10).collect();
//! let chunks: Vec<Vec<i32>> = seq(&data)
//!     .exclude(3, 5)?
//!     .chunks(3)?
//!     .iter()
//!     .map(|chunk| chunk.iter().copied().collect())
//!     .collect();
//! assert_eq!(chunks, vec![vec![1, 2, 3], vec![6, 7, 8], vec![9, 10]]);
//! # Ok::<(), lazyview::Error>(())
//! ```

pub mod cursor;
mod ext;
pub mod filtering;
pub mod index;
mod lane;
pub mod lockstep;
pub mod scan;
pub mod segment;
pub mod sentinel;
pub mod source;
pub mod view;

pub use cursor::{
    distance, jump_tier, next, prev, BidirectionalCursor, Cursor, ForwardCursor,
    RandomAccessCursor, Tier,
};
pub use ext::{ItemOf, ViewExt};
pub use lane::Lane;
pub use sentinel::{End, Sentinel};
pub use view::{CommonView, IntoView, SubRange, View, Walk};

pub use source::{
    c_string::{c_string, CStrCursor, CStrView},
    iter_source::{iter_source, IterCursor, IterSource},
    slice::{seq, SliceCursor, SliceView},
};

pub use filtering::{
    choose::{choose, Choose, ChooseCursor},
    except::{except_by, natural, Except, ExceptCursor, Natural},
    filter::{filter, Filter, FilterCursor},
    join_where::{join_where, JoinWhere, JoinWhereCursor},
    take_while::{skip_while, take_while, SkipWhile, TakeWhile, TakeWhileCursor},
    unique::{unique, unique_by, NaturalOrder, Unique, UniqueCursor},
};
pub use index::{
    cartesian_product::{cartesian_product, CartesianProduct, CartesianProductCursor},
    chain::{chain, Chain, ChainCursor},
    concatenate::{concatenate, Concatenate, ConcatenateCursor},
    exclude::{exclude, Exclude, ExcludeCursor},
    rotate::{rotate, Rotate, RotateCursor},
    take::{skip, slice, take, Skip, Take, TakeCursor},
    take_every::{take_every, TakeEvery, TakeEveryCursor},
};
pub use lockstep::{
    zip::{zip, Zip, ZipCursor},
    zip_longest::{zip_longest, ZipLongest, ZipLongestCursor},
};
pub use scan::{exclusive_scan, inclusive_scan, Scan, ScanCursor};
pub use segment::{
    chunk_if::{chunk_if, ChunkIf, ChunkIfCursor},
    chunks::{chunks, Chunks, ChunksCursor},
    flatten::{flatten, Flatten, FlattenCursor},
    group_by::{group_by, GroupBy, GroupByCursor},
    split::{split, Split, SplitCursor},
};

pub use lazyview_common::{Error, ErrorKind, Result};
