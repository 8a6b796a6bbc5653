//! Adaptors that regroup a sequence into sub-ranges, and the inverse, flattening.

pub mod chunk_if;
pub mod chunks;
pub mod flatten;
pub mod group_by;
pub mod split;
