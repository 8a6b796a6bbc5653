//! Base sequences that adaptors wrap.

pub mod c_string;
pub mod iter_source;
pub mod slice;
