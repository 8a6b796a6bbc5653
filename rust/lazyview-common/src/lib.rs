//! Core definitions (error type, result alias and argument validation), relied upon
//! by all lazyview-* crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
