//! Test utilities for the lazyview crates.
//!
//! - [`laws`]: checks that a view's cursors honor the contract of the tier they
//!   advertise, against an expected element list.
//! - [`data_gen`]: seeded random inputs.
//!
//! The crate is meant to be used from integration tests only.

pub mod data_gen;
pub mod laws;
