//! Adaptors that walk several views in lockstep.

pub mod zip;
pub mod zip_longest;
