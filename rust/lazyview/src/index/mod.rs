//! Adaptors that remap element positions: joining, removing a window, rotating,
//! striding, taking prefixes and suffixes, and forming products.

pub mod cartesian_product;
pub mod chain;
pub mod concatenate;
pub mod exclude;
pub mod rotate;
pub mod take;
pub mod take_every;
