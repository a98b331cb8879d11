//! Algorithm implementations for variant CSS trees.
//!
//! - `combine`: set algebra over two trees, matched by variant label
//! - `normalize`: optional canonicalisation pass

mod combine;
mod normalize;

pub use combine::{combine, difference, intersection, symmetric_difference, union};
pub use normalize::normalize;
