//! Key module - Canonical hashing and containment matching of query keys.

mod hash;
mod partial;

#[cfg(test)]
mod key_test;

pub use hash::*;
pub use partial::*;
