//! Value module - In-memory representation of cache data and query keys.
//!
//! This module provides the value model, plain-data classification and
//! shallow record comparison.

mod classify;
mod shallow;
mod value;

pub use classify::*;
pub use shallow::*;
pub use value::*;
