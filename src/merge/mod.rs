//! Merge module - Structural sharing between old and new cache data.
//!
//! This module reconciles freshly fetched data with the data already held by
//! a cache entry, reusing every unchanged subtree.

mod replace;


pub use replace::*;
