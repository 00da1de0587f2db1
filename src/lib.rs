//! # Query Reconcile
//!
//! Structural reconciliation and key normalization for client-side query
//! caches.
//!
//! This library decides whether two cache values are semantically identical
//! so that downstream recomputation can be skipped, produces canonical
//! order-independent hashes for nested lookup keys, and tests whether one
//! key structurally contains another for bulk filter operations. Every
//! operation is synchronous and pure; values are immutable and shared by
//! `Arc`, so all of them can be called from any thread without locking.
//!
//! ## Modules
//!
//! - [`value`] - Value model, plain-data classification and shallow comparison
//! - [`key`] - Canonical key hashing and partial key matching
//! - [`merge`] - Structural sharing between old and new data
//! - [`filter`] - Query and mutation filters
//! - [`util`] - Bounded buffers, error policy and update helpers

pub mod error;
pub mod filter;
pub mod key;
pub mod merge;
pub mod util;
pub mod value;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use filter::{
    match_mutation, match_query, FetchStatus, MutationCandidate, MutationFilters, MutationStatus,
    QueryCandidate, QueryFilters, QueryTypeFilter,
};
pub use key::{hash_key, hash_query_key_by_options, partial_match_key, QueryKeyHashOptions};
pub use merge::{replace_data, replace_equal_deep, StructuralSharing};
pub use util::{add_to_end, add_to_start, keep_previous_data, should_throw_error, ThrowOnError};
pub use value::{is_plain_list, is_plain_record, shallow_equal_objects, Kind, Map, Opaque, Value};

#[test]
fn test_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<Value>();
    assert_sync::<Value>();
    assert_send::<QueryKeyHashOptions>();
    assert_sync::<StructuralSharing>();
}
