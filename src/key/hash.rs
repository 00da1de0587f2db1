//! Canonical key hashing.

use crate::value::{serialize_float, Value};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// QueryKeyHashFn replaces the canonical hash for a query key.
pub type QueryKeyHashFn = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// QueryKeyHashOptions carries per-query hashing configuration.
#[derive(Clone, Default)]
pub struct QueryKeyHashOptions {
    query_key_hash_fn: Option<QueryKeyHashFn>,
}

impl QueryKeyHashOptions {
    pub fn new() -> Self {
        QueryKeyHashOptions::default()
    }

    /// Sets a custom hash function. The key is passed to it unmodified.
    pub fn query_key_hash_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.query_key_hash_fn = Some(Arc::new(f));
        self
    }

    pub fn has_custom_hash(&self) -> bool {
        self.query_key_hash_fn.is_some()
    }
}

impl fmt::Debug for QueryKeyHashOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryKeyHashOptions")
            .field("query_key_hash_fn", &self.query_key_hash_fn.is_some())
            .finish()
    }
}

/// Returns the canonical hash of a key.
///
/// Record fields are emitted in ascending code-point order at every depth,
/// so two keys that differ only in field insertion order hash identically.
/// Undefined record fields are omitted and undefined list slots become
/// `null`.
pub fn hash_key(key: &Value) -> String {
    // Writing to memory only fails on non-string map keys, and record keys
    // are always strings.
    serde_json::to_string(&Canonical(key)).unwrap_or_default()
}

/// Hashes a key with the query's custom hash function if it has one,
/// falling back to [`hash_key`].
pub fn hash_query_key_by_options(key: &Value, options: Option<&QueryKeyHashOptions>) -> String {
    match options.and_then(|o| o.query_key_hash_fn.as_ref()) {
        Some(hash_fn) => {
            trace!("hashing query key with custom hash function");
            hash_fn(key)
        }
        None => hash_key(key),
    }
}

/// Canonical serializes a value with the record fields of every depth in
/// ascending code-point order. Numbers follow the same rules as
/// [`Value`]'s own serialization.
pub struct Canonical<'a>(pub &'a Value);

impl Serialize for Canonical<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serialize_float(*f, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => serializer.collect_seq(items.iter().map(Canonical)),
            Value::Map(map) => {
                let mut fields: Vec<_> = map.iter().filter(|(_, v)| !v.is_undefined()).collect();
                // String order is byte order over UTF-8, which is code-point order.
                fields.sort_by(|a, b| a.0.cmp(b.0));
                serializer.collect_map(fields.into_iter().map(|(k, v)| (k, Canonical(v))))
            }
            Value::Opaque(o) => match o.json() {
                Some(json) => json.serialize(serializer),
                None => serializer.serialize_map(Some(0))?.end(),
            },
        }
    }
}
