//! Query filters.

use super::Predicate;
use crate::key::{hash_query_key_by_options, partial_match_key, QueryKeyHashOptions};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// QueryTypeFilter selects queries by whether anything observes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QueryTypeFilter {
    #[default]
    All,
    Active,
    Inactive,
}

/// FetchStatus is the network state of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchStatus {
    Fetching,
    Paused,
    Idle,
}

/// QueryCandidate is what the query cache exposes to filters.
pub trait QueryCandidate {
    fn query_key(&self) -> &Value;

    /// Returns the hash the cache indexes this query under.
    fn query_hash(&self) -> &str;

    /// Returns the query's hashing options, used for exact matching.
    fn hash_options(&self) -> Option<&QueryKeyHashOptions> {
        None
    }

    fn is_active(&self) -> bool;

    fn is_stale(&self) -> bool;

    fn fetch_status(&self) -> FetchStatus;
}

/// QueryFilters selects queries from the cache.
///
/// A key matches by containment unless `exact` is set, in which case the
/// filter key, hashed with the candidate's own options, must equal the
/// candidate's hash.
pub struct QueryFilters<Q> {
    query_key: Option<Value>,
    exact: bool,
    type_filter: QueryTypeFilter,
    stale: Option<bool>,
    fetch_status: Option<FetchStatus>,
    predicate: Option<Predicate<Q>>,
}

impl<Q> QueryFilters<Q> {
    pub fn new() -> Self {
        QueryFilters {
            query_key: None,
            exact: false,
            type_filter: QueryTypeFilter::All,
            stale: None,
            fetch_status: None,
            predicate: None,
        }
    }

    pub fn query_key(mut self, key: impl Into<Value>) -> Self {
        self.query_key = Some(key.into());
        self
    }

    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    pub fn type_filter(mut self, type_filter: QueryTypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }

    pub fn stale(mut self, stale: bool) -> Self {
        self.stale = Some(stale);
        self
    }

    pub fn fetch_status(mut self, status: FetchStatus) -> Self {
        self.fetch_status = Some(status);
        self
    }

    pub fn predicate<F>(mut self, f: F) -> Self
    where
        F: Fn(&Q) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(f));
        self
    }

    pub fn key(&self) -> Option<&Value> {
        self.query_key.as_ref()
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }
}

impl<Q> Default for QueryFilters<Q> {
    fn default() -> Self {
        QueryFilters::new()
    }
}

impl<Q> Clone for QueryFilters<Q> {
    fn clone(&self) -> Self {
        QueryFilters {
            query_key: self.query_key.clone(),
            exact: self.exact,
            type_filter: self.type_filter,
            stale: self.stale,
            fetch_status: self.fetch_status,
            predicate: self.predicate.clone(),
        }
    }
}

impl<Q> fmt::Debug for QueryFilters<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryFilters")
            .field("query_key", &self.query_key)
            .field("exact", &self.exact)
            .field("type_filter", &self.type_filter)
            .field("stale", &self.stale)
            .field("fetch_status", &self.fetch_status)
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}

/// Returns true if the query satisfies every criterion of the filter.
pub fn match_query<Q: QueryCandidate>(filters: &QueryFilters<Q>, query: &Q) -> bool {
    if let Some(key) = &filters.query_key {
        if filters.exact {
            if query.query_hash() != hash_query_key_by_options(key, query.hash_options()) {
                trace!(criterion = "query_key", exact = true, "query filter rejected candidate");
                return false;
            }
        } else if !partial_match_key(query.query_key(), key) {
            trace!(criterion = "query_key", exact = false, "query filter rejected candidate");
            return false;
        }
    }

    match filters.type_filter {
        QueryTypeFilter::All => {}
        QueryTypeFilter::Active if !query.is_active() => {
            trace!(criterion = "type", "query filter rejected inactive candidate");
            return false;
        }
        QueryTypeFilter::Inactive if query.is_active() => {
            trace!(criterion = "type", "query filter rejected active candidate");
            return false;
        }
        _ => {}
    }

    if let Some(stale) = filters.stale {
        if query.is_stale() != stale {
            trace!(criterion = "stale", "query filter rejected candidate");
            return false;
        }
    }

    if let Some(status) = filters.fetch_status {
        if query.fetch_status() != status {
            trace!(criterion = "fetch_status", "query filter rejected candidate");
            return false;
        }
    }

    if let Some(predicate) = &filters.predicate {
        if !predicate(query) {
            trace!(criterion = "predicate", "query filter rejected candidate");
            return false;
        }
    }

    true
}
