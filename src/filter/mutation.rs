//! Mutation filters.

use crate::key::hash_key;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// MutationStatus is the lifecycle state of a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationStatus {
    Idle,
    Pending,
    Success,
    Error,
}

/// MutationCandidate is what the mutation registry exposes to filters.
pub trait MutationCandidate {
    /// Returns the key the mutation was registered under, if any.
    fn mutation_key(&self) -> Option<&Value>;

    fn status(&self) -> MutationStatus;
}

/// Predicate is a caller hook evaluated against a candidate.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// MutationFilters selects mutations from the registry.
///
/// Every field is optional and an empty filter matches everything. A key
/// matches only when its canonical hash equals the mutation's.
pub struct MutationFilters<M> {
    mutation_key: Option<Value>,
    status: Option<MutationStatus>,
    predicate: Option<Predicate<M>>,
}

impl<M> MutationFilters<M> {
    pub fn new() -> Self {
        MutationFilters {
            mutation_key: None,
            status: None,
            predicate: None,
        }
    }

    /// Requires the mutation key to equal `key`. An empty list is a real
    /// key, not a wildcard.
    pub fn mutation_key(mut self, key: impl Into<Value>) -> Self {
        self.mutation_key = Some(key.into());
        self
    }

    pub fn status(mut self, status: MutationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn predicate<F>(mut self, f: F) -> Self
    where
        F: Fn(&M) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(f));
        self
    }

    pub fn key(&self) -> Option<&Value> {
        self.mutation_key.as_ref()
    }
}

impl<M> Default for MutationFilters<M> {
    fn default() -> Self {
        MutationFilters::new()
    }
}

impl<M> Clone for MutationFilters<M> {
    fn clone(&self) -> Self {
        MutationFilters {
            mutation_key: self.mutation_key.clone(),
            status: self.status,
            predicate: self.predicate.clone(),
        }
    }
}

impl<M> fmt::Debug for MutationFilters<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationFilters")
            .field("mutation_key", &self.mutation_key)
            .field("status", &self.status)
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}

/// Returns true if the mutation satisfies every criterion of the filter.
pub fn match_mutation<M: MutationCandidate>(filters: &MutationFilters<M>, mutation: &M) -> bool {
    if let Some(key) = &filters.mutation_key {
        let Some(candidate_key) = mutation.mutation_key() else {
            trace!(criterion = "mutation_key", "mutation has no key");
            return false;
        };
        if hash_key(candidate_key) != hash_key(key) {
            trace!(criterion = "mutation_key", "mutation filter rejected candidate");
            return false;
        }
    }

    if let Some(status) = filters.status {
        if mutation.status() != status {
            trace!(criterion = "status", "mutation filter rejected candidate");
            return false;
        }
    }

    if let Some(predicate) = &filters.predicate {
        if !predicate(mutation) {
            trace!(criterion = "predicate", "mutation filter rejected candidate");
            return false;
        }
    }

    true
}
