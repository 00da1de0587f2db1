//! Filter module - Selecting cache entries and mutations by key and state.

mod mutation;
mod query;

pub use mutation::*;
pub use query::*;
