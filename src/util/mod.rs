//! Util module - Small pure helpers shared by cache entries.

mod buffer;
mod throw;
mod timing;
mod update;

pub use buffer::*;
pub use throw::*;
pub use timing::*;
pub use update::*;
