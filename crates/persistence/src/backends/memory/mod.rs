//! In-memory backends.
//!
//! [`MemoryIndex`] and [`MemoryCache`] hold everything in process memory and
//! need no external services. They back the service and route test suites and
//! local development without a cluster. Both can be switched offline to
//! exercise the unavailable paths.

mod cache;
mod search;

pub use cache::MemoryCache;
pub use search::MemoryIndex;
