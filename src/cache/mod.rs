//! Cache Module
//!
//! Provides an in-memory response cache with TTL expiration driven by a
//! background sweep.

use std::time::Duration;

mod entry;
mod store;
mod ttl;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;
pub use ttl::TtlCache;

// == Public Constants ==
/// Smallest interval a cache will run with; shorter requests are raised to this.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);
