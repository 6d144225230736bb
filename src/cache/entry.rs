//! Cache Entry Module
//!
//! Defines a single cached payload together with its insertion time.

use std::time::{Duration, Instant};

use bytes::Bytes;

// == Cache Entry ==
/// Represents a single cache entry with its value and creation time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Bytes,
    /// Monotonic timestamp captured at insertion
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: Bytes) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago the entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry is eligible for removal.
    ///
    /// Boundary condition: an entry whose age equals `interval` is expired.
    pub fn is_expired(&self, interval: Duration) -> bool {
        self.age() >= interval
    }
}
