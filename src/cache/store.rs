//! Cache Store Module
//!
//! Unsynchronized TTL table. Locking and the background sweep live in
//! [`TtlCache`](crate::cache::TtlCache); this type only holds the entries.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage whose entries become removable `interval` after insertion.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Eviction threshold, fixed at construction
    interval: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store that treats entries older than `interval` as expired.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
        }
    }

    // == Insert ==
    /// Stores a value under `key`.
    ///
    /// If the key already exists, the value is replaced and its clock is reset.
    pub fn insert(&mut self, key: String, value: Bytes) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns the value stored under `key` if present.
    ///
    /// Entries past their TTL are still returned until the next
    /// [`cleanup_expired`](Self::cleanup_expired) pass removes them.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Cleanup Expired ==
    /// Removes every entry whose age has reached the interval.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        let interval = self.interval;
        self.entries.retain(|_, entry| !entry.is_expired(interval));
        before - self.entries.len()
    }

    /// Returns the eviction threshold.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Returns the current number of entries, expired-but-unswept ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
