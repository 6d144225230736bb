//! TTL Cache Handle
//!
//! Thread-safe cache that owns its table lock and the background reaper.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cache::{CacheStore, MIN_INTERVAL};
use crate::tasks::spawn_reaper_task;

// == TTL Cache ==
/// Concurrency-safe key/value cache with time-based eviction.
///
/// Entries are removed by a background sweep that runs every `interval`,
/// so a value stays readable for at least `interval` and at most
/// `2 * interval` after its last insertion.
///
/// The sweep stops when [`close`](Self::close) is awaited or the cache is dropped.
#[derive(Debug)]
pub struct TtlCache {
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    shutdown: CancellationToken,
    reaper: Option<JoinHandle<()>>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper on the current Tokio runtime.
    ///
    /// A zero `interval` is raised to [`MIN_INTERVAL`].
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime.
    pub fn new(interval: Duration) -> Self {
        let interval = if interval < MIN_INTERVAL {
            warn!(
                "Cache interval {:?} is below the minimum, using {:?}",
                interval, MIN_INTERVAL
            );
            MIN_INTERVAL
        } else {
            interval
        };

        let store = Arc::new(RwLock::new(CacheStore::new(interval)));
        let shutdown = CancellationToken::new();
        let reaper = spawn_reaper_task(Arc::downgrade(&store), interval, shutdown.clone());

        info!("TTL cache started with interval of {:?}", interval);

        Self {
            store,
            interval,
            shutdown,
            reaper: Some(reaper),
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any existing entry and resetting its clock.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.store.write().insert(key.into(), value.into());
    }

    // == Get ==
    /// Returns the value for `key` if it has not been swept yet.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let value = self.store.read().get(key);
        debug!(key, hit = value.is_some(), "cache lookup");
        value
    }

    /// Returns the eviction threshold and sweep period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    // == Close ==
    /// Stops the reaper and waits for it to finish.
    pub async fn close(mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.reaper.take() {
            if let Err(err) = handle.await {
                warn!("Reaper task ended abnormally: {}", err);
            }
        }
    }

    /// Returns true once the reaper has exited.
    pub fn is_reaper_finished(&self) -> bool {
        self.reaper.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for TtlCache {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_get() {
        let cache = TtlCache::new(Duration::from_secs(60));

        cache.insert("a", vec![1u8, 2, 3]);

        assert_eq!(cache.get("a"), Some(Bytes::from(vec![1u8, 2, 3])));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_get_absent_key() {
        let cache = TtlCache::new(Duration::from_secs(60));

        assert!(cache.get("missing").is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_zero_interval_is_clamped() {
        let cache = TtlCache::new(Duration::ZERO);

        assert_eq!(cache.interval(), MIN_INTERVAL);

        cache.insert("a", Bytes::from_static(b"x"));
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(cache.get("a").is_none(), "Zero interval should evict almost immediately");
    }

    #[tokio::test]
    async fn test_close_stops_reaper() {
        let cache = TtlCache::new(Duration::from_millis(10));
        assert!(!cache.is_reaper_finished());

        // Completes only if the reaper observes cancellation
        cache.close().await;
    }

    #[tokio::test]
    async fn test_drop_cancels_reaper() {
        let cache = TtlCache::new(Duration::from_millis(10));
        let token = cache.shutdown.clone();

        drop(cache);

        assert!(token.is_cancelled());
    }
}
