//! TTL Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Weak;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cache::{CacheStore, MIN_INTERVAL};

/// Spawns a background task that sweeps expired entries every `interval`.
///
/// The first sweep happens one full interval after spawning. Each sweep holds
/// the write lock for the whole scan of the table.
///
/// The task exits when `shutdown` is cancelled or when the store has been
/// dropped, whichever is observed first.
///
/// # Arguments
/// * `store` - Weak reference to the table owned by the cache
/// * `interval` - Sweep period, equal to the eviction threshold
/// * `shutdown` - Token cancelled when the owning cache closes
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(interval)));
/// let token = CancellationToken::new();
/// let handle = spawn_reaper_task(Arc::downgrade(&store), interval, token.clone());
/// // Later, during shutdown:
/// token.cancel();
/// handle.await?;
/// ```
pub fn spawn_reaper_task(
    store: Weak<RwLock<CacheStore>>,
    interval: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    let interval = interval.max(MIN_INTERVAL);

    tokio::spawn(async move {
        debug!("Starting TTL reaper with interval of {:?}", interval);

        let mut ticker = interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    debug!("TTL reaper cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    let Some(store) = store.upgrade() else {
                        debug!("TTL reaper stopping: cache dropped");
                        break;
                    };

                    let removed = store.write().cleanup_expired();

                    if removed > 0 {
                        debug!("TTL sweep: removed {} expired entries", removed);
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::sync::Arc;

    fn new_store(interval: Duration) -> Arc<RwLock<CacheStore>> {
        Arc::new(RwLock::new(CacheStore::new(interval)))
    }

    #[tokio::test]
    async fn test_reaper_removes_expired_entries() {
        let interval = Duration::from_millis(50);
        let store = new_store(interval);
        store
            .write()
            .insert("expire_soon".to_string(), Bytes::from_static(b"value"));

        let token = CancellationToken::new();
        let handle = spawn_reaper_task(Arc::downgrade(&store), interval, token.clone());

        // Two full periods plus margin guarantees a sweep after expiry
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(
            store.read().get("expire_soon").is_none(),
            "Expired entry should have been swept"
        );

        token.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_reaper_preserves_fresh_entries() {
        let interval = Duration::from_millis(500);
        let store = new_store(interval);
        store
            .write()
            .insert("long_lived".to_string(), Bytes::from_static(b"value"));

        let token = CancellationToken::new();
        let handle = spawn_reaper_task(Arc::downgrade(&store), interval, token.clone());

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(
            store.read().get("long_lived"),
            Some(Bytes::from_static(b"value"))
        );

        token.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_reaper_stops_on_cancel() {
        let store = new_store(Duration::from_secs(60));
        let token = CancellationToken::new();
        let handle = spawn_reaper_task(Arc::downgrade(&store), Duration::from_secs(60), token.clone());

        token.cancel();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("Reaper should exit promptly after cancellation")
            .unwrap();
    }

    #[tokio::test]
    async fn test_reaper_stops_when_store_dropped() {
        let interval = Duration::from_millis(10);
        let store = new_store(interval);
        let handle = spawn_reaper_task(Arc::downgrade(&store), interval, CancellationToken::new());

        drop(store);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("Reaper should exit once the store is gone")
            .unwrap();
    }
}
