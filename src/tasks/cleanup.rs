//! Expiry Sweep Task
//!
//! Background task that periodically removes expired artifacts. Expired
//! entries already read as misses; the sweep only reclaims their memory.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ArtifactStore;

/// Spawns a background task that periodically removes expired artifacts.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It takes the write lock only for the removal itself.
///
/// # Arguments
/// * `cache` - Shared reference to the artifact store
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during graceful
/// shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<ArtifactStore>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting artifact expiry sweep with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("Expiry sweep: removed {} expired artifacts", removed);
            } else {
                debug!("Expiry sweep: no expired artifacts found");
            }
        }
    })
}
