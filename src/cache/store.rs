//! Artifact Store Module
//!
//! HashMap-backed storage for built artifacts with absolute TTL expiry.
//! There is no capacity limit and no manual invalidation: entries leave the
//! store only by expiring, and a version bump in the key is the caller's
//! invalidation mechanism.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;

use crate::cache::{ArtifactEntry, ArtifactKey, StatsSnapshot, StoreStats, ARTIFACT_TTL};

// == Artifact Store ==
/// Main artifact storage keyed by (set name, version, compression).
#[derive(Debug)]
pub struct ArtifactStore {
    /// Key-value storage
    entries: HashMap<ArtifactKey, ArtifactEntry>,
    /// Performance counters
    stats: StoreStats,
    /// Entry lifetime, absolute from insertion
    ttl: Duration,
}

impl ArtifactStore {
    // == Constructors ==
    /// Creates a store with the production 30-day TTL.
    pub fn new() -> Self {
        Self::with_ttl(ARTIFACT_TTL)
    }

    /// Creates a store with an explicit TTL. Exists so tests can exercise
    /// expiry without waiting 30 days.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: StoreStats::new(),
            ttl,
        }
    }

    // == Get ==
    /// Retrieves the artifact for a key, if present and not expired.
    ///
    /// Takes `&self` so concurrent readers share the store's read lock.
    /// An expired entry reports as a miss and is left in place for the
    /// background sweeper; reading never extends a lifetime.
    pub fn get(&self, key: &ArtifactKey) -> Option<Bytes> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.stats.record_expired();
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.bytes.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores an artifact under a key, resetting its lifetime.
    ///
    /// Concurrent builders racing on the same key are allowed: artifacts are
    /// deterministic, so the last put wins with byte-identical content.
    pub fn put(&mut self, key: ArtifactKey, bytes: Bytes) {
        self.entries.insert(key, ArtifactEntry::new(bytes, self.ttl));
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Stats ==
    /// Returns a point-in-time snapshot of the counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }

    // == Length ==
    /// Returns the current number of entries (expired ones included until
    /// the sweeper runs).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::new()
    }
}
