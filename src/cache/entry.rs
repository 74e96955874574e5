//! Artifact Entry Module
//!
//! Defines the structure for individual cached artifacts with absolute expiry.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bytes::Bytes;

// == Artifact Entry ==
/// A single cached artifact: the built bytes plus its lifetime metadata.
#[derive(Debug, Clone)]
pub struct ArtifactEntry {
    /// The artifact bytes (minified, possibly gzip-compressed)
    pub bytes: Bytes,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds), absolute from insertion
    pub expires_at: u64,
}

impl ArtifactEntry {
    /// Creates a new entry expiring `ttl` after now. Expiry is never
    /// extended afterwards; reads observe it, they do not renew it.
    pub fn new(bytes: Bytes, ttl: Duration) -> Self {
        let now = current_timestamp_ms();
        Self {
            bytes,
            created_at: now,
            expires_at: now + ttl.as_millis() as u64,
        }
    }

    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is greater than or equal to
    /// its expiration time.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
