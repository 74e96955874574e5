//! Artifact Cache Module
//!
//! Holds built script artifacts keyed by (set name, version, compression)
//! with a fixed absolute time-to-live and no renewal on access.

mod entry;
mod key;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::ArtifactEntry;
pub use key::ArtifactKey;
pub use stats::{StatsSnapshot, StoreStats};
pub use store::ArtifactStore;

use std::time::Duration;

// == Public Constants ==
/// Artifacts live for 30 days from insertion. Expiry is absolute: reads do
/// not extend it, and a version bump is the only invalidation mechanism.
pub const ARTIFACT_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);
