//! Property-Based Tests for the Artifact Cache
//!
//! Uses proptest to verify store invariants over arbitrary key/byte inputs.

use bytes::Bytes;
use proptest::prelude::*;

use crate::cache::{ArtifactKey, ArtifactStore};

// == Strategies ==
/// Set names and version tokens are opaque; include delimiter-looking
/// characters to probe for key collisions.
fn token_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9_.@-]{1,24}").unwrap()
}

fn key_strategy() -> impl Strategy<Value = ArtifactKey> {
    (token_strategy(), token_strategy(), any::<bool>())
        .prop_map(|(set, version, compressed)| ArtifactKey::new(set, version, compressed))
}

fn artifact_strategy() -> impl Strategy<Value = Bytes> {
    proptest::collection::vec(any::<u8>(), 0..256).prop_map(Bytes::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing an artifact and reading it back within TTL returns the exact
    // bytes that were stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), bytes in artifact_strategy()) {
        let mut store = ArtifactStore::new();
        store.put(key.clone(), bytes.clone());

        prop_assert_eq!(store.get(&key), Some(bytes));
    }

    // Distinct (set, version, compressed) triples never observe each other's
    // artifacts.
    #[test]
    fn prop_no_key_collisions(
        key_a in key_strategy(),
        key_b in key_strategy(),
        bytes_a in artifact_strategy(),
        bytes_b in artifact_strategy()
    ) {
        prop_assume!(key_a != key_b);

        let mut store = ArtifactStore::new();
        store.put(key_a.clone(), bytes_a.clone());
        store.put(key_b.clone(), bytes_b.clone());

        prop_assert_eq!(store.get(&key_a), Some(bytes_a));
        prop_assert_eq!(store.get(&key_b), Some(bytes_b));
    }

    // Re-putting a key replaces its artifact: the last put wins.
    #[test]
    fn prop_last_put_wins(
        key in key_strategy(),
        first in artifact_strategy(),
        second in artifact_strategy()
    ) {
        let mut store = ArtifactStore::new();
        store.put(key.clone(), first);
        store.put(key.clone(), second.clone());

        prop_assert_eq!(store.get(&key), Some(second));
        prop_assert_eq!(store.len(), 1);
    }

    // Hit and miss counters reflect exactly the reads that were made.
    #[test]
    fn prop_statistics_accuracy(
        stored in proptest::collection::vec((key_strategy(), artifact_strategy()), 1..10),
        probes in proptest::collection::vec(key_strategy(), 1..20)
    ) {
        let mut store = ArtifactStore::new();
        for (key, bytes) in &stored {
            store.put(key.clone(), bytes.clone());
        }

        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;
        for probe in &probes {
            match store.get(probe) {
                Some(_) => expected_hits += 1,
                None => expected_misses += 1,
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.entries, store.len());
    }
}
