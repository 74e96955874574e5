//! API Handlers
//!
//! HTTP request handlers for the combiner endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::Response,
    Json,
};
use bytes::Bytes;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::api::emitter::emit_artifact;
use crate::api::negotiation::should_compress;
use crate::cache::{ArtifactKey, ArtifactStore};
use crate::combine::{gzip_compress, Combiner, FileManifestResolver, FsResourceLoader};
use crate::config::Config;
use crate::error::Result;
use crate::models::{CombineQuery, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The cache store is the only shared mutable resource; the combiner is an
/// immutable pipeline over its injected collaborators.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe artifact cache
    pub cache: Arc<RwLock<ArtifactStore>>,
    /// Manifest-to-artifact build pipeline
    pub combiner: Combiner,
}

impl AppState {
    /// Creates a new AppState over an explicit store and combiner.
    pub fn new(store: ArtifactStore, combiner: Combiner) -> Self {
        Self {
            cache: Arc::new(RwLock::new(store)),
            combiner,
        }
    }

    /// Creates a new AppState from configuration, wiring the file-backed
    /// manifest resolver and resource loader.
    pub fn from_config(config: &Config) -> Self {
        let combiner = Combiner::new(
            Arc::new(FileManifestResolver::new(config.manifest_dir.clone())),
            Arc::new(FsResourceLoader::new(config.script_root.clone())),
        );
        Self::new(ArtifactStore::new(), combiner)
    }
}

/// Handler for GET /combine?s=<set>&v=<version>
///
/// Negotiates the encoding, then serves from cache or builds, caches and
/// serves. Missing query parameters default to empty strings, so an unknown
/// set name flows through as a 404. Concurrent misses on the same key may
/// build twice; artifacts are deterministic, so the last put wins with
/// identical bytes.
pub async fn combine_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CombineQuery>,
) -> Result<Response> {
    let accept_encoding = headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok());
    let compressed = should_compress(accept_encoding);
    let key = ArtifactKey::new(params.s.clone(), params.v.clone(), compressed);

    // Fast path: serve cached bytes under the read lock.
    if let Some(bytes) = state.cache.read().await.get(&key) {
        debug!(%key, "serving artifact from cache");
        return Ok(emit_artifact(bytes, compressed));
    }

    // Miss: build outside any lock so slow I/O never blocks other requests.
    let raw = state.combiner.build(&params.s)?;
    let artifact = if compressed {
        Bytes::from(gzip_compress(&raw)?)
    } else {
        raw
    };

    state.cache.write().await.put(key.clone(), artifact.clone());
    info!(%key, len = artifact.len(), "built and cached artifact");

    Ok(emit_artifact(artifact, compressed))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let snapshot = state.cache.read().await.stats();
    Json(StatsResponse::from_snapshot(snapshot))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn state_with_demo_set() -> (AppState, TempDir, TempDir) {
        let manifests = tempdir().unwrap();
        let scripts = tempdir().unwrap();
        fs::write(manifests.path().join("demo.txt"), "x.js\ny.js\n").unwrap();
        fs::write(scripts.path().join("x.js"), "// c\nvar a=1;").unwrap();
        fs::write(scripts.path().join("y.js"), "var b = \"// not a comment\";").unwrap();

        let combiner = Combiner::new(
            Arc::new(FileManifestResolver::new(manifests.path())),
            Arc::new(FsResourceLoader::new(scripts.path())),
        );
        let state = AppState::new(ArtifactStore::new(), combiner);
        (state, manifests, scripts)
    }

    fn query(s: &str, v: &str) -> Query<CombineQuery> {
        Query(CombineQuery {
            s: s.to_string(),
            v: v.to_string(),
        })
    }

    #[tokio::test]
    async fn test_combine_builds_and_serves_plain() {
        let (state, _m, _s) = state_with_demo_set();

        let response = combine_handler(State(state), HeaderMap::new(), query("demo", "1"))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("content-encoding").unwrap(),
            "utf-8"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"var a=1;var b=\"// not a comment\";");
    }

    #[tokio::test]
    async fn test_combine_serves_gzip_when_accepted() {
        let (state, _m, _s) = state_with_demo_set();

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT_ENCODING, "gzip, deflate".parse().unwrap());

        let response = combine_handler(State(state), headers, query("demo", "1"))
            .await
            .unwrap();

        assert_eq!(response.headers().get("content-encoding").unwrap(), "gzip");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        // Gzip magic bytes
        assert_eq!(&body[..2], &[0x1f, 0x8b]);
    }

    #[tokio::test]
    async fn test_combine_second_request_is_a_cache_hit() {
        let (state, _m, scripts) = state_with_demo_set();

        let first = combine_handler(State(state.clone()), HeaderMap::new(), query("demo", "1"))
            .await
            .unwrap();
        let first_body = axum::body::to_bytes(first.into_body(), usize::MAX)
            .await
            .unwrap();

        // Changing the source no longer affects the cached artifact.
        fs::write(scripts.path().join("x.js"), "var changed=9;").unwrap();

        let second = combine_handler(State(state.clone()), HeaderMap::new(), query("demo", "1"))
            .await
            .unwrap();
        let second_body = axum::body::to_bytes(second.into_body(), usize::MAX)
            .await
            .unwrap();

        assert_eq!(first_body, second_body);

        let stats = state.cache.read().await.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_combine_version_bump_rebuilds() {
        let (state, _m, scripts) = state_with_demo_set();

        combine_handler(State(state.clone()), HeaderMap::new(), query("demo", "1"))
            .await
            .unwrap();

        fs::write(scripts.path().join("x.js"), "var changed=9;").unwrap();

        let response = combine_handler(State(state.clone()), HeaderMap::new(), query("demo", "2"))
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"var changed=9;var b=\"// not a comment\";");
    }

    #[tokio::test]
    async fn test_combine_unknown_set_is_error() {
        let (state, _m, _s) = state_with_demo_set();

        let result = combine_handler(
            State(state.clone()),
            HeaderMap::new(),
            query("doesnotexist", "1"),
        )
        .await;
        assert!(result.is_err());

        // Failures never leave a cache entry behind.
        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let (state, _m, _s) = state_with_demo_set();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.entries, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
