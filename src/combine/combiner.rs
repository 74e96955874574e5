//! Combiner
//!
//! Builds the raw (uncompressed) artifact for a script set: resolve the
//! manifest, load every resource in manifest order, concatenate with no
//! separator, minify, and encode as UTF-8 bytes. Compression and caching are
//! the caller's concern, which keeps this component pure and independently
//! testable.

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use crate::combine::{ManifestResolver, ResourceLoader};
use crate::error::Result;
use crate::minify::minify;

// == Combiner ==
/// Orchestrates manifest resolution, loading and minification.
#[derive(Clone)]
pub struct Combiner {
    resolver: Arc<dyn ManifestResolver>,
    loader: Arc<dyn ResourceLoader>,
}

impl Combiner {
    /// Creates a Combiner over the given collaborators.
    pub fn new(resolver: Arc<dyn ManifestResolver>, loader: Arc<dyn ResourceLoader>) -> Self {
        Self { resolver, loader }
    }

    /// Builds the raw artifact for a set.
    ///
    /// Resources are concatenated exactly in manifest order with no separator
    /// (scripts are assumed self-terminating). An empty set yields an empty
    /// artifact rather than an error, so callers referencing optional sets
    /// keep working. Deterministic for a fixed manifest and resource state.
    pub fn build(&self, set_name: &str) -> Result<Bytes> {
        let resources = self.resolver.resolve(set_name)?;
        debug!(set = set_name, resources = resources.len(), "resolved manifest");

        let mut combined = String::new();
        for resource in &resources {
            combined.push_str(&self.loader.load(resource)?);
        }

        let minified = minify(&combined);
        debug!(
            set = set_name,
            raw_len = combined.len(),
            minified_len = minified.len(),
            "built raw artifact"
        );
        Ok(Bytes::from(minified.into_bytes()))
    }
}
