//! Request DTOs for the combiner API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Query parameters for the combine endpoint (GET /combine)
///
/// Both parameters default to the empty string when absent rather than being
/// rejected; an unmatched set name then surfaces downstream as a 404.
#[derive(Debug, Clone, Deserialize)]
pub struct CombineQuery {
    /// Set name
    #[serde(default)]
    pub s: String,
    /// Version token (opaque, cache-busting only)
    #[serde(default)]
    pub v: String,
}
