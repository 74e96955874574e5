//! Artifact Key Module
//!
//! Composite cache key for built artifacts. A structured tuple key rather
//! than a delimited string, so no two distinct (set, version, compressed)
//! triples can ever collide regardless of the characters in the names.

use std::fmt;

// == Artifact Key ==
/// Identifies one artifact variant: a set at a version in one encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactKey {
    /// Name of the script set
    pub set_name: String,
    /// Opaque version token, used purely as a cache-busting discriminant
    pub version: String,
    /// Whether this variant holds gzip-compressed bytes
    pub compressed: bool,
}

impl ArtifactKey {
    /// Creates a new ArtifactKey.
    pub fn new(set_name: impl Into<String>, version: impl Into<String>, compressed: bool) -> Self {
        Self {
            set_name: set_name.into(),
            version: version.into(),
            compressed,
        }
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} (compressed: {})", self.set_name, self.version, self.compressed)
    }
}
