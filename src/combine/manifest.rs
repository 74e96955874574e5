//! Manifest Resolver
//!
//! Maps a set name to its ordered list of resource identifiers. The manifest
//! format is a plain-text file per set, one identifier per line, blank lines
//! ignored, no comment syntax.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{CombineError, Result};

// == Resolver Trait ==
/// Resolves a set name to an ordered sequence of resource identifiers.
///
/// The order is the concatenation order; implementations must not reorder
/// or deduplicate.
pub trait ManifestResolver: Send + Sync {
    fn resolve(&self, set_name: &str) -> Result<Vec<String>>;
}

// == File Manifest Resolver ==
/// Production resolver reading `<manifest_dir>/<set>.txt`.
#[derive(Debug, Clone)]
pub struct FileManifestResolver {
    manifest_dir: PathBuf,
}

impl FileManifestResolver {
    /// Creates a resolver rooted at the given manifest directory.
    pub fn new(manifest_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest_dir: manifest_dir.into(),
        }
    }
}

impl ManifestResolver for FileManifestResolver {
    fn resolve(&self, set_name: &str) -> Result<Vec<String>> {
        let path = self.manifest_dir.join(format!("{}.txt", set_name));
        let contents = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CombineError::SetNotFound(set_name.to_string()),
            _ => CombineError::Internal(format!("Failed to read manifest {}: {}", path.display(), e)),
        })?;

        // A manifest with zero resources is a valid, empty set.
        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
