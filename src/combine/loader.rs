//! Resource Loader
//!
//! Maps a resource identifier to its raw text content. Resources are read
//! on demand and never cached individually; only built artifacts are cached.

use std::fs;
use std::path::PathBuf;

use crate::error::{CombineError, Result};

// == Loader Trait ==
/// Loads the raw text content of a single resource.
pub trait ResourceLoader: Send + Sync {
    fn load(&self, resource: &str) -> Result<String>;
}

// == Filesystem Resource Loader ==
/// Production loader resolving identifiers against a script root directory.
#[derive(Debug, Clone)]
pub struct FsResourceLoader {
    script_root: PathBuf,
}

impl FsResourceLoader {
    /// Creates a loader rooted at the given directory.
    pub fn new(script_root: impl Into<PathBuf>) -> Self {
        Self {
            script_root: script_root.into(),
        }
    }
}

impl ResourceLoader for FsResourceLoader {
    fn load(&self, resource: &str) -> Result<String> {
        let path = self.script_root.join(resource);
        fs::read_to_string(&path).map_err(|e| CombineError::ResourceLoadFailure {
            resource: resource.to_string(),
            source: e,
        })
    }
}
