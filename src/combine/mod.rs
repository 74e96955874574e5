//! Combine Module
//!
//! Orchestrates manifest resolution, resource loading, concatenation,
//! minification and gzip encoding into one artifact per script set.

mod combiner;
mod compress;
mod loader;
mod manifest;

// Re-export public types
pub use combiner::Combiner;
pub use compress::gzip_compress;
pub use loader::{FsResourceLoader, ResourceLoader};
pub use manifest::{FileManifestResolver, ManifestResolver};
