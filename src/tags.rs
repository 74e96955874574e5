//! Script Tag Generation
//!
//! Utility for page templates: renders the `<script>` tags that reference a
//! set, either one tag per resource (debug builds) or a single tag pointing
//! at the combine endpoint (production). The mode is an explicit argument
//! rather than ambient conditional compilation, so both paths stay testable.

use crate::combine::ManifestResolver;
use crate::error::Result;

// == Tag Mode ==
/// Which rendering of a set the page should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagMode {
    /// One tag per resource, pointing directly at its path
    Debug,
    /// A single tag pointing at the combine endpoint
    Production,
}

// == Script Tags ==
/// Renders the inclusion tags for a set.
///
/// Debug mode resolves the manifest and emits one tag per resource in
/// manifest order, each cache-busted with the version. Production mode emits
/// a single tag carrying the set name and version as query parameters.
pub fn script_tags(
    resolver: &dyn ManifestResolver,
    set_name: &str,
    version: &str,
    mode: TagMode,
) -> Result<String> {
    match mode {
        TagMode::Debug => {
            let mut tags = String::new();
            for resource in resolver.resolve(set_name)? {
                tags.push_str(&format!(
                    "\n<script type=\"text/javascript\" src=\"{}?v={}\"></script>",
                    resource, version
                ));
            }
            Ok(tags)
        }
        TagMode::Production => Ok(format!(
            "<script type=\"text/javascript\" src=\"/combine?s={}&v={}\"></script>",
            set_name, version
        )),
    }
}
