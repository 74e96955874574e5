//! scriptset - an HTTP server for combined, minified script sets
//!
//! Serves a named, versioned set of script resources as one concatenated,
//! comment/whitespace-stripped payload, optionally gzip-compressed, cached
//! server-side for 30 days per (set, version, encoding).

pub mod api;
pub mod cache;
pub mod combine;
pub mod config;
pub mod error;
pub mod minify;
pub mod models;
pub mod tags;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
