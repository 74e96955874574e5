//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The artifact TTL is deliberately not configurable; see [`crate::cache::ARTIFACT_TTL`].
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Directory containing `<set>.txt` manifest files
    pub manifest_dir: String,
    /// Root directory that resource identifiers are resolved against
    pub script_root: String,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MANIFEST_DIR` - Manifest directory (default: "sets")
    /// - `SCRIPT_ROOT` - Script resource root (default: ".")
    /// - `CLEANUP_INTERVAL` - Expiry sweep frequency in seconds (default: 3600)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            manifest_dir: env::var("MANIFEST_DIR").unwrap_or_else(|_| "sets".to_string()),
            script_root: env::var("SCRIPT_ROOT").unwrap_or_else(|_| ".".to_string()),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            manifest_dir: "sets".to_string(),
            script_root: ".".to_string(),
            cleanup_interval: 3600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.manifest_dir, "sets");
        assert_eq!(config.script_root, ".");
        assert_eq!(config.cleanup_interval, 3600);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("MANIFEST_DIR");
        env::remove_var("SCRIPT_ROOT");
        env::remove_var("CLEANUP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.manifest_dir, "sets");
        assert_eq!(config.script_root, ".");
        assert_eq!(config.cleanup_interval, 3600);
    }
}
