//! Configuration Module
//!
//! Handles loading and managing service configuration from environment
//! variables.

use std::env;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Capacity of the search result cache
    pub search_cache_capacity: usize,
    /// Seconds a deletion stays undoable
    pub undo_window_secs: u64,
    /// Path of the JSON file holding the journal
    pub data_path: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SEARCH_CACHE_CAPACITY` - Memoized query slots (default: 50)
    /// - `UNDO_WINDOW_SECS` - Undo window length (default: 5)
    /// - `DATA_PATH` - Journal file location (default: daybook.json)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            search_cache_capacity: env::var("SEARCH_CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            undo_window_secs: env::var("UNDO_WINDOW_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            data_path: env::var("DATA_PATH").unwrap_or_else(|_| "daybook.json".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            search_cache_capacity: 50,
            undo_window_secs: 5,
            data_path: "daybook.json".to_string(),
        }
    }
}
