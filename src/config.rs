//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string
    pub database_url: String,
    /// Maximum number of pooled database connections
    pub db_max_connections: u32,
    /// HTTP server port
    pub server_port: u16,
    /// Whether the book list is served through the read-through cache
    pub cache_enabled: bool,
    /// Lifetime of a cached book list in seconds
    pub cache_ttl: u64,
    /// Capacity of the cache primitive
    pub cache_max_entries: usize,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` - SQLite connection string (default: sqlite:///tmp/books.db)
    /// - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `CACHE_ENABLED` - Enable the list cache (default: true)
    /// - `CACHE_TTL` - List cache TTL in seconds (default: 120)
    /// - `CACHE_MAX_ENTRIES` - Cache capacity (default: 100)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", defaults.db_max_connections),
            server_port: parse_var("SERVER_PORT", defaults.server_port),
            cache_enabled: parse_var("CACHE_ENABLED", defaults.cache_enabled),
            cache_ttl: parse_var("CACHE_TTL", defaults.cache_ttl),
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES", defaults.cache_max_entries),
            cleanup_interval: parse_var("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:///tmp/books.db".to_string(),
            db_max_connections: 5,
            server_port: 5000,
            cache_enabled: true,
            cache_ttl: 120,
            cache_max_entries: 100,
            cleanup_interval: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.database_url, "sqlite:///tmp/books.db");
        assert_eq!(config.server_port, 5000);
        assert!(config.cache_enabled);
        assert_eq!(config.cache_ttl, 120);
        assert_eq!(config.cache_max_entries, 100);
    }

    #[test]
    fn test_parse_var_falls_back_on_garbage() {
        env::set_var("BOOK_SHELF_TEST_GARBAGE", "not-a-number");
        assert_eq!(parse_var("BOOK_SHELF_TEST_GARBAGE", 42u64), 42);
        env::remove_var("BOOK_SHELF_TEST_GARBAGE");
    }

    #[test]
    fn test_parse_var_reads_bool() {
        env::set_var("BOOK_SHELF_TEST_TOGGLE", "false");
        assert!(!parse_var("BOOK_SHELF_TEST_TOGGLE", true));
        env::remove_var("BOOK_SHELF_TEST_TOGGLE");
    }

    #[test]
    fn test_parse_var_missing_uses_default() {
        assert_eq!(parse_var("BOOK_SHELF_TEST_UNSET", 7u16), 7);
    }
}
