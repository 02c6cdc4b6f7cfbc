//! Server configuration.

/// Server configuration.
pub struct Config {
    /// HTTP server bind address.
    pub http_bind_addr: String,

    /// Path to the SQLite database file.
    pub db_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_bind_addr: "127.0.0.1:8080".to_string(),
            db_path: "tasklist.db".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            http_bind_addr: std::env::var("TASKLIST_HTTP_ADDR")
                .unwrap_or(defaults.http_bind_addr),
            db_path: std::env::var("TASKLIST_DB_PATH").unwrap_or(defaults.db_path),
        }
    }
}
