//! Server configuration, loaded from environment variables at startup.

use std::path::PathBuf;

/// Runtime configuration for smscode-server.
///
/// Every field has a default, so the server runs with no environment
/// variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"127.0.0.1:65530"`).
    pub bind_address: String,

    /// Messages store to read (default: `~/Library/Messages/chat.db`).
    /// `None` only when no override is set and no home directory exists.
    pub messages_db: Option<PathBuf>,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated CORS origin allow-list; `None` sends no CORS headers.
    pub cors_allowed_origins: Option<String>,
}

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:65530";

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("SMSCODE_BIND", DEFAULT_BIND_ADDRESS),
            messages_db: std::env::var_os("SMSCODE_MESSAGES_DB")
                .map(PathBuf::from)
                .or_else(smscode_core::store::default_store_path),
            log_level: env_or("SMSCODE_LOG", "info"),
            log_json: std::env::var("SMSCODE_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            cors_allowed_origins: std::env::var("SMSCODE_CORS_ORIGINS")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_owned(),
            messages_db: smscode_core::store::default_store_path(),
            log_level: "info".to_owned(),
            log_json: false,
            cors_allowed_origins: None,
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
