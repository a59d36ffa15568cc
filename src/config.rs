//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Upstream Lookup ===
    /// Upstream IP provider URL.
    #[serde(default = "default_lookup_url")]
    pub lookup_url: String,

    /// Total outbound request timeout in milliseconds.
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,
}

fn default_port() -> u16 {
    8080
}

fn default_lookup_url() -> String {
    "https://api.ipify.org".to_string()
}

fn default_lookup_timeout_ms() -> u64 {
    5_000
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.lookup_url.is_empty() {
            return Err("LOOKUP_URL must not be empty".to_string());
        }

        if !self.lookup_url.starts_with("http://") && !self.lookup_url.starts_with("https://") {
            return Err("LOOKUP_URL must be an http(s) URL".to_string());
        }

        if self.lookup_timeout_ms == 0 {
            return Err("LOOKUP_TIMEOUT_MS must be greater than zero".to_string());
        }

        Ok(())
    }
}
