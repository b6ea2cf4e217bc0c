//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export STATIC_DIR="static"
//! export LOG_FORMAT="json"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory holding the exported site bundle (default: `static`)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers (default: `false`)
//!
//! No variable is required; the service starts with defaults alone.

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Directory served for everything outside `/api` and `/health`.
    pub static_dir: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            listen_addr,
            log_level,
            log_format,
            static_dir,
            behind_proxy,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `static_dir` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.static_dir.is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            static_dir: "static".to_string(),
            behind_proxy: false,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();

        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Test empty static dir
        config.static_dir = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
            env::remove_var("STATIC_DIR");
            env::remove_var("BEHIND_PROXY");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.static_dir, "static");
        assert!(!config.behind_proxy);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("STATIC_DIR", "dist");
            env::set_var("BEHIND_PROXY", "true");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.static_dir, "dist");
        assert!(config.behind_proxy);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("STATIC_DIR");
            env::remove_var("BEHIND_PROXY");
        }
    }

    #[test]
    #[serial]
    fn test_behind_proxy_parsing() {
        for (raw, expected) in [("true", true), ("TRUE", true), ("1", true), ("0", false), ("off", false)] {
            // SAFETY: Tests are run serially
            unsafe {
                env::set_var("BEHIND_PROXY", raw);
            }
            assert_eq!(Config::from_env().behind_proxy, expected, "BEHIND_PROXY={raw}");
        }

        // Cleanup
        unsafe {
            env::remove_var("BEHIND_PROXY");
        }
    }
}
