//! Configuration management for the contact application.
//!
//! This module handles loading and validating configuration from environment
//! variables, after giving a `.env` file in the working directory a chance to
//! populate them. Every setting has a default, so an empty environment yields
//! a runnable configuration.

use crate::domain::phone::DEFAULT_REGION;
use crate::domain::MobileFormat;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the contact application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind (default: 127.0.0.1)
    pub host: IpAddr,

    /// TCP port (default: 3000)
    pub port: u16,

    /// JSON document file holding the contacts; `None` keeps them in memory
    pub data_file: Option<PathBuf>,

    /// Directory served for unmatched paths (default: "public")
    pub static_dir: PathBuf,

    /// Session cookie lifetime and flash message expiry in milliseconds
    /// (default: 6000)
    pub session_max_age_ms: u64,

    /// Region whose mobile numbering plan phone numbers must follow
    /// (default: "id-ID")
    pub phone_region: String,

    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `HOST`: Bind address (default: 127.0.0.1)
    /// - `PORT`: Listen port (default: 3000)
    /// - `CONTACTS_DATA_FILE`: Path of the JSON contact collection (default: in-memory)
    /// - `STATIC_DIR`: Static asset directory (default: "public")
    /// - `SESSION_MAX_AGE_MS`: Session lifetime in milliseconds (default: 6000)
    /// - `PHONE_REGION`: Mobile number region (default: "id-ID")
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; variables may come from the real environment.
        let _ = dotenvy::dotenv();

        let host = match env::var("HOST") {
            Ok(val) => val.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "HOST".to_string(),
                reason: format!("Must be an IP address, got: {}", val),
            })?,
            Err(_) => Self::default().host,
        };

        let port = Self::parse_env_u16("PORT", 3000)?;

        let data_file = env::var("CONTACTS_DATA_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        let session_max_age_ms = Self::parse_env_u64("SESSION_MAX_AGE_MS", 6000)?;
        if session_max_age_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: "SESSION_MAX_AGE_MS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let phone_region = env::var("PHONE_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let config = Config {
            host,
            port,
            data_file,
            static_dir,
            session_max_age_ms,
            phone_region,
            log_level,
        };

        // Reject unsupported regions at startup rather than on the first write.
        config.mobile_format()?;

        Ok(config)
    }

    /// Socket address the server listens on.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_millis(self.session_max_age_ms)
    }

    /// The configured region's mobile format.
    pub fn mobile_format(&self) -> ConfigResult<MobileFormat> {
        MobileFormat::for_region(&self.phone_region).map_err(|e| ConfigError::InvalidValue {
            var: "PHONE_REGION".to_string(),
            reason: e.to_string(),
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            data_file: None,
            static_dir: PathBuf::from("public"),
            session_max_age_ms: 6000,
            phone_region: DEFAULT_REGION.to_string(),
            log_level: "info".to_string(),
        }
    }
}
