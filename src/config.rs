//! Configuration management for the Contact Manager API.
//!
//! This module handles loading and validating configuration from environment
//! variables. The store handles (database and container names) are resolved
//! once here and held for the lifetime of the process.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Configuration for the Contact Manager API.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document store gateway base URL
    pub store_endpoint: String,

    /// API key used to authenticate against the gateway
    pub store_api_key: String,

    /// Name of the database holding the contact container
    pub database_name: String,

    /// Name of the container contacts are written to
    pub container_name: String,

    /// Address the HTTP server binds to (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,

    /// HTTP request timeout towards the store in seconds (default: 10)
    pub request_timeout: u64,

    /// Maximum number of concurrently served requests (default: 1024)
    pub request_limit: usize,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `STORE_ENDPOINT`: Base URL of the document store gateway
    /// - `STORE_API_KEY`: API key for authentication
    /// - `DATABASE_NAME`: Database holding the contact container
    /// - `CONTAINER_NAME`: Container contacts are written to
    ///
    /// Optional environment variables:
    /// - `BIND_ADDR`: Listen address (default: 127.0.0.1:8080)
    /// - `REQUEST_TIMEOUT`: Store HTTP timeout in seconds (default: 10)
    /// - `REQUEST_LIMIT`: Max concurrent requests (default: 1024)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let store_endpoint = env::var("STORE_ENDPOINT")
            .map_err(|_| ConfigError::MissingVar("STORE_ENDPOINT".to_string()))?;

        let store_api_key = env::var("STORE_API_KEY")
            .map_err(|_| ConfigError::MissingVar("STORE_API_KEY".to_string()))?;

        let database_name = env::var("DATABASE_NAME")
            .map_err(|_| ConfigError::MissingVar("DATABASE_NAME".to_string()))?;

        let container_name = env::var("CONTAINER_NAME")
            .map_err(|_| ConfigError::MissingVar("CONTAINER_NAME".to_string()))?;

        // Validate endpoint format
        if !store_endpoint.starts_with("http://") && !store_endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "STORE_ENDPOINT".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        // Validate API key is not empty
        if store_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "STORE_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        if database_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "DATABASE_NAME".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        if container_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTAINER_NAME".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(val) => val
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "BIND_ADDR".to_string(),
                    reason: format!("Must be a socket address, got: {}", val),
                })?,
            Err(_) => SocketAddr::from(([127, 0, 0, 1], 8080)),
        };

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let request_limit = Self::parse_env_usize("REQUEST_LIMIT", 1024)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            store_endpoint,
            store_api_key,
            database_name,
            container_name,
            bind_addr,
            request_timeout,
            request_limit,
            log_level,
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

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_endpoint: String::new(),
            store_api_key: String::new(),
            database_name: String::new(),
            container_name: String::new(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            request_timeout: 10,
            request_limit: 1024,
            log_level: "info".to_string(),
        }
    }
}
