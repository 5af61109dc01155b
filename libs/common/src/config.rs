//! Client configuration
//!
//! This module loads the endpoint addresses and the token file location,
//! layering `OLYMPIAD_`-prefixed environment variables over built-in
//! defaults.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::path::PathBuf;

/// Client configuration struct
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the auth endpoint
    pub auth_url: String,
    /// Base URL of the olympiads endpoint
    pub olympiads_url: String,
    /// Path of the file holding the persisted bearer token
    pub token_path: PathBuf,
}

impl ClientConfig {
    /// Create a new ClientConfig from environment variables
    ///
    /// # Environment Variables
    /// - `OLYMPIAD_AUTH_URL`: auth endpoint base URL (default: "http://localhost:8080/auth")
    /// - `OLYMPIAD_OLYMPIADS_URL`: olympiads endpoint base URL (default: "http://localhost:8080/olympiads")
    /// - `OLYMPIAD_TOKEN_PATH`: token file path (default: ".olympiad-token")
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("auth_url", "http://localhost:8080/auth")?
            .set_default("olympiads_url", "http://localhost:8080/olympiads")?
            .set_default("token_path", ".olympiad-token")?
            .add_source(Environment::with_prefix("OLYMPIAD"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_client_config_defaults() {
        // SAFETY: serialized against the other env-mutating test.
        unsafe {
            std::env::remove_var("OLYMPIAD_AUTH_URL");
            std::env::remove_var("OLYMPIAD_OLYMPIADS_URL");
            std::env::remove_var("OLYMPIAD_TOKEN_PATH");
        }

        let config = ClientConfig::from_env().expect("Failed to create client config");
        assert_eq!(config.auth_url, "http://localhost:8080/auth");
        assert_eq!(config.olympiads_url, "http://localhost:8080/olympiads");
        assert_eq!(config.token_path, PathBuf::from(".olympiad-token"));
    }

    #[test]
    #[serial]
    fn test_client_config_env_overrides() {
        unsafe {
            std::env::set_var("OLYMPIAD_AUTH_URL", "https://example.com/auth");
            std::env::set_var("OLYMPIAD_TOKEN_PATH", "/tmp/olympiad-token");
        }

        let config = ClientConfig::from_env().expect("Failed to create client config");
        assert_eq!(config.auth_url, "https://example.com/auth");
        assert_eq!(config.token_path, PathBuf::from("/tmp/olympiad-token"));

        unsafe {
            std::env::remove_var("OLYMPIAD_AUTH_URL");
            std::env::remove_var("OLYMPIAD_TOKEN_PATH");
        }
    }
}
