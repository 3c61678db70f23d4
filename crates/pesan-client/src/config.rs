//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the client starts with zero configuration
//! for local development (the provider will still reject sign-in without a
//! real API key).

use std::path::PathBuf;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the identity provider's REST API.
    /// Env: `PESAN_AUTH_URL`
    /// Default: `https://identitytoolkit.googleapis.com`
    pub auth_url: String,

    /// API key appended to the sign-in endpoint.
    /// Env: `PESAN_API_KEY`
    /// Default: empty (sign-in will fail against the real provider).
    pub api_key: String,

    /// Override for the local storage directory.
    /// Env: `PESAN_DATA_DIR`
    /// Default: `None` (platform data directory).
    pub data_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_url: "https://identitytoolkit.googleapis.com".to_string(),
            api_key: String::new(),
            data_dir: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("PESAN_AUTH_URL") {
            if url.trim().is_empty() {
                tracing::warn!("PESAN_AUTH_URL is empty, using default");
            } else {
                config.auth_url = url;
            }
        }

        if let Ok(key) = std::env::var("PESAN_API_KEY") {
            config.api_key = key;
        }

        if let Ok(dir) = std::env::var("PESAN_DATA_DIR") {
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.auth_url, "https://identitytoolkit.googleapis.com");
        assert!(config.api_key.is_empty());
        assert!(config.data_dir.is_none());
    }
}
