//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `KOMMERCE_API_URL` - Base URL of the backend REST API
//!   (default: `http://localhost:8080/api`)
//! - `KOMMERCE_DATA_DIR` - Directory for cart and session files
//!   (default: `$HOME/.kommerce`, falling back to `./.kommerce`)
//! - `KOMMERCE_TIMEOUT_SECS` - HTTP request timeout in seconds (default: 15)

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default backend endpoint, matching the development server.
const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Default request timeout, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `KOMMERCE_API_URL` is not a valid URL.
    #[error("invalid KOMMERCE_API_URL: {0}")]
    InvalidApiUrl(#[from] url::ParseError),

    /// `KOMMERCE_TIMEOUT_SECS` is not a positive integer.
    #[error("invalid KOMMERCE_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend REST API, without a trailing slash.
    pub api_url: Url,
    /// Directory holding the cart slot and session token.
    pub data_dir: PathBuf,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = match std::env::var("KOMMERCE_API_URL") {
            Ok(raw) => Url::parse(raw.trim_end_matches('/'))?,
            Err(_) => Url::parse(DEFAULT_API_URL)?,
        };

        let data_dir = std::env::var("KOMMERCE_DATA_DIR")
            .map_or_else(|_| default_data_dir(), PathBuf::from);

        let timeout = match std::env::var("KOMMERCE_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout(raw));
                }
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_url,
            data_dir,
            timeout,
        })
    }

    /// Path of the persisted cart slot.
    #[must_use]
    pub fn cart_path(&self) -> PathBuf {
        self.data_dir.join("cart.json")
    }

    /// Path of the persisted session token.
    #[must_use]
    pub fn token_path(&self) -> PathBuf {
        self.data_dir.join("token")
    }

    /// A config pointing at an explicit endpoint and data directory.
    ///
    /// Used by tests; production code goes through [`Self::from_env`].
    #[must_use]
    pub fn with_paths(api_url: Url, data_dir: &Path) -> Self {
        Self {
            api_url,
            data_dir: data_dir.to_path_buf(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// `$HOME/.kommerce`, or `./.kommerce` when `$HOME` is unset.
fn default_data_dir() -> PathBuf {
    std::env::var("HOME").map_or_else(
        |_| PathBuf::from(".kommerce"),
        |home| Path::new(&home).join(".kommerce"),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = ClientConfig::with_paths(
            Url::parse(DEFAULT_API_URL).unwrap(),
            Path::new("/tmp/kommerce-test"),
        );
        assert_eq!(
            config.cart_path(),
            PathBuf::from("/tmp/kommerce-test/cart.json")
        );
        assert_eq!(config.token_path(), PathBuf::from("/tmp/kommerce-test/token"));
    }

    #[test]
    fn test_default_api_url_parses() {
        assert!(Url::parse(DEFAULT_API_URL).is_ok());
    }
}
