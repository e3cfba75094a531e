//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `BOOKINEST_HOST` - Bind address (default: 127.0.0.1)
//! - `BOOKINEST_PORT` - Listen port (default: 3000)
//! - `BOOKINEST_DATA_DIR` - Directory holding persisted slots (default: .bookinest)
//! - `BOOKINEST_CART_KEY` - Slot key for the cart (default: `bookinest_cart`)
//! - `BOOKINEST_CATALOG_PATH` - JSON catalog of books, slides and FAQ entries
//!   (default: the bundled `content/catalog.json`)
//! - `BOOKINEST_SLIDER_INTERVAL_SECS` - Slider auto-advance period (default: 5)
//! - `BOOKINEST_NOTIFICATION_MS` - Add-to-cart notification lifetime (default: 3000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::cart::CART_SLOT_KEY;
use crate::storage::{StorageError, validate_key};

/// Catalog shipped with the storefront crate.
pub const DEFAULT_CATALOG_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/content/catalog.json");

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    #[error("Invalid cart key: {0}")]
    InvalidCartKey(#[from] StorageError),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Persistent slot storage settings
    pub storage: StorageConfig,
    /// Catalog file
    pub catalog_path: PathBuf,
    /// UI timing settings
    pub ui: UiConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Where the cart slot lives.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding slot files
    pub data_dir: PathBuf,
    /// Slot key for the cart
    pub cart_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".bookinest"),
            cart_key: CART_SLOT_KEY.to_string(),
        }
    }
}

/// Timing of client-visible UI behaviour.
#[derive(Debug, Clone, Copy)]
pub struct UiConfig {
    /// Period between automatic slide changes
    pub slider_interval: Duration,
    /// How long an add-to-cart notification stays visible
    pub notification_duration: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            slider_interval: Duration::from_secs(5),
            notification_duration: Duration::from_millis(3000),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env(&lookup);

        let host = env.parse_or("BOOKINEST_HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = env.parse_or("BOOKINEST_PORT", 3000u16)?;

        let defaults = StorageConfig::default();
        let storage = StorageConfig {
            data_dir: env
                .optional("BOOKINEST_DATA_DIR")
                .map_or(defaults.data_dir, PathBuf::from),
            cart_key: env
                .optional("BOOKINEST_CART_KEY")
                .unwrap_or(defaults.cart_key),
        };
        validate_key(&storage.cart_key).map_err(|e| {
            ConfigError::InvalidEnvVar("BOOKINEST_CART_KEY".to_string(), e.to_string())
        })?;

        let slider_secs = env.parse_or("BOOKINEST_SLIDER_INTERVAL_SECS", 5u64)?;
        if slider_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "BOOKINEST_SLIDER_INTERVAL_SECS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }
        let notification_ms = env.parse_or("BOOKINEST_NOTIFICATION_MS", 3000u64)?;

        Ok(Self {
            host,
            port,
            storage,
            catalog_path: env
                .optional("BOOKINEST_CATALOG_PATH")
                .map_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from),
            ui: UiConfig {
                slider_interval: Duration::from_secs(slider_secs),
                notification_duration: Duration::from_millis(notification_ms),
            },
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
        })
    }

    /// Replace the cart slot key, e.g. from a command-line override.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCartKey` if the slot store would reject
    /// `key`.
    pub fn with_cart_key(mut self, key: String) -> Result<Self, ConfigError> {
        validate_key(&key)?;
        self.storage.cart_key = key;
        Ok(self)
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct Env<'a, F>(&'a F);

impl<F: Fn(&str) -> Option<String>> Env<'_, F> {
    /// Get an optional variable, treating blank values as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    /// Parse a variable, falling back to `default` when unset.
    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(key).map_or(Ok(default), |raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.storage.data_dir, PathBuf::from(".bookinest"));
        assert_eq!(config.storage.cart_key, "bookinest_cart");
        assert_eq!(config.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert!(config.catalog_path.ends_with("content/catalog.json"));
        assert_eq!(config.ui.slider_interval, Duration::from_secs(5));
        assert_eq!(config.ui.notification_duration, Duration::from_millis(3000));
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("BOOKINEST_HOST", "0.0.0.0"),
            ("BOOKINEST_PORT", "8080"),
            ("BOOKINEST_DATA_DIR", "/var/lib/bookinest"),
            ("BOOKINEST_CART_KEY", "cart_v2"),
            ("BOOKINEST_CATALOG_PATH", "catalog.json"),
            ("BOOKINEST_SLIDER_INTERVAL_SECS", "8"),
            ("BOOKINEST_NOTIFICATION_MS", "1500"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/bookinest"));
        assert_eq!(config.storage.cart_key, "cart_v2");
        assert_eq!(config.catalog_path, PathBuf::from("catalog.json"));
        assert_eq!(config.ui.slider_interval, Duration::from_secs(8));
        assert_eq!(config.ui.notification_duration, Duration::from_millis(1500));
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("BOOKINEST_PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "BOOKINEST_PORT"));
    }

    #[test]
    fn test_cart_key_with_path_separator_rejected() {
        let err = config_from(&[("BOOKINEST_CART_KEY", "shop/cart")]).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "BOOKINEST_CART_KEY")
        );

        let err = config_from(&[("BOOKINEST_CART_KEY", ".hidden")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_with_cart_key() {
        let config = config_from(&[]).unwrap().with_cart_key("cart_v2".to_string()).unwrap();
        assert_eq!(config.storage.cart_key, "cart_v2");

        let err = config_from(&[])
            .unwrap()
            .with_cart_key("shop/cart".to_string())
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidCartKey(StorageError::InvalidKey(ref key)) if key == "shop/cart"
        ));
    }

    #[test]
    fn test_zero_slider_interval_rejected() {
        let err = config_from(&[("BOOKINEST_SLIDER_INTERVAL_SECS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config_from(&[("BOOKINEST_PORT", "  "), ("SENTRY_DSN", "")]).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.sentry_dsn.is_none());
    }
}
