//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` (see [`NagarPaths`]) and
//! layers environment overrides on top:
//!
//! | variable | field |
//! |---|---|
//! | `NAGAR_LOG_URL` | `log.endpoint` |
//! | `NAGAR_LOG_API_KEY` | `log.api_key` |
//! | `NAGAR_UPLOAD_URL` | `upload.endpoint` |

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use nagar_core::config::RootConfig;
use nagar_core::error::{NagarError, Result};

use crate::paths::NagarPaths;

pub const ENV_LOG_URL: &str = "NAGAR_LOG_URL";
pub const ENV_LOG_API_KEY: &str = "NAGAR_LOG_API_KEY";
pub const ENV_UPLOAD_URL: &str = "NAGAR_UPLOAD_URL";

/// Configuration service that loads and caches the root configuration.
///
/// A missing file yields the defaults. An unreadable or invalid file also
/// yields the defaults, with a warning, so a typo never keeps the chat from
/// starting.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file; `None` resolves the platform path on load.
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the platform `config.toml`.
    ///
    /// The file is loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading `path` instead of the platform file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    pub fn get_config(&self) -> RootConfig {
        if let Some(cached) = self
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return cached.clone();
        }

        let mut loaded = match self.load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to default configuration");
                RootConfig::default()
            }
        };
        apply_env_overrides(&mut loaded, |key| std::env::var(key).ok());

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(loaded.clone());
        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Path of the file this service reads.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => NagarPaths::default()
                .config_file()
                .map_err(|e| NagarError::config(e.to_string())),
        }
    }

    fn load_config(&self) -> Result<RootConfig> {
        let path = self.config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: RootConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the `NAGAR_*` overrides. Empty values are ignored.
pub fn apply_env_overrides(config: &mut RootConfig, lookup: impl Fn(&str) -> Option<String>) {
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(url) = lookup(ENV_LOG_URL) {
        config.log.endpoint = Some(url);
    }
    if let Some(key) = lookup(ENV_LOG_API_KEY) {
        config.log.api_key = Some(key);
    }
    if let Some(url) = lookup(ENV_UPLOAD_URL) {
        config.upload.endpoint = Some(url);
    }
}
