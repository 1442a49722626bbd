//! Path management for Nagarsathi configuration files.
//!
//! Configuration lives in the platform config directory:
//! `~/.config/nagarsathi/config.toml` on Linux,
//! `~/Library/Application Support/nagarsathi/config.toml` on macOS.

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "nagarsathi";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves Nagarsathi paths, optionally under an override base directory.
#[derive(Debug, Clone, Default)]
pub struct NagarPaths {
    base_override: Option<PathBuf>,
}

impl NagarPaths {
    /// Creates a resolver. With `Some(dir)`, every path lives under `dir`
    /// instead of the platform config directory (used by tests).
    pub fn new(base_override: Option<&Path>) -> Self {
        Self {
            base_override: base_override.map(Path::to_path_buf),
        }
    }

    /// Returns the Nagarsathi config directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base_override {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path of `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_base() {
        let paths = NagarPaths::new(Some(Path::new("/tmp/nagar-test")));
        assert_eq!(paths.config_dir().unwrap(), PathBuf::from("/tmp/nagar-test"));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/nagar-test/config.toml")
        );
    }

    #[test]
    fn test_default_ends_with_app_dir() {
        if let Ok(file) = NagarPaths::default().config_file() {
            assert!(file.ends_with("nagarsathi/config.toml"));
        }
    }
}
