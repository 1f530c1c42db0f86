//! Configuration service implementation.
//!
//! Loads the widget configuration from `config.toml`
//! (`~/.config/greene-genie/config.toml` unless a path is given), writing
//! the defaults on first run so users have a file to edit.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use genie_core::config::WidgetConfig;
use genie_core::{GenieError, Result};

use crate::paths::GeniePaths;

/// Configuration service that loads and caches the widget configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<WidgetConfig>>>,
}

impl ConfigService {
    /// Creates a service for the default config file location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(GeniePaths::config_file()?))
    }

    /// Creates a service reading from an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<WidgetConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load()?;

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Reads and validates the config file.
    ///
    /// - missing file: the defaults are written to disk and returned
    /// - empty file: the defaults are returned
    /// - unparsable or invalid file: an error
    pub fn load(&self) -> Result<WidgetConfig> {
        if !self.path.exists() {
            tracing::info!(path = ?self.path, "Config file not found, writing defaults");
            let config = WidgetConfig::default();
            self.save(&config)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            GenieError::io(format!("Failed to read config file at {:?}: {}", self.path, e))
        })?;

        if content.trim().is_empty() {
            tracing::debug!(path = ?self.path, "Config file is empty, using defaults");
            return Ok(WidgetConfig::default());
        }

        let config: WidgetConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = ?self.path, "Config loaded");
        Ok(config)
    }

    /// Writes `config` as pretty TOML, creating the parent directory.
    pub fn save(&self, config: &WidgetConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                GenieError::io(format!(
                    "Failed to create config directory at {:?}: {}",
                    parent, e
                ))
            })?;
        }

        let toml_string = toml::to_string_pretty(config)?;
        fs::write(&self.path, toml_string).map_err(|e| {
            GenieError::io(format!("Failed to write config file at {:?}: {}", self.path, e))
        })?;

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");
        let service = ConfigService::with_path(&path);

        let config = service.load().expect("Should load defaults");
        assert_eq!(config, WidgetConfig::default());
        assert!(path.exists(), "Defaults should be written to disk");
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "  \n").unwrap();

        let config = ConfigService::with_path(&path).load().unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[window\nwidth = ").unwrap();

        let err = ConfigService::with_path(&path).load().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_invalid_values_are_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[animation]\nsteps = 0\n").unwrap();

        let err = ConfigService::with_path(&path).load().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_cache_until_invalidated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let service = ConfigService::with_path(&path);

        assert_eq!(service.get_config().unwrap().window.width, 357);

        fs::write(&path, "[window]\nwidth = 420\n").unwrap();
        assert_eq!(service.get_config().unwrap().window.width, 357);

        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().window.width, 420);
    }
}
