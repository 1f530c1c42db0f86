//! Unified path management for Greene Genie files.
//!
//! ```text
//! ~/.config/greene-genie/        # Config directory (platform specific)
//! ├── config.toml                # Widget configuration
//! └── logs/                      # Application logs
//!     └── greene-genie.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

/// Directory name used under the platform config directory.
pub const APP_DIR_NAME: &str = "greene-genie";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for genie_core::GenieError {
    fn from(err: PathError) -> Self {
        genie_core::GenieError::io(err.to_string())
    }
}

/// Path resolution for the widget, via the `dirs` crate.
pub struct GeniePaths;

impl GeniePaths {
    /// Returns the configuration directory (e.g. `~/.config/greene-genie/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = GeniePaths::config_dir().unwrap();
        assert!(config_dir.ends_with(APP_DIR_NAME));
    }

    #[test]
    fn test_config_file() {
        let config_file = GeniePaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        // Verify it's under config_dir
        let config_dir = GeniePaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_logs_dir() {
        let logs_dir = GeniePaths::logs_dir().unwrap();
        assert!(logs_dir.ends_with("logs"));
        let config_dir = GeniePaths::config_dir().unwrap();
        assert!(logs_dir.starts_with(&config_dir));
    }
}
