//! Path management for finreport
//!
//! Resolves where the optional settings file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `FINREPORT_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/finreport` or `~/.config/finreport`
//! 3. Windows: `%APPDATA%\finreport`

use std::path::{Path, PathBuf};

use crate::error::ReportError;

const APP_DIR: &str = "finreport";
const SETTINGS_FILE: &str = "config.json";

/// Locations used by finreport
#[derive(Debug, Clone)]
pub struct ReportPaths {
    config_dir: PathBuf,
}

impl ReportPaths {
    /// Resolve the configuration directory for the current platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application-data directory is known.
    pub fn new() -> Result<Self, ReportError> {
        let config_dir = match std::env::var_os("FINREPORT_CONFIG_DIR") {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { config_dir })
    }

    /// Use a fixed configuration directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ReportError> {
    let config_base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var_os("HOME")
                .ok_or_else(|| ReportError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ReportError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| ReportError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_config_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var("FINREPORT_CONFIG_DIR", temp_dir.path());
        let paths = ReportPaths::new().unwrap();
        env::remove_var("FINREPORT_CONFIG_DIR");

        assert_eq!(paths.config_dir(), temp_dir.path());
    }
}
