//! CLI configuration file
//!
//! Small TOML file holding the fixed backend settings. The base URL is
//! resolved flag/env first, then this file, then the compiled default; it is
//! never derived from runtime input.

use gitcadence_client::HttpClientConfig;
use gitcadence_core::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Compiled-in backend default
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Optional settings read from the config file
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    /// Base URL of the analysis backend
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,

    /// Connection timeout in seconds
    pub connect_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// HTTP client settings with file overrides applied
    pub fn client_config(&self) -> HttpClientConfig {
        let mut config = HttpClientConfig::default();
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        if let Some(connect_timeout_secs) = self.connect_timeout_secs {
            config.connect_timeout_secs = connect_timeout_secs;
        }
        config
    }
}

/// Default config file location: `~/.gitcadence/config.toml`
pub fn default_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".gitcadence").join("config.toml"))
}

/// Load the configuration file.
///
/// An explicitly given path must exist; the default path is optional and its
/// absence yields an empty configuration.
pub fn load(path: Option<&Path>) -> Result<FileConfig> {
    let (path, required) = match path {
        Some(path) => (expand_tilde(path)?, true),
        None => (default_path()?, false),
    };

    if !path.exists() {
        if required {
            return Err(Error::ConfigNotFound);
        }
        debug!("No config file at {:?}, using defaults", path);
        return Ok(FileConfig::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("Invalid config file {:?}: {}", path, e)))
}

fn expand_tilde(path: &Path) -> Result<PathBuf> {
    if let Ok(rest) = path.strip_prefix("~") {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;
        Ok(home.join(rest))
    } else {
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "base_url = \"http://backend:9000/api\"\ntimeout_secs = 60\n",
        )
        .unwrap();

        let config = load(Some(&path)).unwrap();

        assert_eq!(config.base_url.as_deref(), Some("http://backend:9000/api"));
        assert_eq!(config.client_config().timeout_secs, 60);
        assert_eq!(
            config.client_config().connect_timeout_secs,
            HttpClientConfig::default().connect_timeout_secs
        );
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(Error::ConfigNotFound)));
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = [broken").unwrap();

        assert!(matches!(load(Some(&path)), Err(Error::Config(_))));
    }

    #[test]
    fn test_empty_config_keeps_defaults() {
        let config = FileConfig::default();
        let client_config = config.client_config();

        assert_eq!(
            client_config.timeout_secs,
            HttpClientConfig::default().timeout_secs
        );
        assert_eq!(config.base_url, None);
    }
}
