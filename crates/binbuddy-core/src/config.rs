use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
///
/// This gets loaded from config file, env vars, and CLI args.
/// Priority: CLI > Env > File > Defaults (like a sensible person would do)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub photos: PhotoConfig,
}

impl Config {
    /// Load config from the default location, or fall back to defaults when
    /// no file exists yet.
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)
                .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to disk
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path()?;

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, contents)?;
        Ok(())
    }

    /// Get the config file path
    /// Uses XDG on Linux/macOS, AppData on Windows
    pub fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("binbuddy");

        Ok(config_dir.join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Base URL of the classification service
    #[serde(default = "default_endpoint_url")]
    pub url: String,
}

fn default_endpoint_url() -> String {
    // Flask development default; real deployments point this elsewhere
    "http://127.0.0.1:5000".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoConfig {
    /// Directory the scan screen picks photos from
    #[serde(default = "default_photos_dir")]
    pub dir: PathBuf,
}

fn default_photos_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join("Pictures"))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            dir: default_photos_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint.url, "http://127.0.0.1:5000");
        assert!(!config.photos.dir.as_os_str().is_empty());
    }

    #[test]
    fn test_empty_file_fills_in_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.endpoint.url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.endpoint.url = "http://10.0.0.7:5000".to_string();

        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("url"));
        assert!(toml.contains("dir"));

        let back: Config = toml::from_str(&toml).unwrap();
        assert_eq!(back.endpoint.url, "http://10.0.0.7:5000");
    }
}
