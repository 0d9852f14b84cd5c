// server/src/config.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use storage::StorageConfig;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8082
}

/// The `server:` section of the YAML config file.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// The whole config file: a `server:` section and a `storage:` section,
/// both optional.
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Loads configuration from the given path, or from `config.yaml` next
/// to the working directory. A missing file means defaults, so the
/// server starts without any setup.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let default_path = PathBuf::from("config.yaml");
    let path_to_use = path.unwrap_or(&default_path);

    if !path_to_use.exists() {
        if path.is_some() {
            return Err(anyhow!("config file {} does not exist", path_to_use.display()));
        }
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path_to_use)
        .with_context(|| format!("failed to read config file {}", path_to_use.display()))?;
    let config: AppConfig = serde_yaml2::from_str(&content)
        .map_err(|e| anyhow!("failed to parse config file {}: {}", path_to_use.display(), e))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::load_config;

    #[test]
    fn missing_default_file_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.server.port, 8082);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn sections_parse_and_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "server:").unwrap();
        writeln!(file, "  port: 9090").unwrap();
        writeln!(file, "storage:").unwrap();
        writeln!(file, "  data_directory: /tmp/facility-admin").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(
            config.storage.data_directory,
            std::path::PathBuf::from("/tmp/facility-admin")
        );
    }
}
