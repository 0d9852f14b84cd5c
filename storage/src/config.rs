// storage/src/config.rs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_directory() -> PathBuf {
    PathBuf::from("./data")
}

/// Configuration for the embedded store. Mirrors the `storage:` section
/// of the server's YAML config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_directory")]
    pub data_directory: PathBuf,
    #[serde(default)]
    pub cache_capacity: Option<u64>,
    #[serde(default)]
    pub use_compression: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            data_directory: default_data_directory(),
            cache_capacity: None,
            use_compression: false,
        }
    }
}
