use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::env_string;

/// Where results and preferences land. `None` means the platform default.
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct StorageConfig {
    pub download_dir: Option<PathBuf>,
    pub preferences_path: Option<PathBuf>,
}

impl StorageConfig {
    pub fn new() -> Self {
        Self {
            download_dir: env_string("DOWNLOAD_DIR").map(PathBuf::from),
            preferences_path: env_string("PREFERENCES_PATH").map(PathBuf::from),
        }
    }
}
