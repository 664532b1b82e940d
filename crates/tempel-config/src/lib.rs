use std::env;

use serde::{Deserialize, Serialize};

use self::ocr::OcrConfig;
use self::storage::StorageConfig;
use self::ui::UiConfig;

pub mod ocr;
pub mod storage;
pub mod ui;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub ocr: OcrConfig,
    pub ui: UiConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        Config {
            ocr: OcrConfig::new(),
            ui: UiConfig::new(),
            storage: StorageConfig::new(),
        }
    }
}

pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

pub(crate) fn env_string(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
