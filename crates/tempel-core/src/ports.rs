//! Seams to the platform, implemented in `tempel-io` and mocked in tests

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;

#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

#[async_trait]
pub trait TextSaver: Send + Sync {
    /// Store `text` as a UTF-8 file, returning where it landed
    async fn save_text(&self, file_name: &str, text: &str) -> anyhow::Result<PathBuf>;
}

/// Durable string key-value storage
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Process-lifetime store for `--ephemeral` runs and tests
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| anyhow!("preference store lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow!("preference store lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
