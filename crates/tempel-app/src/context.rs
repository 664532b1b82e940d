use std::sync::Arc;

use tempel_config::Config;
use tempel_core::ports::{ClipboardWriter, MemoryPreferenceStore, PreferenceStore, TextSaver};
use tempel_io::clipboard::SystemClipboard;
use tempel_io::download::DownloadSaver;
use tempel_io::paths::{default_download_dir, default_preferences_path};
use tempel_io::preference::JsonPreferenceStore;
use tempel_ocr::{OcrEngine, TesseractEngine};

/// Collaborators of the paste controller
#[derive(Clone)]
pub struct ControllerContext {
    pub engine: Arc<dyn OcrEngine>,
    pub clipboard: Arc<dyn ClipboardWriter>,
    pub saver: Arc<dyn TextSaver>,
    pub preferences: Arc<dyn PreferenceStore>,
}

impl ControllerContext {
    pub fn new(
        engine: Arc<dyn OcrEngine>,
        clipboard: Arc<dyn ClipboardWriter>,
        saver: Arc<dyn TextSaver>,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Self {
        Self {
            engine,
            clipboard,
            saver,
            preferences,
        }
    }

    /// Real platform adapters; `ephemeral` keeps preferences in memory
    pub fn from_config(config: &Config, engine: TesseractEngine, ephemeral: bool) -> Self {
        let download_dir = config
            .storage
            .download_dir
            .clone()
            .unwrap_or_else(default_download_dir);

        let preferences: Arc<dyn PreferenceStore> = if ephemeral {
            Arc::new(MemoryPreferenceStore::new())
        } else {
            let path = config
                .storage
                .preferences_path
                .clone()
                .unwrap_or_else(default_preferences_path);
            tracing::debug!("Preferences at {}", path.display());
            Arc::new(JsonPreferenceStore::new(path))
        };

        Self::new(
            Arc::new(engine),
            Arc::new(SystemClipboard::new()),
            Arc::new(DownloadSaver::new(download_dir)),
            preferences,
        )
    }
}
