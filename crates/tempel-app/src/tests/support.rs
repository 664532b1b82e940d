//! Mock collaborators for controller tests

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use tempel_core::ports::{ClipboardWriter, MemoryPreferenceStore, PreferenceStore, TextSaver};
use tempel_ocr::{
    LanguageSet, OcrEngine, OcrError, OcrWorker, ProgressEvent, ProgressSender, RECOGNIZING_TEXT,
};
use tempel_types::{ClipboardItem, ClipboardPayload, ViewState};
use tokio::sync::{Notify, watch};
use tokio::time::timeout;

use crate::context::ControllerContext;
use crate::paste_ocr::{ControllerSettings, PasteOcrController};

/// What the next worker does
#[derive(Clone, Debug)]
pub enum Script {
    Text(&'static str),
    FailCreate,
    FailLoad,
    FailRecognize,
}

pub struct MockEngine {
    scripts: Mutex<VecDeque<Script>>,
    gate: Option<Arc<Notify>>,
    early_gate: Option<Arc<Notify>>,
    status_after_half: Option<&'static str>,
    pub created: AtomicUsize,
    pub terminated: Arc<AtomicUsize>,
    pub languages_seen: Arc<Mutex<Vec<String>>>,
}

impl MockEngine {
    /// Workers follow `scripts` in order; the last one repeats
    pub fn new(scripts: Vec<Script>) -> Self {
        Self {
            scripts: Mutex::new(scripts.into()),
            gate: None,
            early_gate: None,
            status_after_half: None,
            created: AtomicUsize::new(0),
            terminated: Arc::new(AtomicUsize::new(0)),
            languages_seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn text(text: &'static str) -> Self {
        Self::new(vec![Script::Text(text)])
    }

    /// Recognition halfway through waits until `gate` is notified
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Recognition waits for `gate` before its first progress event
    pub fn gated_before_recognition(mut self, gate: Arc<Notify>) -> Self {
        self.early_gate = Some(gate);
        self
    }

    /// Extra non-recognizing progress event right after the 50% one
    pub fn with_status_after_half(mut self, status: &'static str) -> Self {
        self.status_after_half = Some(status);
        self
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn terminated(&self) -> usize {
        self.terminated.load(Ordering::SeqCst)
    }

    fn next_script(&self) -> Script {
        let mut scripts = self.scripts.lock().unwrap();
        if scripts.len() > 1 {
            scripts.pop_front().unwrap()
        } else {
            scripts.front().cloned().unwrap_or(Script::Text(""))
        }
    }
}

#[async_trait]
impl OcrEngine for MockEngine {
    async fn create_worker(
        &self,
        progress: ProgressSender,
    ) -> Result<Box<dyn OcrWorker>, OcrError> {
        let script = self.next_script();
        if let Script::FailCreate = script {
            return Err(OcrError::Spawn {
                program: "tesseract".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
            });
        }

        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockWorker {
            script,
            gate: self.gate.clone(),
            early_gate: self.early_gate.clone(),
            status_after_half: self.status_after_half,
            progress,
            terminated: self.terminated.clone(),
            languages_seen: self.languages_seen.clone(),
        }))
    }
}

struct MockWorker {
    script: Script,
    gate: Option<Arc<Notify>>,
    early_gate: Option<Arc<Notify>>,
    status_after_half: Option<&'static str>,
    progress: ProgressSender,
    terminated: Arc<AtomicUsize>,
    languages_seen: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl OcrWorker for MockWorker {
    async fn load_language(&mut self, languages: &LanguageSet) -> Result<(), OcrError> {
        self.languages_seen.lock().unwrap().push(languages.to_string());
        let _ = self
            .progress
            .send(ProgressEvent::new("loading language traineddata", 1.0))
            .await;
        match self.script {
            Script::FailLoad => Err(OcrError::MissingLanguage("ara".to_string())),
            _ => Ok(()),
        }
    }

    async fn initialize(&mut self, _languages: &LanguageSet) -> Result<(), OcrError> {
        Ok(())
    }

    async fn recognize(&mut self, _image: &[u8]) -> Result<String, OcrError> {
        if let Some(gate) = &self.early_gate {
            gate.notified().await;
        }

        let _ = self.progress.send(ProgressEvent::new(RECOGNIZING_TEXT, 0.0)).await;
        let _ = self.progress.send(ProgressEvent::new(RECOGNIZING_TEXT, 0.5)).await;
        if let Some(status) = self.status_after_half {
            let _ = self.progress.send(ProgressEvent::new(status, 0.9)).await;
        }

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match self.script {
            Script::Text(text) => {
                let _ = self.progress.send(ProgressEvent::new(RECOGNIZING_TEXT, 1.0)).await;
                Ok(text.to_string())
            }
            _ => Err(OcrError::Failed {
                code: Some(1),
                stderr: "Error during processing.".to_string(),
            }),
        }
    }

    fn terminate(&mut self) {
        self.terminated.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub fail: bool,
    pub writes: Mutex<Vec<String>>,
}

#[async_trait]
impl ClipboardWriter for RecordingClipboard {
    async fn write_text(&self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            return Err(anyhow!("clipboard owned by another process"));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

impl RecordingClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct RecordingSaver {
    pub fail: bool,
    pub saves: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl TextSaver for RecordingSaver {
    async fn save_text(&self, file_name: &str, text: &str) -> anyhow::Result<PathBuf> {
        if self.fail {
            return Err(anyhow!("disk full"));
        }
        self.saves
            .lock()
            .unwrap()
            .push((file_name.to_string(), text.to_string()));
        Ok(PathBuf::from("/downloads").join(file_name))
    }
}

impl RecordingSaver {
    pub fn saves(&self) -> Vec<(String, String)> {
        self.saves.lock().unwrap().clone()
    }
}

pub struct Harness {
    pub controller: Arc<PasteOcrController>,
    pub engine: Arc<MockEngine>,
    pub clipboard: Arc<RecordingClipboard>,
    pub saver: Arc<RecordingSaver>,
    pub preferences: Arc<MemoryPreferenceStore>,
}

pub struct HarnessBuilder {
    engine: MockEngine,
    clipboard: RecordingClipboard,
    saver: RecordingSaver,
    preferences: MemoryPreferenceStore,
}

impl HarnessBuilder {
    pub fn new(engine: MockEngine) -> Self {
        Self {
            engine,
            clipboard: RecordingClipboard::default(),
            saver: RecordingSaver::default(),
            preferences: MemoryPreferenceStore::new(),
        }
    }

    pub fn failing_clipboard(mut self) -> Self {
        self.clipboard.fail = true;
        self
    }

    pub fn failing_saver(mut self) -> Self {
        self.saver.fail = true;
        self
    }

    pub fn stored_theme(self, theme: &str) -> Self {
        self.preferences.set("theme", theme).unwrap();
        self
    }

    pub fn build(self) -> Harness {
        let engine = Arc::new(self.engine);
        let clipboard = Arc::new(self.clipboard);
        let saver = Arc::new(self.saver);
        let preferences = Arc::new(self.preferences);

        let context = ControllerContext::new(
            engine.clone(),
            clipboard.clone(),
            saver.clone(),
            preferences.clone(),
        );
        let settings = ControllerSettings {
            languages: "ind+ara".parse().unwrap(),
            notification_duration: Duration::from_secs(3),
            output_file_name: "hasil-ocr.txt".to_string(),
        };

        Harness {
            controller: Arc::new(PasteOcrController::create(context, settings)),
            engine,
            clipboard,
            saver,
            preferences,
        }
    }
}

impl Harness {
    pub fn new(engine: MockEngine) -> Self {
        HarnessBuilder::new(engine).build()
    }

    pub fn view(&self) -> ViewState {
        self.controller.snapshot()
    }

    pub fn notification(&self) -> Option<(String, tempel_types::NotificationKind)> {
        self.view()
            .notification
            .map(|n| (n.message, n.kind))
    }
}

/// PNG signature is enough for mocks; nothing decodes it
pub fn image_payload() -> ClipboardPayload {
    ClipboardPayload::new(vec![
        ClipboardItem::text("https://example.com/struk.png"),
        ClipboardItem::new("image/png", b"\x89PNG\r\n\x1a\nfake".to_vec()),
    ])
}

pub fn text_payload() -> ClipboardPayload {
    ClipboardPayload::new(vec![ClipboardItem::text("cuma teks")])
}

/// Wait until the view satisfies `pred`
pub async fn wait_for(rx: &mut watch::Receiver<ViewState>, pred: impl Fn(&ViewState) -> bool) {
    timeout(Duration::from_secs(2), async {
        loop {
            if pred(&rx.borrow_and_update()) {
                return;
            }
            rx.changed().await.unwrap();
        }
    })
    .await
    .expect("Timeout waiting for view state");
}
