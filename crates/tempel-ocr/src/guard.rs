use crate::engine::{OcrEngine, OcrWorker};
use crate::error::OcrError;
use crate::language::LanguageSet;
use crate::progress::ProgressSender;

/// RAII guard for an OCR worker
///
/// The worker is terminated when the guard is dropped: after success, on an
/// early `?` return, or when the owning future is cancelled.
pub struct WorkerGuard {
    worker: Box<dyn OcrWorker>,
}

impl WorkerGuard {
    pub async fn acquire(
        engine: &dyn OcrEngine,
        progress: ProgressSender,
    ) -> Result<Self, OcrError> {
        let worker = engine.create_worker(progress).await?;
        tracing::debug!("[OCR] Worker acquired");
        Ok(Self { worker })
    }

    /// Load, initialize, then recognize
    pub async fn recognize(
        &mut self,
        languages: &LanguageSet,
        image: &[u8],
    ) -> Result<String, OcrError> {
        self.worker.load_language(languages).await?;
        self.worker.initialize(languages).await?;
        self.worker.recognize(image).await
    }
}

impl Drop for WorkerGuard {
    fn drop(&mut self) {
        self.worker.terminate();
        tracing::debug!("[OCR] Worker released");
    }
}

/// Run one recognition on a fresh worker which is released before returning
pub async fn recognize_once(
    engine: &dyn OcrEngine,
    languages: &LanguageSet,
    image: &[u8],
    progress: ProgressSender,
) -> Result<String, OcrError> {
    let mut guard = WorkerGuard::acquire(engine, progress).await?;
    guard.recognize(languages, image).await
}
