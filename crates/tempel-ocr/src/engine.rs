use async_trait::async_trait;

use crate::error::OcrError;
use crate::language::LanguageSet;
use crate::progress::ProgressSender;

/// Recognition backend able to hand out single-use workers
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Create a worker reporting progress on `progress`.
    ///
    /// The worker owns the sender; the progress stream ends once the worker is dropped.
    async fn create_worker(
        &self,
        progress: ProgressSender,
    ) -> Result<Box<dyn OcrWorker>, OcrError>;
}

/// One scoped unit of OCR execution
#[async_trait]
pub trait OcrWorker: Send {
    /// Make sure the language models are available
    async fn load_language(&mut self, languages: &LanguageSet) -> Result<(), OcrError>;

    /// Select the loaded models for recognition
    async fn initialize(&mut self, languages: &LanguageSet) -> Result<(), OcrError>;

    /// Recognize text from encoded image bytes (PNG, JPEG, ...)
    async fn recognize(&mut self, image: &[u8]) -> Result<String, OcrError>;

    /// Release everything the worker holds. Called exactly once by [`crate::WorkerGuard`].
    fn terminate(&mut self);
}
