use tempel_core::error::AppError;
use tempel_core::messages;
use tempel_core::text::normalize_output;
use tempel_ocr::{OcrError, ProgressReceiver, progress_channel, recognize_once};
use tempel_types::{PastedImage, RecognitionResult, UiState};

use crate::paste_ocr::PasteOcrController;

const PROGRESS_CAPACITY: usize = 64;

impl PasteOcrController {
    /// Recognize `image` on a fresh worker and show the outcome
    pub async fn process_image(&self, image: PastedImage) -> Result<RecognitionResult, AppError> {
        self.view.update(|state| {
            state.ui_state = UiState::Recognizing(0);
            state.loader_visible = true;
            state.loader_text = messages::PROCESSING.to_string();
            state.output_text.clear();
            state.copy_enabled = false;
            state.save_enabled = false;
            state.result = None;
        });

        // Dropping the recognition future releases its worker
        let outcome = tokio::select! {
            outcome = self.recognize(&image.bytes) => outcome.map_err(AppError::from),
            _ = self.cancelled().cancelled() => Err(AppError::Cancelled),
        };

        self.view.update(|state| state.loader_visible = false);

        match outcome {
            Ok(raw) => {
                let result = RecognitionResult::new(normalize_output(&raw));
                self.show_result(&result);
                Ok(result)
            }
            Err(AppError::Cancelled) => {
                tracing::info!("[OCR] Recognition cancelled");
                self.view.update(|state| state.ui_state = UiState::ImageLoaded);
                Err(AppError::Cancelled)
            }
            Err(e) => {
                tracing::error!("[OCR] Failed: {}", e);
                self.view.update(|state| {
                    state.ui_state = UiState::Error;
                    state.output_text = messages::PROCESS_ERROR_OUTPUT.to_string();
                });
                self.notifications.error(messages::PROCESS_FAILED);
                Err(e)
            }
        }
    }

    /// Worker steps and progress relay run side by side; the relay ends when
    /// the worker is released and its progress sender goes with it.
    async fn recognize(&self, image: &[u8]) -> Result<String, OcrError> {
        let (progress_tx, progress_rx) = progress_channel(PROGRESS_CAPACITY);

        let recognition = recognize_once(
            self.context.engine.as_ref(),
            &self.settings.languages,
            image,
            progress_tx,
        );
        let (outcome, ()) = tokio::join!(recognition, self.relay_progress(progress_rx));
        outcome
    }

    async fn relay_progress(&self, progress_rx: ProgressReceiver) {
        while let Ok(event) = progress_rx.recv().await {
            tracing::trace!("[OCR] {} {:.2}", event.status, event.fraction);
            self.view.update(|state| {
                if event.is_recognizing() {
                    let percent = event.percent();
                    state.ui_state = UiState::Recognizing(percent);
                    state.loader_text = messages::recognizing(percent);
                } else {
                    state.loader_text = messages::PROCESSING.to_string();
                }
            });
        }
    }

    fn show_result(&self, result: &RecognitionResult) {
        tracing::info!(
            "[OCR] Got text: {} chars{}",
            result.text.chars().count(),
            if result.is_empty { " (empty)" } else { "" }
        );

        let enabled = !result.is_empty;
        let output = if result.is_empty {
            messages::NO_TEXT.to_string()
        } else {
            result.text.clone()
        };

        self.view.update(|state| {
            state.ui_state = UiState::ResultReady;
            state.output_text = output;
            state.copy_enabled = enabled;
            state.save_enabled = enabled;
            state.result = Some(result.clone());
        });

        if enabled {
            self.notifications.success(messages::EXTRACTED);
        } else {
            self.notifications.success(messages::NO_TEXT);
        }
    }
}
