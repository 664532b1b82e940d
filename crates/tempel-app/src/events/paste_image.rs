use std::sync::Arc;

use tempel_core::error::AppError;
use tempel_core::messages;
use tempel_types::{ClipboardPayload, PastedImage, RecognitionResult, UiState};

use crate::paste_ocr::PasteOcrController;

impl PasteOcrController {
    /// Paste delivered to the drop target
    ///
    /// Takes the first image item and runs recognition on it. Failures are
    /// already shown to the user when this returns `Err`.
    pub async fn handle_paste(
        &self,
        payload: ClipboardPayload,
    ) -> Result<RecognitionResult, AppError> {
        let Some(item) = payload.first_image() else {
            tracing::warn!("Pasted data has no image ({} item(s))", payload.items.len());
            self.notifications.error(messages::NOT_AN_IMAGE);
            return Err(AppError::InvalidPasteContent);
        };

        let Some(_in_flight) = self.try_begin_recognition() else {
            tracing::warn!("Paste ignored, recognition still running");
            self.notifications.error(messages::STILL_PROCESSING);
            return Err(AppError::Busy);
        };

        let image = PastedImage {
            mime: item.mime.clone(),
            dimensions: tempel_ocr::probe_dimensions(&item.data),
            bytes: Arc::from(item.data.as_slice()),
        };
        tracing::info!(
            "Image pasted: {} ({} bytes, {:?})",
            image.mime,
            image.bytes.len(),
            image.dimensions
        );

        self.view.update(|state| {
            state.ui_state = UiState::ImageLoaded;
            state.image = Some(image.clone());
            state.placeholder_visible = false;
        });

        self.process_image(image).await
    }

    /// Click on the drop target: only a hint, the platform delivers the paste
    pub fn handle_click(&self) {
        self.notifications.success(messages::PASTE_HINT);
    }
}
