use tempel_core::error::{Action, AppError};
use tempel_core::messages;

use crate::paste_ocr::PasteOcrController;

impl PasteOcrController {
    fn actionable_text(&self) -> Option<String> {
        self.view
            .read(|state| state.actionable_text().map(str::to_string))
    }

    /// Put the recognized text on the system clipboard; no-op without a result
    pub async fn copy_result(&self) -> Result<(), AppError> {
        let Some(text) = self.actionable_text() else {
            tracing::debug!("Nothing to copy");
            return Ok(());
        };

        match self.context.clipboard.write_text(&text).await {
            Ok(()) => {
                tracing::info!("Result copied to clipboard ({} chars)", text.chars().count());
                self.notifications.success(messages::COPIED);
                Ok(())
            }
            Err(source) => {
                tracing::error!("Failed to copy result: {:#}", source);
                self.notifications.error(messages::COPY_FAILED);
                Err(AppError::ActionFailure {
                    action: Action::Copy,
                    source,
                })
            }
        }
    }

    /// Save the recognized text as a .txt download; no-op without a result
    pub async fn save_result(&self) -> Result<(), AppError> {
        let Some(text) = self.actionable_text() else {
            tracing::debug!("Nothing to save");
            return Ok(());
        };

        match self
            .context
            .saver
            .save_text(&self.settings.output_file_name, &text)
            .await
        {
            Ok(path) => {
                tracing::info!("Result saved to {}", path.display());
                self.notifications.success(messages::SAVED);
                Ok(())
            }
            Err(source) => {
                tracing::error!("Failed to save result: {:#}", source);
                self.notifications.error(messages::SAVE_FAILED);
                Err(AppError::ActionFailure {
                    action: Action::Save,
                    source,
                })
            }
        }
    }
}
