use tempel_types::ThemePreference;

use crate::paste_ocr::PasteOcrController;

impl PasteOcrController {
    pub fn toggle_theme(&self) -> ThemePreference {
        let theme = self.theme.toggle_preference(&self.view);
        tracing::info!("Theme switched to {}", theme.as_str());
        theme
    }
}
