use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tempel_config::Config;
use tempel_core::notification::NotificationService;
use tempel_core::theme::ThemeManager;
use tempel_core::view::View;
use tempel_ocr::{LanguageSet, OcrError};
use tempel_types::ViewState;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::context::ControllerContext;

#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub languages: LanguageSet,
    pub notification_duration: Duration,
    pub output_file_name: String,
}

impl ControllerSettings {
    pub fn from_config(config: &Config) -> Result<Self, OcrError> {
        Ok(Self {
            languages: config.ocr.languages.parse()?,
            notification_duration: Duration::from_millis(config.ui.notification_ms),
            output_file_name: config.ui.output_file_name.clone(),
        })
    }
}

/// Paste an image, recognize it, copy or save the text
///
/// Handlers live in `crate::events`; this file holds state and lifecycle.
pub struct PasteOcrController {
    pub(crate) context: ControllerContext,
    pub(crate) settings: ControllerSettings,
    pub(crate) view: View,
    pub(crate) theme: ThemeManager,
    pub(crate) notifications: NotificationService,
    recognizing: AtomicBool,
    cancel: CancellationToken,
}

impl PasteOcrController {
    /// Build the controller and apply the stored theme
    pub fn create(context: ControllerContext, settings: ControllerSettings) -> Self {
        let theme = ThemeManager::new(context.preferences.clone());
        let preference = theme.load_preference();

        let view = View::new(ViewState::new(preference));
        theme.apply_preference(&view, preference);

        let notifications = NotificationService::new(view.clone(), settings.notification_duration);

        tracing::info!(
            "Paste controller ready (languages: {}, theme: {})",
            settings.languages,
            preference.as_str()
        );

        Self {
            context,
            settings,
            view,
            theme,
            notifications,
            recognizing: AtomicBool::new(false),
            cancel: CancellationToken::new(),
        }
    }

    /// Cancel the in-flight recognition and the pending notification timer
    pub fn dispose(&self) {
        if !self.cancel.is_cancelled() {
            tracing::info!("Disposing paste controller");
        }
        self.cancel.cancel();
        self.notifications.cancel_pending();
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.view.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.view.snapshot()
    }

    pub fn is_recognizing(&self) -> bool {
        self.recognizing.load(Ordering::SeqCst)
    }

    pub(crate) fn cancelled(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Claim the single recognition slot; `None` if it is taken
    pub(crate) fn try_begin_recognition(&self) -> Option<InFlight<'_>> {
        if self.recognizing.swap(true, Ordering::SeqCst) {
            None
        } else {
            Some(InFlight(&self.recognizing))
        }
    }
}

/// Holds the recognition slot until dropped
pub(crate) struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
