use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Platform paste delivered to the drop target
    Paste(ClipboardPayload),
    PasteAreaClicked,
    CopyResult,
    SaveResult,
    ToggleTheme,
    Quit,
}

/// Clipboard contents as handed over by the platform, in platform order
#[derive(Debug, Clone, Default)]
pub struct ClipboardPayload {
    pub items: Vec<ClipboardItem>,
}

impl ClipboardPayload {
    pub fn new(items: Vec<ClipboardItem>) -> Self {
        Self { items }
    }

    /// First item whose content type indicates an image
    pub fn first_image(&self) -> Option<&ClipboardItem> {
        self.items.iter().find(|item| item.is_image())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ClipboardItem {
    pub mime: String,
    pub data: Vec<u8>,
}

impl ClipboardItem {
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new("text/plain", text.into().into_bytes())
    }

    pub fn is_image(&self) -> bool {
        self.mime.contains("image")
    }
}

/// Image shown in place of the paste placeholder
#[derive(Debug, Clone)]
pub struct PastedImage {
    pub mime: String,
    pub bytes: Arc<[u8]>,
    pub dimensions: Option<(u32, u32)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    ImageLoaded,
    /// Recognition in flight, progress in percent
    Recognizing(u8),
    ResultReady,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionResult {
    pub text: String,
    pub is_empty: bool,
}

impl RecognitionResult {
    pub fn new(text: String) -> Self {
        let is_empty = text.trim().is_empty();
        Self { text, is_empty }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn icon(self) -> ThemeIcon {
        match self {
            ThemePreference::Light => ThemeIcon::Sun,
            ThemePreference::Dark => ThemeIcon::Moon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
    pub visible: bool,
}

/// Everything a front end needs to draw the paste page
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub ui_state: UiState,
    pub placeholder_visible: bool,
    pub image: Option<PastedImage>,
    pub loader_visible: bool,
    pub loader_text: String,
    pub output_text: String,
    pub copy_enabled: bool,
    pub save_enabled: bool,
    pub theme: ThemePreference,
    pub notification: Option<Notification>,
    pub result: Option<RecognitionResult>,
}

impl ViewState {
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            placeholder_visible: true,
            theme,
            ..Default::default()
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.theme == ThemePreference::Dark
    }

    /// Result text eligible for copy/save
    pub fn actionable_text(&self) -> Option<&str> {
        self.result
            .as_ref()
            .filter(|result| !result.is_empty)
            .map(|result| result.text.as_str())
    }
}
