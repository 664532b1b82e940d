use tempel_ocr::OcrError;

/// Every failure the paste controller reports to the user
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Pasted data contains no image")]
    InvalidPasteContent,

    #[error("A recognition is already running")]
    Busy,

    #[error("Recognition failed: {0}")]
    RecognitionFailure(#[from] OcrError),

    #[error("{action} failed: {source}")]
    ActionFailure {
        action: Action,
        #[source]
        source: anyhow::Error,
    },

    #[error("Recognition cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Copy,
    Save,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Copy => write!(f, "Copy"),
            Action::Save => write!(f, "Save"),
        }
    }
}
