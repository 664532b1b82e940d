#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("Invalid language code: {0:?}")]
    InvalidLanguage(String),

    #[error("Language data not installed: {0}")]
    MissingLanguage(String),

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("OCR process failed (exit code {code:?}): {stderr}")]
    Failed { code: Option<i32>, stderr: String },

    #[error("Unsupported or corrupt image: {0}")]
    InvalidImage(String),

    #[error("OCR output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Worker used before languages were initialized")]
    NotInitialized,

    #[error("Worker already terminated")]
    Terminated,
}
