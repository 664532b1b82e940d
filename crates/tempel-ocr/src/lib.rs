mod engine;
mod error;
mod guard;
mod image_info;
mod language;
mod progress;
mod tesseract;

pub use engine::{OcrEngine, OcrWorker};
pub use error::OcrError;
pub use guard::{WorkerGuard, recognize_once};
pub use image_info::{probe_dimensions, sniff_mime};
pub use language::LanguageSet;
pub use progress::{
    ProgressEvent, ProgressReceiver, ProgressSender, RECOGNIZING_TEXT, progress_channel,
};
pub use tesseract::TesseractEngine;
