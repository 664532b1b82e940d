use serde::{Deserialize, Serialize};

use crate::{env_parse, env_string};

fn default_languages() -> String {
    "ind+ara".to_string()
}

fn default_tesseract_path() -> String {
    "tesseract".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract language models joined with `+`
    #[serde(default = "default_languages")]
    pub languages: String,
    #[serde(default = "default_tesseract_path")]
    pub tesseract_path: String,
    /// Tesseract page segmentation mode (`--psm`)
    pub page_segmentation: Option<u8>,
}

impl OcrConfig {
    pub fn new() -> Self {
        Self {
            languages: env_string("TEMPEL_OCR_LANGUAGES").unwrap_or_else(default_languages),
            tesseract_path: env_string("TESSERACT_PATH").unwrap_or_else(default_tesseract_path),
            page_segmentation: env_parse("TEMPEL_PSM"),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            tesseract_path: default_tesseract_path(),
            page_segmentation: None,
        }
    }
}
