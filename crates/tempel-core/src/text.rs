use unicode_normalization::UnicodeNormalization;

/// NFC-normalize OCR output and drop the trailing newline/form feed tesseract appends
pub fn normalize_output(text: &str) -> String {
    let normalized: String = text.nfc().collect();
    normalized.trim_end().to_string()
}
