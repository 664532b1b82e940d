//! User-facing strings (Indonesian)

pub const PASTE_HINT: &str = "Sekarang tempel gambar Anda (Ctrl+V atau tahan & tempel).";
pub const NOT_AN_IMAGE: &str = "Data yang ditempel bukan gambar!";
pub const STILL_PROCESSING: &str = "Gambar sebelumnya masih diproses.";

pub const PROCESSING: &str = "Memproses...";
pub const NO_TEXT: &str = "Tidak ada teks yang terdeteksi.";
pub const EXTRACTED: &str = "Teks berhasil diekstrak!";
pub const PROCESS_ERROR_OUTPUT: &str = "Terjadi kesalahan saat memproses gambar.";
pub const PROCESS_FAILED: &str = "Gagal memproses gambar.";

pub const COPIED: &str = "Hasil berhasil disalin!";
pub const COPY_FAILED: &str = "Gagal menyalin.";
pub const SAVED: &str = "File .txt berhasil disimpan!";
pub const SAVE_FAILED: &str = "Gagal menyimpan file.";

pub fn recognizing(percent: u8) -> String {
    format!("Mengenali teks... ({percent}%)")
}
