use std::fmt::Write;

use tempel_types::{NotificationKind, ThemeIcon, UiState, ViewState};

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const LIGHT_BG: &str = "\x1b[47;30m";
const DARK_BG: &str = "\x1b[40;97m";

/// Text rendering of the paste page
pub fn render(state: &ViewState, color: bool) -> String {
    let paint = |code: &str, text: &str| {
        if color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();

    let theme = match state.theme.icon() {
        ThemeIcon::Sun => "tema: terang (☀)",
        ThemeIcon::Moon => "tema: gelap (☾)",
    };
    let header = format!(" Tempel OCR  [{theme}] ");
    let background = if state.dark_mode() { DARK_BG } else { LIGHT_BG };
    let _ = writeln!(out, "{}", paint(background, &header));

    if state.placeholder_visible {
        let _ = writeln!(
            out,
            "{}",
            paint(DIM, "[ Tempel gambar di sini: ketik `paste` atau `paste <file>` ]")
        );
    } else if let Some(image) = &state.image {
        let size = image
            .dimensions
            .map(|(w, h)| format!(" {w}x{h}"))
            .unwrap_or_default();
        let _ = writeln!(out, "[gambar: {}{}, {} byte]", image.mime, size, image.bytes.len());
    }

    if state.loader_visible {
        let _ = writeln!(out, "... {}", state.loader_text);
    }

    if !state.output_text.is_empty() {
        let _ = writeln!(out, "--- hasil ---");
        let output = if state.ui_state == UiState::Error {
            paint(RED, &state.output_text)
        } else {
            state.output_text.clone()
        };
        let _ = writeln!(out, "{output}");
        let _ = writeln!(out, "-------------");
    }

    let button = |label: &str, enabled: bool| {
        if enabled {
            format!("[{label}]")
        } else {
            paint(DIM, &format!("({label})"))
        }
    };
    let _ = writeln!(
        out,
        "{} {}",
        button("salin", state.copy_enabled),
        button("simpan", state.save_enabled)
    );

    if let Some(notification) = state.notification.as_ref().filter(|n| n.visible) {
        let line = match notification.kind {
            NotificationKind::Success => paint(GREEN, &format!("✔ {}", notification.message)),
            NotificationKind::Error => paint(RED, &format!("✖ {}", notification.message)),
        };
        let _ = writeln!(out, "{line}");
    }

    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempel_types::{Notification, PastedImage, RecognitionResult, ThemePreference};

    use super::*;

    #[test]
    fn idle_page_shows_placeholder_and_disabled_buttons() {
        let page = render(&ViewState::new(ThemePreference::Light), false);
        assert!(page.contains("tema: terang"));
        assert!(page.contains("Tempel gambar di sini"));
        assert!(page.contains("(salin) (simpan)"));
        assert!(!page.contains("--- hasil ---"));
    }

    #[test]
    fn result_page() {
        let mut state = ViewState::new(ThemePreference::Dark);
        state.placeholder_visible = false;
        state.image = Some(PastedImage {
            mime: "image/png".to_string(),
            bytes: Arc::from(vec![0u8; 10]),
            dimensions: Some((64, 32)),
        });
        state.ui_state = UiState::ResultReady;
        state.output_text = "Halo dunia".to_string();
        state.result = Some(RecognitionResult::new("Halo dunia".to_string()));
        state.copy_enabled = true;
        state.save_enabled = true;
        state.notification = Some(Notification {
            id: Default::default(),
            message: "Teks berhasil diekstrak!".to_string(),
            kind: NotificationKind::Success,
            visible: true,
        });

        let page = render(&state, false);
        assert!(page.contains("tema: gelap"));
        assert!(page.contains("[gambar: image/png 64x32, 10 byte]"));
        assert!(page.contains("Halo dunia"));
        assert!(page.contains("[salin] [simpan]"));
        assert!(page.contains("✔ Teks berhasil diekstrak!"));
        assert!(!page.contains("Tempel gambar di sini"));
    }

    #[test]
    fn hidden_notification_is_not_drawn() {
        let mut state = ViewState::new(ThemePreference::Light);
        state.notification = Some(Notification {
            id: Default::default(),
            message: "Gagal menyalin.".to_string(),
            kind: NotificationKind::Error,
            visible: false,
        });
        assert!(!render(&state, false).contains("Gagal menyalin."));
    }

    #[test]
    fn loader_line() {
        let mut state = ViewState::new(ThemePreference::Light);
        state.loader_visible = true;
        state.loader_text = "Mengenali teks... (42%)".to_string();
        assert!(render(&state, false).contains("... Mengenali teks... (42%)"));
    }

    #[test]
    fn color_only_when_asked() {
        let state = ViewState::new(ThemePreference::Light);
        assert!(!render(&state, false).contains('\x1b'));
        assert!(render(&state, true).contains('\x1b'));
    }
}
