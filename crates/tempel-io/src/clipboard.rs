use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use arboard::{Clipboard, ImageData};
use async_trait::async_trait;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use tempel_core::ports::ClipboardWriter;
use tempel_types::{ClipboardItem, ClipboardPayload};

/// Snapshot the system clipboard as a paste payload (blocking)
///
/// Text comes first, then the image, mirroring what browsers hand to a paste
/// handler when both flavors are present.
pub fn read_payload() -> Result<ClipboardPayload> {
    let mut clipboard = Clipboard::new().context("Failed to open clipboard")?;
    let mut items = Vec::new();

    if let Ok(text) = clipboard.get_text()
        && !text.is_empty()
    {
        items.push(ClipboardItem::text(text));
    }

    match clipboard.get_image() {
        Ok(image) => items.push(ClipboardItem::new("image/png", encode_png(&image)?)),
        Err(arboard::Error::ContentNotAvailable) => {}
        Err(e) => tracing::warn!("Failed to read clipboard image: {}", e),
    }

    tracing::debug!("Clipboard payload: {} item(s)", items.len());
    Ok(ClipboardPayload::new(items))
}

/// Treat a file as a single-item paste payload, typed from its content
pub async fn read_file_payload(path: &Path) -> Result<ClipboardPayload> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mime = match tempel_ocr::sniff_mime(&data) {
        Some(mime) => mime,
        None if std::str::from_utf8(&data).is_ok() => "text/plain",
        None => "application/octet-stream",
    };

    Ok(ClipboardPayload::new(vec![ClipboardItem::new(mime, data)]))
}

fn encode_png(image: &ImageData<'_>) -> Result<Vec<u8>> {
    let width = u32::try_from(image.width).context("Clipboard image too wide")?;
    let height = u32::try_from(image.height).context("Clipboard image too tall")?;
    if image.bytes.len() != image.width * image.height * 4 {
        return Err(anyhow!(
            "Clipboard image has {} bytes, expected {}x{} RGBA",
            image.bytes.len(),
            width,
            height
        ));
    }

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(&image.bytes, width, height, image::ExtendedColorType::Rgba8)
        .context("Failed to encode PNG")?;
    Ok(buffer)
}

/// Clipboard writer keeping one handle alive, so X11/Wayland keep serving
/// the copied text after the call returns
#[derive(Default)]
pub struct SystemClipboard {
    handle: Arc<Mutex<Option<Clipboard>>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let handle = self.handle.clone();
        let text = text.to_string();

        tokio::task::spawn_blocking(move || {
            let mut guard = handle
                .lock()
                .map_err(|_| anyhow!("Clipboard lock poisoned"))?;
            if guard.is_none() {
                *guard = Some(Clipboard::new().context("Failed to open clipboard")?);
            }
            let clipboard = guard.as_mut().context("Clipboard unavailable")?;
            clipboard
                .set_text(text)
                .context("Failed to write clipboard text")?;
            Ok(())
        })
        .await?
    }
}
