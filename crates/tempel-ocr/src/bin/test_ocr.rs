//! Simple OCR test - run with: cargo run -p tempel-ocr --bin test_ocr -- <image> [languages]

use anyhow::{Context, Result};
use tempel_ocr::{LanguageSet, TesseractEngine, progress_channel, recognize_once};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().context("usage: test_ocr <image> [languages]")?;
    let languages: LanguageSet = args.next().as_deref().unwrap_or("ind+ara").parse()?;

    let engine = TesseractEngine::new("tesseract");
    tracing::info!("=== OCR Test ===");

    // 1. Engine info
    tracing::info!("1. {}", engine.version().await?);
    let available = engine.available_languages().await?;
    tracing::info!("   languages: {}", available.join(", "));

    // 2. Load image
    let image = std::fs::read(&path).with_context(|| format!("Failed to read {path}"))?;
    tracing::info!("2. Loaded {} bytes from {}", image.len(), path);

    // 3. Recognize with progress
    let (progress_tx, progress_rx) = progress_channel(32);
    let printer = tokio::spawn(async move {
        while let Ok(event) = progress_rx.recv().await {
            tracing::info!("   [{}] {}%", event.status, event.percent());
        }
    });

    let start = std::time::Instant::now();
    let text = recognize_once(&engine, &languages, &image, progress_tx).await?;
    printer.await?;

    tracing::info!("3. {:?} - {} chars", start.elapsed(), text.chars().count());
    for line in text.lines().filter(|l| !l.trim().is_empty()).take(10) {
        tracing::info!("   > {}", line);
    }

    tracing::info!("=== Done ===");
    Ok(())
}
