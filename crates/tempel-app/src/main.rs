use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tempel_config::Config;
use tempel_ocr::TesseractEngine;
use tracing_subscriber::EnvFilter;

pub mod context;
pub mod controller;
pub mod events;
pub mod paste_ocr;
pub mod profile;

#[cfg(test)]
mod tests;

use self::context::ControllerContext;
use self::controller::AppController;
use self::paste_ocr::{ControllerSettings, PasteOcrController};

/// Paste an image, get its text back (Indonesian + Arabic OCR)
#[derive(Parser, Debug)]
#[command(name = "tempel", version)]
struct Args {
    /// JSON config file; environment variables are used when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective config to this path and exit
    #[arg(long, value_name = "PATH")]
    init_config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Keep the theme preference in memory only
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let config = match &args.config {
        Some(path) => profile::load_config(path)?,
        None => Config::new(),
    };

    if let Some(path) = &args.init_config {
        return profile::write_config(path, &config);
    }

    let engine = TesseractEngine::new(&config.ocr.tesseract_path)
        .with_page_segmentation(config.ocr.page_segmentation);
    match engine.version().await {
        Ok(version) => tracing::info!("OCR engine: {}", version),
        Err(e) => tracing::warn!("Tesseract unavailable, pasted images will fail: {}", e),
    }

    let settings = ControllerSettings::from_config(&config)?;
    let context = ControllerContext::from_config(&config, engine, args.ephemeral);
    let controller = Arc::new(PasteOcrController::create(context, settings));

    let app = AppController::new(controller);
    let mut tasks = app.spawn_tasks();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task exited"),
                Ok(Err(e)) => tracing::error!("Task failed: {:#}", e),
                Err(e) => tracing::error!("Task panicked: {}", e),
            }
        }
    }

    app.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("Task failed during shutdown: {:#}", e);
        }
    }

    Ok(())
}

/// Logs go to stderr; stdout belongs to the terminal UI
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
