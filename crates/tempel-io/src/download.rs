use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use tempel_core::ports::TextSaver;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

const MAX_SUFFIX: usize = 9999;

/// Saves results into a download directory without overwriting earlier ones
pub struct DownloadSaver {
    dir: PathBuf,
}

impl DownloadSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl TextSaver for DownloadSaver {
    async fn save_text(&self, file_name: &str, text: &str) -> Result<PathBuf> {
        let file_name = plain_file_name(file_name)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        // create_new makes the existence check and the creation one step
        for name in candidate_names(file_name) {
            let path = self.dir.join(name);
            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to create {}", path.display()));
                }
            };

            file.write_all(text.as_bytes())
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            file.flush()
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;

            tracing::info!("Saved {} bytes to {}", text.len(), path.display());
            return Ok(path);
        }

        bail!("No free name for {} in {}", file_name, self.dir.display())
    }
}

/// Only a bare file name may be joined onto the download directory
fn plain_file_name(file_name: &str) -> Result<&str> {
    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(file_name),
        _ => bail!("Output file name must not contain a path: {:?}", file_name),
    }
}

/// `name.txt`, then `name (1).txt`, `name (2).txt`, ... like a browser download
fn candidate_names(file_name: &str) -> impl Iterator<Item = String> {
    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    let extension = name
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    std::iter::once(file_name.to_string())
        .chain((1..=MAX_SUFFIX).map(move |n| format!("{stem} ({n}){extension}")))
}
