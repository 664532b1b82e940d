use std::path::PathBuf;
use std::process::{Output, Stdio};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::engine::{OcrEngine, OcrWorker};
use crate::error::OcrError;
use crate::image_info::sniff_mime;
use crate::language::LanguageSet;
use crate::progress::{ProgressEvent, ProgressSender, RECOGNIZING_TEXT};

const INITIALIZING_TESSERACT: &str = "initializing tesseract";
const LOADING_LANGUAGE: &str = "loading language traineddata";
const INITIALIZING_API: &str = "initializing api";

/// OCR engine backed by the `tesseract` command line tool
#[derive(Clone, Debug)]
pub struct TesseractEngine {
    command: TesseractCommand,
}

impl TesseractEngine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            command: TesseractCommand {
                program: program.into(),
                page_segmentation: None,
            },
        }
    }

    pub fn with_page_segmentation(mut self, psm: Option<u8>) -> Self {
        self.command.page_segmentation = psm;
        self
    }

    /// First line of `tesseract --version`
    pub async fn version(&self) -> Result<String, OcrError> {
        self.command.version().await
    }

    /// Installed language models
    pub async fn available_languages(&self) -> Result<Vec<String>, OcrError> {
        self.command.list_languages().await
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    async fn create_worker(
        &self,
        progress: ProgressSender,
    ) -> Result<Box<dyn OcrWorker>, OcrError> {
        let _ = progress
            .send(ProgressEvent::new(INITIALIZING_TESSERACT, 0.0))
            .await;
        let version = self.command.version().await?;
        tracing::debug!("[OCR] Using {}", version);
        let _ = progress
            .send(ProgressEvent::new(INITIALIZING_TESSERACT, 1.0))
            .await;

        Ok(Box::new(TesseractWorker {
            command: self.command.clone(),
            progress,
            loaded: None,
            initialized: None,
            terminated: false,
        }))
    }
}

/// A worker only holds selected languages; every recognition is its own
/// child process, killed if the recognition future is dropped.
struct TesseractWorker {
    command: TesseractCommand,
    progress: ProgressSender,
    loaded: Option<LanguageSet>,
    initialized: Option<LanguageSet>,
    terminated: bool,
}

impl TesseractWorker {
    async fn report(&self, status: &str, fraction: f32) {
        let _ = self.progress.send(ProgressEvent::new(status, fraction)).await;
    }

    fn ensure_alive(&self) -> Result<(), OcrError> {
        if self.terminated {
            Err(OcrError::Terminated)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl OcrWorker for TesseractWorker {
    async fn load_language(&mut self, languages: &LanguageSet) -> Result<(), OcrError> {
        self.ensure_alive()?;
        self.report(LOADING_LANGUAGE, 0.0).await;

        let available = self.command.list_languages().await?;
        let missing = languages.missing_from(&available);
        if !missing.is_empty() {
            return Err(OcrError::MissingLanguage(missing.join("+")));
        }

        self.loaded = Some(languages.clone());
        self.report(LOADING_LANGUAGE, 1.0).await;
        Ok(())
    }

    async fn initialize(&mut self, languages: &LanguageSet) -> Result<(), OcrError> {
        self.ensure_alive()?;
        if self.loaded.as_ref() != Some(languages) {
            return Err(OcrError::NotInitialized);
        }

        self.report(INITIALIZING_API, 0.0).await;
        self.initialized = Some(languages.clone());
        self.report(INITIALIZING_API, 1.0).await;
        Ok(())
    }

    async fn recognize(&mut self, image: &[u8]) -> Result<String, OcrError> {
        self.ensure_alive()?;
        let languages = self.initialized.clone().ok_or(OcrError::NotInitialized)?;
        if sniff_mime(image).is_none() {
            return Err(OcrError::InvalidImage(format!(
                "{} bytes of unknown format",
                image.len()
            )));
        }

        self.report(RECOGNIZING_TEXT, 0.0).await;
        let text = self.command.recognize(&languages, image).await?;
        self.report(RECOGNIZING_TEXT, 1.0).await;

        tracing::debug!("[OCR] Recognized {} chars", text.chars().count());
        Ok(text)
    }

    fn terminate(&mut self) {
        self.terminated = true;
        self.loaded = None;
        self.initialized = None;
    }
}

#[derive(Clone, Debug)]
struct TesseractCommand {
    program: PathBuf,
    page_segmentation: Option<u8>,
}

impl TesseractCommand {
    async fn version(&self) -> Result<String, OcrError> {
        let output = self.run(&["--version".to_string()], None).await?;
        // Older releases print the banner on stderr
        let banner = if output.stdout.is_empty() {
            &output.stderr
        } else {
            &output.stdout
        };
        Ok(String::from_utf8_lossy(banner)
            .lines()
            .next()
            .unwrap_or("tesseract")
            .trim()
            .to_string())
    }

    async fn list_languages(&self) -> Result<Vec<String>, OcrError> {
        let output = self.run(&["--list-langs".to_string()], None).await?;
        Ok(parse_language_list(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn recognize(&self, languages: &LanguageSet, image: &[u8]) -> Result<String, OcrError> {
        let mut args = vec![
            "stdin".to_string(),
            "stdout".to_string(),
            "-l".to_string(),
            languages.to_string(),
        ];
        if let Some(psm) = self.page_segmentation {
            args.push("--psm".to_string());
            args.push(psm.to_string());
        }

        let output = self.run(&args, Some(image.to_vec())).await?;
        Ok(String::from_utf8(output.stdout)?)
    }

    async fn run(&self, args: &[String], input: Option<Vec<u8>>) -> Result<Output, OcrError> {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = command.spawn().map_err(|source| OcrError::Spawn {
            program: self.program.display().to_string(),
            source,
        })?;

        // Feed stdin from a separate task so a full stdout pipe can't deadlock us
        let writer = match (input, child.stdin.take()) {
            (Some(bytes), Some(mut stdin)) => Some(tokio::spawn(async move {
                stdin.write_all(&bytes).await?;
                stdin.shutdown().await
            })),
            _ => None,
        };

        let output = child.wait_with_output().await?;

        if let Some(writer) = writer
            && let Ok(Err(e)) = writer.await
        {
            tracing::debug!("[OCR] Writing image to tesseract stdin failed: {}", e);
        }

        if !output.status.success() {
            return Err(OcrError::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

/// Parse `tesseract --list-langs` output
fn parse_language_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("List of available languages"))
        .map(str::to_string)
        .collect()
}
