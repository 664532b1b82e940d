use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use tempel_config::Config;

/// Load a config file; missing fields take their defaults
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

/// Write `config` as pretty JSON, refusing to clobber an existing file
pub fn write_config(path: &Path, config: &Config) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    tracing::info!("Wrote config to {}", path.display());
    Ok(())
}
