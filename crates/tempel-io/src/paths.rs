use std::path::PathBuf;

use directories::{ProjectDirs, UserDirs};

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("id", "tempel", "Tempel")
}

/// Where saved results go when no directory is configured
pub fn default_download_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Where the preference file lives when no path is configured
pub fn default_preferences_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().join("preferences.json"))
        .unwrap_or_else(|| PathBuf::from("tempel-preferences.json"))
}
