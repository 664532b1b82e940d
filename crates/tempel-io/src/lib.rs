pub mod clipboard;
pub mod download;
pub mod paths;
pub mod preference;
