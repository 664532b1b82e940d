use serde::{Deserialize, Serialize};

use crate::{env_parse, env_string};

fn default_notification_ms() -> u64 {
    3000
}

fn default_output_file_name() -> String {
    "hasil-ocr.txt".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UiConfig {
    /// How long a notification stays visible
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,
}

impl UiConfig {
    pub fn new() -> Self {
        Self {
            notification_ms: env_parse("NOTIFICATION_MS").unwrap_or_else(default_notification_ms),
            output_file_name: env_string("OUTPUT_FILE_NAME")
                .unwrap_or_else(default_output_file_name),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_ms: default_notification_ms(),
            output_file_name: default_output_file_name(),
        }
    }
}
