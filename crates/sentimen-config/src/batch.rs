use std::env;

use serde::{Deserialize, Serialize};

fn default_text_column() -> String {
    "Sentence".to_string()
}

fn default_label_column() -> String {
    "Predicted".to_string()
}

/// Column names for batch CSV input and export.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BatchConfig {
    /// Column holding one sentence per row, also used as the export header
    #[serde(default = "default_text_column")]
    pub text_column: String,
    #[serde(default = "default_label_column")]
    pub label_column: String,
}

impl BatchConfig {
    pub fn new() -> Self {
        let text_column =
            env::var("SENTIMEN_TEXT_COLUMN").unwrap_or_else(|_| default_text_column());

        Self {
            text_column,
            label_column: default_label_column(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            text_column: default_text_column(),
            label_column: default_label_column(),
        }
    }
}
