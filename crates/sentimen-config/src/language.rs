use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_accept() -> String {
    "ind".to_string()
}

fn default_min_confidence() -> f64 {
    0.0
}

/// Language gate applied to single-text input before classification.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LanguageConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// ISO 639-3 code the gate accepts
    #[serde(default = "default_accept")]
    pub accept: String,
    /// Detections below this confidence count as undetermined
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
}

impl LanguageConfig {
    pub fn new() -> Self {
        let accept = env::var("SENTIMEN_ACCEPT_LANGUAGE").unwrap_or_else(|_| default_accept());

        let min_confidence = env::var("SENTIMEN_MIN_CONFIDENCE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.0); // rely on the detector's own reliability flag

        Self {
            enabled: default_enabled(),
            accept,
            min_confidence,
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            accept: default_accept(),
            min_confidence: default_min_confidence(),
        }
    }
}
