use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("model/sentimen_pipe.json")
}

/// Location of the trained pipeline artifact.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ModelConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl ModelConfig {
    pub fn new() -> Self {
        let path = env::var("SENTIMEN_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_path());

        Self { path }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
