use serde::{Deserialize, Serialize};

use self::batch::BatchConfig;
use self::language::LanguageConfig;
use self::model::ModelConfig;
use self::ui::UiConfig;

pub mod batch;
pub mod language;
pub mod model;
pub mod ui;

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: ModelConfig,
    pub language: LanguageConfig,
    pub batch: BatchConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults with `SENTIMEN_*` environment overrides applied
    pub fn new() -> Self {
        Config {
            model: ModelConfig::new(),
            language: LanguageConfig::new(),
            batch: BatchConfig::new(),
            ui: UiConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            model: ModelConfig::default(),
            language: LanguageConfig::default(),
            batch: BatchConfig::default(),
            ui: UiConfig::default(),
        }
    }
}
