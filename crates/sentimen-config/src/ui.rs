use std::env;

use serde::{Deserialize, Serialize};

fn default_theme() -> String {
    "neon".to_string()
}

fn default_chart_width() -> usize {
    30
}

fn default_table_rows() -> usize {
    20
}

/// Terminal presentation settings.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Visual theme name ("neon" or "mono")
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Width of the longest distribution bar in characters
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    /// Rows shown in the result table before truncation
    #[serde(default = "default_table_rows")]
    pub table_rows: usize,
}

impl UiConfig {
    pub fn new() -> Self {
        let theme = env::var("SENTIMEN_THEME").unwrap_or_else(|_| default_theme());

        let chart_width = env::var("SENTIMEN_CHART_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 columns default

        Self {
            theme,
            chart_width,
            table_rows: default_table_rows(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            chart_width: default_chart_width(),
            table_rows: default_table_rows(),
        }
    }
}
