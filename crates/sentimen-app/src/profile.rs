use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use sentimen_config::Config;

const REPO_CONFIG: &str = "sentimen.json";

/// Resolve the effective config.
///
/// An explicitly passed file must load, a `sentimen.json` in the working
/// directory is picked up when present, and otherwise the defaults apply
/// with environment overrides.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        tracing::info!("Loading config from {}", path.display());
        return read_config_file(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    let repo_config = Path::new(REPO_CONFIG);
    if repo_config.exists() {
        tracing::info!("Loading repo config {REPO_CONFIG}");
        return read_config_file(repo_config)
            .with_context(|| format!("failed to load config {REPO_CONFIG}"));
    }

    Ok(Config::new())
}

fn read_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}
