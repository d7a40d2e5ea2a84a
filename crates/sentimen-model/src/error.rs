use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported artifact version {0}")]
    Version(u32),

    #[error("invalid artifact: {0}")]
    Schema(String),
}
