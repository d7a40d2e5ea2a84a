use sentimen_types::SentimentLabel;

/// Pre-trained classification backend.
///
/// Returns one label per input in input order. Implementations forward the
/// cleaned text as-is: no retraining, no thresholding, no reordering.
pub trait SentimentClassifier: Send + Sync {
    fn predict(&self, cleaned: &[String]) -> Result<Vec<SentimentLabel>, ClassifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("classifier backend error: {0}")]
    Backend(String),
}
