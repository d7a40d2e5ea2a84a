use crate::classify::ClassifyError;

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("classifier returned {got} labels for {expected} inputs")]
    LabelCount { expected: usize, got: usize },
}
