use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;

pub const FORMAT: &str = "sentimen/tfidf-linear";
pub const VERSION: u32 = 1;

/// On-disk schema of an exported pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub format: String,
    pub version: u32,
    pub vectorizer: VectorizerArtifact,
    pub classifier: ClassifierArtifact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    /// term -> column index
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    pub classes: Vec<String>,
    /// One weight row per class, one column per vocabulary term
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl PipelineArtifact {
    /// Shape checks applied before the artifact is turned into a pipeline.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.format != FORMAT {
            return Err(ArtifactError::Schema(format!(
                "unknown format {:?}, expected {FORMAT:?}",
                self.format
            )));
        }
        if self.version != VERSION {
            return Err(ArtifactError::Version(self.version));
        }

        let n_terms = self.vectorizer.vocabulary.len();
        if self.vectorizer.idf.len() != n_terms {
            return Err(ArtifactError::Schema(format!(
                "idf length {} does not match vocabulary size {n_terms}",
                self.vectorizer.idf.len()
            )));
        }
        for (term, &index) in &self.vectorizer.vocabulary {
            if index >= n_terms {
                return Err(ArtifactError::Schema(format!(
                    "vocabulary index {index} for {term:?} out of range"
                )));
            }
        }

        let n_classes = self.classifier.classes.len();
        if n_classes == 0 {
            return Err(ArtifactError::Schema("artifact has no classes".to_string()));
        }
        if self.classifier.coefficients.len() != n_classes
            || self.classifier.intercepts.len() != n_classes
        {
            return Err(ArtifactError::Schema(format!(
                "expected {n_classes} coefficient rows and intercepts, got {} and {}",
                self.classifier.coefficients.len(),
                self.classifier.intercepts.len()
            )));
        }
        for (class, row) in self.classifier.classes.iter().zip(&self.classifier.coefficients) {
            if row.len() != n_terms {
                return Err(ArtifactError::Schema(format!(
                    "coefficient row for {class:?} has {} columns, expected {n_terms}",
                    row.len()
                )));
            }
        }

        Ok(())
    }
}
