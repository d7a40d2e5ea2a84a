use std::collections::HashMap;
use std::path::Path;

use sentimen_core::classify::{ClassifyError, SentimentClassifier};
use sentimen_types::SentimentLabel;

use crate::artifact::PipelineArtifact;
use crate::error::ArtifactError;

/// TF-IDF vectorizer plus linear classifier, reconstructed from an exported
/// artifact. Read-only after load; safe to share behind an `Arc` or a `Box`.
#[derive(Debug)]
pub struct SentimentPipeline {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    classes: Vec<SentimentLabel>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl SentimentPipeline {
    /// Load and validate an artifact from disk.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        tracing::info!("Loading sentiment pipeline from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let pipeline = Self::from_json(&json)?;
        tracing::info!(
            "Loaded pipeline: {} terms, {} classes",
            pipeline.vocabulary.len(),
            pipeline.classes.len()
        );
        Ok(pipeline)
    }

    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let artifact: PipelineArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: PipelineArtifact) -> Result<Self, ArtifactError> {
        artifact.validate()?;

        let classes = artifact
            .classifier
            .classes
            .iter()
            .map(|name| {
                SentimentLabel::parse(name)
                    .ok_or_else(|| ArtifactError::Schema(format!("unknown class {name:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            vocabulary: artifact.vectorizer.vocabulary,
            idf: artifact.vectorizer.idf,
            classes,
            coefficients: artifact.classifier.coefficients,
            intercepts: artifact.classifier.intercepts,
        })
    }

    pub fn term_count(&self) -> usize {
        self.vocabulary.len()
    }

    /// Classes in artifact order
    pub fn classes(&self) -> &[SentimentLabel] {
        &self.classes
    }

    /// Sparse TF-IDF vector of one cleaned text: term counts times idf,
    /// L2-normalized to unit length. Out-of-vocabulary terms contribute
    /// nothing; an empty vector is returned for all-unknown input.
    fn vectorize(&self, cleaned: &str) -> Vec<(usize, f64)> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in cleaned.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index]))
            .collect();
        // Fixed summation order keeps scores bit-for-bit reproducible.
        vector.sort_by_key(|&(index, _)| index);

        let norm: f64 = vector.iter().map(|&(_, value)| value * value).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, value) in vector.iter_mut() {
                *value /= norm;
            }
        }

        vector
    }

    /// Highest-scoring class for one cleaned text. Ties resolve to the
    /// lowest class index. All-unknown input scores the intercepts alone.
    fn decide(&self, cleaned: &str) -> SentimentLabel {
        let vector = self.vectorize(cleaned);

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (class_index, (row, intercept)) in
            self.coefficients.iter().zip(&self.intercepts).enumerate()
        {
            let mut score = *intercept;
            for &(term_index, value) in &vector {
                score += row[term_index] * value;
            }
            if score > best_score {
                best_score = score;
                best = class_index;
            }
        }

        self.classes[best]
    }
}

impl SentimentClassifier for SentimentPipeline {
    fn predict(&self, cleaned: &[String]) -> Result<Vec<SentimentLabel>, ClassifyError> {
        Ok(cleaned.iter().map(|text| self.decide(text)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{ClassifierArtifact, VectorizerArtifact};

    fn artifact() -> PipelineArtifact {
        let vocabulary: HashMap<String, usize> = [
            ("bagus".to_string(), 0),
            ("naik".to_string(), 1),
            ("rugi".to_string(), 2),
            ("turun".to_string(), 3),
        ]
        .into_iter()
        .collect();

        PipelineArtifact {
            format: crate::artifact::FORMAT.to_string(),
            version: crate::artifact::VERSION,
            vectorizer: VectorizerArtifact {
                vocabulary,
                idf: vec![1.4, 1.2, 1.5, 1.3],
            },
            classifier: ClassifierArtifact {
                classes: vec![
                    "Negative".to_string(),
                    "Neutral".to_string(),
                    "Positive".to_string(),
                ],
                coefficients: vec![
                    vec![-0.9, -0.9, 0.9, 0.9],
                    vec![0.0, 0.0, 0.0, 0.0],
                    vec![0.9, 0.9, -0.9, -0.9],
                ],
                intercepts: vec![-0.2, 0.1, -0.1],
            },
        }
    }

    fn pipeline() -> SentimentPipeline {
        SentimentPipeline::from_artifact(artifact()).expect("valid artifact")
    }

    #[test]
    fn positive_terms_win() {
        let labels = pipeline()
            .predict(&["bagus naik".to_string()])
            .expect("predict");
        assert_eq!(labels, vec![SentimentLabel::Positive]);
    }

    #[test]
    fn negative_terms_win() {
        let labels = pipeline()
            .predict(&["rugi turun".to_string()])
            .expect("predict");
        assert_eq!(labels, vec![SentimentLabel::Negative]);
    }

    #[test]
    fn unknown_terms_fall_back_to_the_intercepts() {
        let labels = pipeline()
            .predict(&["".to_string(), "kata asing semua".to_string()])
            .expect("predict");
        assert_eq!(labels, vec![SentimentLabel::Neutral, SentimentLabel::Neutral]);
    }

    #[test]
    fn repeated_terms_do_not_flip_the_decision() {
        let labels = pipeline()
            .predict(&["bagus bagus bagus rugi".to_string()])
            .expect("predict");
        assert_eq!(labels, vec![SentimentLabel::Positive]);
    }

    #[test]
    fn batch_output_matches_input_length_and_order() {
        let inputs = vec![
            "bagus naik".to_string(),
            "rugi turun".to_string(),
            "entah apa".to_string(),
        ];
        let labels = pipeline().predict(&inputs).expect("predict");
        assert_eq!(
            labels,
            vec![
                SentimentLabel::Positive,
                SentimentLabel::Negative,
                SentimentLabel::Neutral,
            ]
        );
    }

    #[test]
    fn prediction_is_deterministic() {
        let pipeline = pipeline();
        let input = vec!["bagus naik rugi turun".to_string()];
        let first = pipeline.predict(&input).expect("predict");
        for _ in 0..10 {
            assert_eq!(pipeline.predict(&input).expect("predict"), first);
        }
    }

    #[test]
    fn wrong_format_is_rejected() {
        let mut broken = artifact();
        broken.format = "sentimen/other".to_string();
        let error = SentimentPipeline::from_artifact(broken).expect_err("must fail");
        assert!(matches!(error, ArtifactError::Schema(_)));
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut broken = artifact();
        broken.version = 2;
        let error = SentimentPipeline::from_artifact(broken).expect_err("must fail");
        assert!(matches!(error, ArtifactError::Version(2)));
    }

    #[test]
    fn idf_length_mismatch_is_rejected() {
        let mut broken = artifact();
        broken.vectorizer.idf.pop();
        let error = SentimentPipeline::from_artifact(broken).expect_err("must fail");
        assert!(matches!(error, ArtifactError::Schema(_)));
    }

    #[test]
    fn ragged_coefficients_are_rejected() {
        let mut broken = artifact();
        broken.classifier.coefficients[1].pop();
        let error = SentimentPipeline::from_artifact(broken).expect_err("must fail");
        assert!(matches!(error, ArtifactError::Schema(_)));
    }

    #[test]
    fn unknown_class_name_is_rejected() {
        let mut broken = artifact();
        broken.classifier.classes[1] = "Mixed".to_string();
        let error = SentimentPipeline::from_artifact(broken).expect_err("must fail");
        assert!(matches!(error, ArtifactError::Schema(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let error = SentimentPipeline::from_json("{ not json").expect_err("must fail");
        assert!(matches!(error, ArtifactError::Json(_)));
    }
}
