use sentimen_types::{BatchResult, LabelCounts, PredictionRecord, SingleOutcome};

use crate::classify::SentimentClassifier;
use crate::error::FlowError;
use crate::language::{self, LanguageDetector};
use crate::normalize::TextNormalizer;

/// Orchestrates normalizer, language gate, and classifier for both flows.
///
/// Constructed once at startup with injected collaborators; holds no
/// mutable state afterwards.
pub struct SentimentFlow {
    normalizer: TextNormalizer,
    detector: Box<dyn LanguageDetector>,
    classifier: Box<dyn SentimentClassifier>,
    accept: String,
    gate_enabled: bool,
}

impl SentimentFlow {
    pub fn new(
        detector: Box<dyn LanguageDetector>,
        classifier: Box<dyn SentimentClassifier>,
    ) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            detector,
            classifier,
            accept: language::INDONESIAN.to_string(),
            gate_enabled: true,
        }
    }

    /// Override the ISO 639-3 code the single-text gate accepts
    pub fn with_accept_language(mut self, code: impl Into<String>) -> Self {
        self.accept = code.into();
        self
    }

    /// Turn the single-text language gate off entirely
    pub fn with_gate_enabled(mut self, enabled: bool) -> Self {
        self.gate_enabled = enabled;
        self
    }

    /// Classify one snippet.
    ///
    /// Outcomes are checked in a fixed order: empty input, undetermined
    /// language, wrong language, classified. The classifier runs only when
    /// every gate passes; detection sees the raw text, the classifier the
    /// cleaned one.
    pub fn classify_text(&self, text: &str) -> Result<SingleOutcome, FlowError> {
        if text.trim().is_empty() {
            return Ok(SingleOutcome::EmptyInput);
        }

        if self.gate_enabled {
            let detected = match self.detector.detect(text) {
                Some(detected) => detected,
                None => return Ok(SingleOutcome::LanguageUndetermined),
            };

            if detected.code != self.accept {
                tracing::debug!("rejected input in {} ({})", detected.name, detected.code);
                return Ok(SingleOutcome::WrongLanguage {
                    detected: detected.name,
                });
            }
        }

        let cleaned = self.normalizer.normalize(text);
        let labels = self.classifier.predict(std::slice::from_ref(&cleaned))?;
        if labels.len() != 1 {
            return Err(FlowError::LabelCount {
                expected: 1,
                got: labels.len(),
            });
        }

        Ok(SingleOutcome::Classified(PredictionRecord {
            text: text.to_string(),
            cleaned,
            label: labels[0],
        }))
    }

    /// Classify a whole dataset in one batched call.
    ///
    /// Rows are not language gated; every row is normalized and classified
    /// in its original order. Either the full batch succeeds or the whole
    /// call fails, there are no partial results.
    pub fn classify_batch(&self, sentences: Vec<String>) -> Result<BatchResult, FlowError> {
        let cleaned: Vec<String> = sentences
            .iter()
            .map(|sentence| self.normalizer.normalize(sentence))
            .collect();

        let labels = self.classifier.predict(&cleaned)?;
        if labels.len() != sentences.len() {
            return Err(FlowError::LabelCount {
                expected: sentences.len(),
                got: labels.len(),
            });
        }

        let mut counts = LabelCounts::default();
        let records: Vec<PredictionRecord> = sentences
            .into_iter()
            .zip(cleaned)
            .zip(labels)
            .map(|((text, cleaned), label)| {
                counts.add(label);
                PredictionRecord {
                    text,
                    cleaned,
                    label,
                }
            })
            .collect();

        tracing::debug!("classified {} rows in one batch", records.len());
        Ok(BatchResult { records, counts })
    }
}
