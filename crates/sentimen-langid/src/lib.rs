use sentimen_core::language::{DetectedLanguage, LanguageDetector};

/// Statistical language detector backed by whatlang.
///
/// Short or ambiguous input routinely comes back unreliable; that is
/// surfaced as `None` and the caller reports it as undetermined.
pub struct WhatlangDetector {
    min_confidence: f64,
}

impl WhatlangDetector {
    pub fn new() -> Self {
        Self {
            min_confidence: 0.0,
        }
    }

    /// Detections below `min_confidence` register as undetermined
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<DetectedLanguage> {
        let info = whatlang::detect(text)?;

        if !info.is_reliable() || info.confidence() < self.min_confidence {
            tracing::debug!(
                "unreliable detection: {} at {:.2}",
                info.lang().code(),
                info.confidence()
            );
            return None;
        }

        Some(DetectedLanguage {
            code: info.lang().code().to_string(),
            name: info.lang().eng_name().to_string(),
            confidence: info.confidence(),
        })
    }
}
