/// ISO 639-3 code of the language the gate accepts by default.
pub const INDONESIAN: &str = "ind";

/// One language decision from the external detector.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLanguage {
    /// ISO 639-3 code ("ind", "eng", ...)
    pub code: String,
    /// English language name for user-facing messages
    pub name: String,
    pub confidence: f64,
}

/// Language identification backend.
///
/// Implementations answer `None` whenever no confident decision exists.
/// Backend failures fold into `None` as well; the flow treats both as
/// undetermined rather than accepting or rejecting the input.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Option<DetectedLanguage>;
}
