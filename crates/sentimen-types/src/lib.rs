use serde::{Deserialize, Serialize};

/// Sentiment category assigned to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Display order for summaries and charts
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Class name as stored in the model artifact and exported CSVs
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    pub fn parse(name: &str) -> Option<SentimentLabel> {
        match name {
            "Positive" => Some(SentimentLabel::Positive),
            "Negative" => Some(SentimentLabel::Negative),
            "Neutral" => Some(SentimentLabel::Neutral),
            _ => None,
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified input: raw text, its cleaned form, and the label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub text: String,
    pub cleaned: String,
    pub label: SentimentLabel,
}

/// Per-label tallies for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    pub fn add(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Share of `label` in percent, 0.0 for an empty batch
    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.get(label) as f64 / self.total() as f64 * 100.0
    }
}

/// Ordered predictions plus the aggregate distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub records: Vec<PredictionRecord>,
    pub counts: LabelCounts,
}

/// Terminal states of the single-text flow, evaluated in this order.
#[derive(Debug, Clone, PartialEq)]
pub enum SingleOutcome {
    EmptyInput,
    LanguageUndetermined,
    WrongLanguage { detected: String },
    Classified(PredictionRecord),
}
