use sentimen_types::{BatchResult, PredictionRecord, SentimentLabel, SingleOutcome};

use crate::theme::Theme;

/// Application banner shown before any command output.
pub fn banner(theme: &dyn Theme) -> String {
    format!(
        "{}\n{}\n{}\n",
        theme.title("📈 Sentimen Saham"),
        theme.dim("NLP Pipeline · Analisis Sentimen Teks Bahasa Indonesia"),
        theme.dim(&"─".repeat(48)),
    )
}

/// Render the outcome of a single-text classification.
pub fn single_outcome(theme: &dyn Theme, outcome: &SingleOutcome) -> String {
    match outcome {
        SingleOutcome::EmptyInput => {
            format!("{}\n", theme.warn("⚠️ Teks tidak boleh kosong."))
        }
        SingleOutcome::LanguageUndetermined => {
            format!(
                "{}\n",
                theme.error("❌ Tidak dapat mendeteksi bahasa. Coba lagi.")
            )
        }
        SingleOutcome::WrongLanguage { detected } => format!(
            "{}\n{}\n",
            theme.error("❌ Harap masukkan teks dalam Bahasa Indonesia."),
            theme.dim(&format!("Bahasa terdeteksi: {detected}")),
        ),
        SingleOutcome::Classified(record) => classified(theme, record),
    }
}

fn classified(theme: &dyn Theme, record: &PredictionRecord) -> String {
    let headline = format!(
        "{} {}",
        theme.marker(record.label),
        record.label.as_str().to_uppercase()
    );
    format!(
        "{}\n{} {}\n",
        theme.label(record.label, &headline),
        theme.dim("Teks bersih:"),
        record.cleaned,
    )
}

/// Distribution summary with per-label counts, shares, and bars.
pub fn batch_summary(theme: &dyn Theme, result: &BatchResult, chart_width: usize) -> String {
    let counts = &result.counts;

    let mut out = String::new();
    out.push_str(&format!("{}\n", theme.title("Distribusi Sentimen")));
    out.push_str(&format!("Total: {} baris\n", counts.total()));

    let max_count = SentimentLabel::ALL
        .iter()
        .map(|&label| counts.get(label))
        .max()
        .unwrap_or(0);

    for label in SentimentLabel::ALL {
        let count = counts.get(label);
        let bar_len = if max_count == 0 {
            0
        } else {
            count * chart_width / max_count
        };
        let bar = "█".repeat(bar_len);
        out.push_str(&format!(
            "{} {:<8} {:>5} ({:>5.1}%) {}\n",
            theme.marker(label),
            label.as_str(),
            count,
            counts.percentage(label),
            theme.label(label, &bar),
        ));
    }

    out
}

/// Preview table of predictions, truncated after `limit` rows.
pub fn batch_table(theme: &dyn Theme, result: &BatchResult, limit: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", theme.title("Hasil Prediksi")));
    out.push_str(&format!("{:<50} {}\n", "Teks", "Sentimen"));
    out.push_str(&format!("{}\n", theme.dim(&"-".repeat(60))));

    for record in result.records.iter().take(limit) {
        out.push_str(&format!(
            "{:<50} {} {}\n",
            truncate(&record.text, 48),
            theme.marker(record.label),
            theme.label(record.label, record.label.as_str()),
        ));
    }

    let hidden = result.records.len().saturating_sub(limit);
    if hidden > 0 {
        out.push_str(&format!(
            "{}\n",
            theme.dim(&format!("... {hidden} baris lagi"))
        ));
    }

    out
}

/// Confirmation line after a successful export.
pub fn saved(theme: &dyn Theme, path: &str) -> String {
    format!(
        "{}\n",
        theme.accent(&format!("⬇️ Hasil disimpan ke {path}"))
    )
}

/// Batch input failure: the sentence column is absent.
pub fn missing_column(theme: &dyn Theme, column: &str) -> String {
    format!(
        "{}\n",
        theme.error(&format!(
            "❌ Kolom `{column}` tidak ditemukan di file CSV."
        ))
    )
}

/// Batch input failure: the file is not a readable CSV table.
pub fn unreadable_csv(theme: &dyn Theme) -> String {
    format!("{}\n", theme.error("❌ File CSV tidak dapat dibaca."))
}

/// Classifier backend failure surfaced to the user.
pub fn classifier_failure(theme: &dyn Theme) -> String {
    format!(
        "{}\n",
        theme.error("❌ Klasifikasi gagal. Periksa artefak model.")
    )
}

/// Model metadata block for the info command.
pub fn model_info(
    theme: &dyn Theme,
    path: &str,
    terms: usize,
    classes: &[SentimentLabel],
) -> String {
    let class_list = classes
        .iter()
        .map(|label| label.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}\n{} {}\n{} {}\n{} {}\n",
        theme.title("Model"),
        theme.dim("Artefak:"),
        path,
        theme.dim("Jumlah term:"),
        terms,
        theme.dim("Kelas:"),
        class_list,
    )
}

pub fn footer(theme: &dyn Theme) -> String {
    format!(
        "{}\n",
        theme.dim("Model: TF-IDF + LinearSVC · Dataset: IDSMSA")
    )
}

// Cut long texts at a char boundary and mark the cut with an ellipsis.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use sentimen_types::{LabelCounts, PredictionRecord};

    use super::*;
    use crate::theme::{MonoTheme, NeonTheme};

    fn record(text: &str, label: SentimentLabel) -> PredictionRecord {
        PredictionRecord {
            text: text.to_string(),
            cleaned: text.to_lowercase(),
            label,
        }
    }

    fn sample_batch() -> BatchResult {
        let records = vec![
            record("Saham naik bagus", SentimentLabel::Positive),
            record("Rugi besar", SentimentLabel::Negative),
            record("Pasar datar", SentimentLabel::Neutral),
        ];
        let mut counts = LabelCounts::default();
        for item in &records {
            counts.add(item.label);
        }
        BatchResult { records, counts }
    }

    #[test]
    fn classified_outcome_shows_label_and_cleaned_text() {
        let outcome =
            SingleOutcome::Classified(record("Saham naik bagus", SentimentLabel::Positive));
        let out = single_outcome(&MonoTheme, &outcome);

        assert!(out.contains("POSITIVE"));
        assert!(out.contains("[+]"));
        assert!(out.contains("Teks bersih: saham naik bagus"));
    }

    #[test]
    fn every_failure_outcome_has_its_own_message() {
        let empty = single_outcome(&MonoTheme, &SingleOutcome::EmptyInput);
        assert!(empty.contains("Teks tidak boleh kosong."));

        let undetermined = single_outcome(&MonoTheme, &SingleOutcome::LanguageUndetermined);
        assert!(undetermined.contains("Tidak dapat mendeteksi bahasa. Coba lagi."));

        let wrong = single_outcome(
            &MonoTheme,
            &SingleOutcome::WrongLanguage {
                detected: "English".to_string(),
            },
        );
        assert!(wrong.contains("Harap masukkan teks dalam Bahasa Indonesia."));
        assert!(wrong.contains("Bahasa terdeteksi: English"));
    }

    #[test]
    fn summary_lists_every_label_with_share() {
        let out = batch_summary(&MonoTheme, &sample_batch(), 12);

        assert!(out.contains("Total: 3 baris"));
        assert!(out.contains("Positive"));
        assert!(out.contains("Negative"));
        assert!(out.contains("Neutral"));
        assert!(out.contains("33.3%"));
        assert!(out.contains("█"));
    }

    #[test]
    fn empty_batch_summary_has_no_bars() {
        let empty = BatchResult {
            records: Vec::new(),
            counts: LabelCounts::default(),
        };
        let out = batch_summary(&MonoTheme, &empty, 12);

        assert!(out.contains("Total: 0 baris"));
        assert!(!out.contains("█"));
    }

    #[test]
    fn table_truncates_and_reports_hidden_rows() {
        let out = batch_table(&MonoTheme, &sample_batch(), 2);

        assert!(out.contains("Hasil Prediksi"));
        assert!(out.contains("Teks"));
        assert!(out.contains("Sentimen"));
        assert!(out.contains("Saham naik bagus"));
        assert!(out.contains("Rugi besar"));
        assert!(!out.contains("Pasar datar"));
        assert!(out.contains("... 1 baris lagi"));
    }

    #[test]
    fn long_texts_are_cut_at_char_boundaries() {
        let long = "saham ".repeat(20);
        let result = BatchResult {
            records: vec![record(&long, SentimentLabel::Neutral)],
            counts: LabelCounts {
                neutral: 1,
                ..LabelCounts::default()
            },
        };
        let out = batch_table(&MonoTheme, &result, 10);
        assert!(out.contains('…'));
    }

    #[test]
    fn dataset_failures_render_in_indonesian() {
        let missing = missing_column(&MonoTheme, "Sentence");
        assert!(missing.contains("Kolom `Sentence` tidak ditemukan di file CSV."));

        let unreadable = unreadable_csv(&MonoTheme);
        assert!(unreadable.contains("File CSV tidak dapat dibaca."));
    }

    #[test]
    fn info_block_lists_artifact_details() {
        let out = model_info(
            &MonoTheme,
            "model/sentimen_pipe.json",
            48,
            &SentimentLabel::ALL,
        );

        assert!(out.contains("model/sentimen_pipe.json"));
        assert!(out.contains("48"));
        assert!(out.contains("Positive, Negative, Neutral"));
    }

    #[test]
    fn mono_stays_plain_even_when_color_is_forced() {
        colored::control::set_override(true);
        let neon = single_outcome(
            &NeonTheme,
            &SingleOutcome::Classified(record("Bagus", SentimentLabel::Positive)),
        );
        let mono = single_outcome(
            &MonoTheme,
            &SingleOutcome::Classified(record("Bagus", SentimentLabel::Positive)),
        );
        colored::control::unset_override();

        assert!(neon.contains('\u{1b}'));
        assert!(!mono.contains('\u{1b}'));
    }
}
