use std::path::Path;

use sentimen_types::PredictionRecord;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("column {0:?} not found in CSV header")]
    MissingColumn(String),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read the sentence column from a CSV file.
///
/// The header row is required and must contain `column`; every other column
/// is ignored. Any row count is accepted, including zero. A missing column
/// aborts before any row is read.
pub fn read_sentences(path: &Path, column: &str) -> Result<Vec<String>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?;
    let index = headers
        .iter()
        .position(|name| name == column)
        .ok_or_else(|| DatasetError::MissingColumn(column.to_string()))?;

    let mut sentences = Vec::new();
    for record in reader.records() {
        let record = record?;
        sentences.push(record.get(index).unwrap_or("").to_string());
    }

    tracing::debug!("read {} rows from {}", sentences.len(), path.display());
    Ok(sentences)
}

/// Write (sentence, label) pairs in input order. Two columns, no index.
pub fn write_predictions(
    path: &Path,
    records: &[PredictionRecord],
    text_column: &str,
    label_column: &str,
) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([text_column, label_column])?;
    for record in records {
        writer.write_record([record.text.as_str(), record.label.as_str()])?;
    }
    writer.flush()?;

    tracing::debug!("wrote {} predictions to {}", records.len(), path.display());
    Ok(())
}
