use std::path::Path;

use anyhow::Context;
use sentimen_io::dataset::{self, DatasetError};
use sentimen_ui::render;

use crate::state::App;

pub fn run(
    app: &App,
    input: &Path,
    output: Option<&Path>,
    column: Option<&str>,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let theme = app.theme.as_ref();
    print!("{}", render::banner(theme));

    let column = column.unwrap_or(&app.config.batch.text_column);
    let limit = limit.unwrap_or(app.config.ui.table_rows);

    let sentences = match dataset::read_sentences(input, column) {
        Ok(sentences) => sentences,
        Err(DatasetError::MissingColumn(column)) => {
            print!("{}", render::missing_column(theme, &column));
            return Ok(());
        }
        Err(e) => {
            tracing::error!("could not read {}: {e}", input.display());
            print!("{}", render::unreadable_csv(theme));
            return Ok(());
        }
    };

    let result = match app.flow.classify_batch(sentences) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("batch classification failed: {e}");
            print!("{}", render::classifier_failure(theme));
            return Ok(());
        }
    };

    print!("{}", render::batch_summary(theme, &result, app.config.ui.chart_width));
    println!();
    print!("{}", render::batch_table(theme, &result, limit));

    if let Some(output) = output {
        dataset::write_predictions(
            output,
            &result.records,
            &app.config.batch.text_column,
            &app.config.batch.label_column,
        )
        .with_context(|| format!("failed to write predictions to {}", output.display()))?;
        print!("{}", render::saved(theme, &output.display().to_string()));
    }

    print!("{}", render::footer(theme));
    Ok(())
}
