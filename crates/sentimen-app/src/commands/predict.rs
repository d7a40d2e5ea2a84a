use sentimen_ui::render;

use crate::state::App;

pub fn run(app: &App, text: &str) -> anyhow::Result<()> {
    print!("{}", render::banner(app.theme.as_ref()));

    match app.flow.classify_text(text) {
        Ok(outcome) => print!("{}", render::single_outcome(app.theme.as_ref(), &outcome)),
        Err(e) => {
            tracing::error!("classification failed: {e}");
            print!("{}", render::classifier_failure(app.theme.as_ref()));
            return Ok(());
        }
    }

    print!("{}", render::footer(app.theme.as_ref()));
    Ok(())
}
