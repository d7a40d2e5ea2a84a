use sentimen_ui::render;

use crate::state::App;

pub fn run(app: &App) -> anyhow::Result<()> {
    let theme = app.theme.as_ref();
    print!("{}", render::banner(theme));
    print!(
        "{}",
        render::model_info(
            theme,
            &app.config.model.path.display().to_string(),
            app.model_terms,
            &app.model_classes,
        )
    );
    print!("{}", render::footer(theme));
    Ok(())
}
