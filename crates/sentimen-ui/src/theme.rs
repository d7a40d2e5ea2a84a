use colored::{ColoredString, Colorize};

use sentimen_types::SentimentLabel;

/// Visual identity of the terminal output.
///
/// Implementations decide colors and markers; layout stays in the render
/// functions so every theme shares one structure.
pub trait Theme: Send + Sync {
    fn name(&self) -> &'static str;

    /// Marker shown before a label ("🟢", "[+]", ...)
    fn marker(&self, label: SentimentLabel) -> &'static str;

    fn label(&self, label: SentimentLabel, text: &str) -> ColoredString;
    fn title(&self, text: &str) -> ColoredString;
    fn accent(&self, text: &str) -> ColoredString;
    fn dim(&self, text: &str) -> ColoredString;
    fn warn(&self, text: &str) -> ColoredString;
    fn error(&self, text: &str) -> ColoredString;
}

/// Dark-terminal palette with emoji markers.
pub struct NeonTheme;

impl Theme for NeonTheme {
    fn name(&self) -> &'static str {
        "neon"
    }

    fn marker(&self, label: SentimentLabel) -> &'static str {
        match label {
            SentimentLabel::Positive => "🟢",
            SentimentLabel::Negative => "🔴",
            SentimentLabel::Neutral => "🔵",
        }
    }

    fn label(&self, label: SentimentLabel, text: &str) -> ColoredString {
        match label {
            SentimentLabel::Positive => text.truecolor(0, 255, 135).bold(),
            SentimentLabel::Negative => text.truecolor(255, 0, 96).bold(),
            SentimentLabel::Neutral => text.truecolor(96, 239, 255).bold(),
        }
    }

    fn title(&self, text: &str) -> ColoredString {
        text.bold()
    }

    fn accent(&self, text: &str) -> ColoredString {
        text.cyan()
    }

    fn dim(&self, text: &str) -> ColoredString {
        text.dimmed()
    }

    fn warn(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    fn error(&self, text: &str) -> ColoredString {
        text.red().bold()
    }
}

/// Plain ASCII markers and no styling, for logs and dumb terminals.
pub struct MonoTheme;

impl Theme for MonoTheme {
    fn name(&self) -> &'static str {
        "mono"
    }

    fn marker(&self, label: SentimentLabel) -> &'static str {
        match label {
            SentimentLabel::Positive => "[+]",
            SentimentLabel::Negative => "[-]",
            SentimentLabel::Neutral => "[=]",
        }
    }

    fn label(&self, _label: SentimentLabel, text: &str) -> ColoredString {
        text.normal()
    }

    fn title(&self, text: &str) -> ColoredString {
        text.normal()
    }

    fn accent(&self, text: &str) -> ColoredString {
        text.normal()
    }

    fn dim(&self, text: &str) -> ColoredString {
        text.normal()
    }

    fn warn(&self, text: &str) -> ColoredString {
        text.normal()
    }

    fn error(&self, text: &str) -> ColoredString {
        text.normal()
    }
}

/// Look up a theme by its config name.
pub fn theme_from_name(name: &str) -> Box<dyn Theme> {
    match name {
        "neon" => Box::new(NeonTheme),
        "mono" => Box::new(MonoTheme),
        other => {
            tracing::warn!("unknown theme {other:?}, using neon");
            Box::new(NeonTheme)
        }
    }
}
