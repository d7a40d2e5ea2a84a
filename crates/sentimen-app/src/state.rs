use anyhow::Context;
use sentimen_config::Config;
use sentimen_core::flow::SentimentFlow;
use sentimen_langid::WhatlangDetector;
use sentimen_model::pipeline::SentimentPipeline;
use sentimen_types::SentimentLabel;
use sentimen_ui::theme::{Theme, theme_from_name};

use crate::cli::Cli;
use crate::profile;

/// Everything the commands need, built once at startup.
pub struct App {
    pub config: Config,
    pub flow: SentimentFlow,
    pub theme: Box<dyn Theme>,
    pub model_terms: usize,
    pub model_classes: Vec<SentimentLabel>,
}

impl App {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = profile::load_config(cli.config.as_deref())?;

        if let Some(model) = &cli.model {
            config.model.path = model.clone();
        }
        if let Some(theme) = &cli.theme {
            config.ui.theme = theme.clone();
        }

        let pipeline = SentimentPipeline::load(&config.model.path).with_context(|| {
            format!(
                "failed to load model artifact {}",
                config.model.path.display()
            )
        })?;
        let model_terms = pipeline.term_count();
        let model_classes = pipeline.classes().to_vec();

        let detector = WhatlangDetector::new().with_min_confidence(config.language.min_confidence);

        let flow = SentimentFlow::new(Box::new(detector), Box::new(pipeline))
            .with_accept_language(config.language.accept.clone())
            .with_gate_enabled(config.language.enabled);

        let theme = theme_from_name(&config.ui.theme);

        Ok(Self {
            config,
            flow,
            theme,
            model_terms,
            model_classes,
        })
    }
}
