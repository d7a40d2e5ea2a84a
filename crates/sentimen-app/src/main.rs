use clap::Parser;

pub mod cli;
pub mod commands;
pub mod profile;
pub mod state;


use self::cli::{Cli, Command};
use self::state::App;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Command output goes to stdout, logs to stderr. Escape codes are
    // dropped when stdout is not a terminal or the user asked for plain text.
    if cli.no_color || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let app = App::new(&cli)?;

    match &cli.command {
        Command::Predict { text } => commands::predict::run(&app, text),
        Command::Batch {
            input,
            output,
            column,
            limit,
        } => commands::batch::run(&app, input, output.as_deref(), column.as_deref(), *limit),
        Command::Info => commands::info::run(&app),
    }
}
