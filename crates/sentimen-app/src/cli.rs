use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sentimen")]
#[command(version)]
#[command(about = "Analisis sentimen komentar saham Bahasa Indonesia", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (JSON), overrides sentimen.json in the working directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Model artifact path, overrides the configured one
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// Output theme
    #[arg(long, global = true, value_parser = ["neon", "mono"])]
    pub theme: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify a single text
    Predict {
        /// Text to classify
        text: String,
    },

    /// Classify every row of a CSV file
    Batch {
        /// Input CSV with a sentence column
        #[arg(short, long)]
        input: PathBuf,

        /// Write predictions to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sentence column name (default: Sentence)
        #[arg(long)]
        column: Option<String>,

        /// Preview table row limit
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the loaded model artifact
    Info,
}
