use clap::Parser;
use std::path::PathBuf;

use crate::cli::{Cli, Command};

#[test]
fn test_parse_predict_with_global_flags() {
    let cli = Cli::parse_from([
        "sentimen",
        "--theme",
        "mono",
        "--no-color",
        "predict",
        "Saham naik terus",
    ]);

    assert_eq!(cli.theme.as_deref(), Some("mono"));
    assert!(cli.no_color);
    match cli.command {
        Command::Predict { text } => assert_eq!(text, "Saham naik terus"),
        _ => panic!("expected predict subcommand"),
    }
}

#[test]
fn test_parse_batch_flags() {
    let cli = Cli::parse_from([
        "sentimen",
        "batch",
        "-i",
        "data/komentar.csv",
        "-o",
        "hasil_sentimen.csv",
        "--column",
        "Teks",
        "--limit",
        "5",
    ]);

    match cli.command {
        Command::Batch {
            input,
            output,
            column,
            limit,
        } => {
            assert_eq!(input, PathBuf::from("data/komentar.csv"));
            assert_eq!(output, Some(PathBuf::from("hasil_sentimen.csv")));
            assert_eq!(column.as_deref(), Some("Teks"));
            assert_eq!(limit, Some(5));
        }
        _ => panic!("expected batch subcommand"),
    }
}

#[test]
fn test_reject_unknown_theme() {
    let result = Cli::try_parse_from(["sentimen", "--theme", "solar", "info"]);
    assert!(result.is_err());
}

#[test]
fn test_batch_requires_input() {
    let result = Cli::try_parse_from(["sentimen", "batch"]);
    assert!(result.is_err());
}
