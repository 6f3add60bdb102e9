//! linecleaner command-line entry point

use clap::Parser;
use linecleaner_cli::commands::{list, Commands, ListCommands};
use std::process::ExitCode;

/// Clean JSON-lines description corpora into sentence, pair or clause datasets
#[derive(Debug, Parser)]
#[command(name = "linecleaner", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Clean(args) => args.execute(),
        Commands::List { subcommand } => match subcommand {
            ListCommands::Variants => list::list_variants(),
        },
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_clean_command() {
        let cli = Cli::try_parse_from([
            "linecleaner",
            "clean",
            "-i",
            "in.jsonl",
            "-o",
            "out.txt",
            "--min-len",
            "40",
        ])
        .unwrap();

        match cli.command {
            Commands::Clean(args) => {
                assert_eq!(args.input.to_str(), Some("in.jsonl"));
                assert_eq!(args.min_len, Some(40));
            }
            other => panic!("Expected Clean command, got {other:?}"),
        }
    }
}
