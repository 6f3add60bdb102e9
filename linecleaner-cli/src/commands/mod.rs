//! CLI command implementations

use clap::Subcommand;

pub mod clean;
pub mod generate_config;
pub mod list;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clean a JSON-lines file into a text dataset
    Clean(clean::CleanArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a variant configuration file
    Validate(validate::ValidateArgs),

    /// Write a built-in variant as an editable configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in cleaning variants
    Variants,
}
