//! Failures detected by the CLI before the cleaning pipeline runs

use std::fmt;
use std::path::PathBuf;

/// Conditions the CLI rejects on its own
#[derive(Debug)]
pub enum CliError {
    /// The JSON-lines input does not exist
    MissingInput(PathBuf),
    /// `--output` points at the input, which would be truncated before it is read
    OutputIsInput(PathBuf),
    /// A variant file failed to parse or validate
    InvalidVariantFile(PathBuf),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingInput(path) => {
                write!(f, "Input file not found: {}", path.display())
            }
            CliError::OutputIsInput(path) => write!(
                f,
                "Output would overwrite the input file: {}",
                path.display()
            ),
            CliError::InvalidVariantFile(path) => {
                write!(f, "Invalid variant configuration: {}", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {}

pub type CliResult<T> = Result<T, anyhow::Error>;
