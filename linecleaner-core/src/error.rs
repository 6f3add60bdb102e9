//! Error types
//!
//! Only conditions that stop a run are errors. A record that cannot be used
//! is reported as a [`SkipReason`](crate::SkipReason) and counted instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a cleaning run or reject a configuration
#[derive(Debug, Error)]
pub enum CleanError {
    /// Input file could not be opened
    #[error("failed to open input {path}: {source}")]
    InputOpen {
        /// Path of the input file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Output file could not be created
    #[error("failed to create output {path}: {source}")]
    OutputCreate {
        /// Path of the output file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Reading the input stream failed (including invalid UTF-8)
    #[error("failed to read input line {line}: {source}")]
    Read {
        /// 1-based number of the line being read
        line: u64,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Writing or flushing the output stream failed
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    /// Invalid variant configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed TOML in a variant configuration
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A segmentation or cleanup pattern failed to compile
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// No built-in variant with this code
    #[error("unknown variant '{0}'")]
    UnknownVariant(String),
}

/// Result type for cleaning operations
pub type Result<T> = std::result::Result<T, CleanError>;
