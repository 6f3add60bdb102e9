//! linecleaner CLI library
//!
//! This library provides the command-line interface for the linecleaner
//! corpus cleaning pipeline.

pub mod commands;
pub mod error;
pub mod output;
pub mod progress;
pub mod variant_source;

pub use error::{CliError, CliResult};
