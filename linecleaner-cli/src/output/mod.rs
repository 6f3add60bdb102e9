//! Run summary formatting

use anyhow::Result;
use linecleaner_core::CleanStats;
use std::io::Write;

pub mod json;
pub mod text;

pub use json::JsonSummary;
pub use text::TextSummary;

/// Trait for run summary formatters
pub trait SummaryFormatter {
    /// Write the summary of a finished run
    fn write_summary(&mut self, stats: &CleanStats) -> Result<()>;
}

/// Supported summary formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable counters with a per-reason breakdown
    Text,
    /// Pretty-printed JSON object
    Json,
}

/// Write `stats` to `writer` in the requested format
pub fn write_summary<W: Write>(writer: W, stats: &CleanStats, format: SummaryFormat) -> Result<()> {
    match format {
        SummaryFormat::Text => TextSummary::new(writer).write_summary(stats),
        SummaryFormat::Json => JsonSummary::new(writer).write_summary(stats),
    }
}
