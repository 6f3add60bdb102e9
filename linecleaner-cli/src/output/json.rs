//! JSON summary formatter

use super::SummaryFormatter;
use anyhow::Result;
use linecleaner_core::CleanStats;
use std::io::Write;

/// JSON formatter - writes the counters as one pretty-printed object
pub struct JsonSummary<W: Write> {
    writer: W,
}

impl<W: Write> JsonSummary<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> SummaryFormatter for JsonSummary<W> {
    fn write_summary(&mut self, stats: &CleanStats) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, stats)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
