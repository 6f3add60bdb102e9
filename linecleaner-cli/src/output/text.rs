//! Plain text summary formatter

use super::SummaryFormatter;
use anyhow::Result;
use linecleaner_core::{CleanStats, SkipReason};
use std::io::Write;

/// Text formatter - one counter per line
pub struct TextSummary<W: Write> {
    writer: W,
}

impl<W: Write> TextSummary<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> SummaryFormatter for TextSummary<W> {
    fn write_summary(&mut self, stats: &CleanStats) -> Result<()> {
        writeln!(self.writer, "Lines read:      {}", stats.total)?;
        writeln!(self.writer, "Lines skipped:   {}", stats.skipped)?;
        writeln!(self.writer, "Records written: {}", stats.records_written)?;
        writeln!(self.writer, "Lines written:   {}", stats.lines_written)?;

        if stats.skipped > 0 {
            writeln!(self.writer, "Skipped by reason:")?;
            for reason in SkipReason::ALL {
                let count = stats.skipped_for(reason);
                if count > 0 {
                    writeln!(self.writer, "  {:<24}{}", reason.as_str(), count)?;
                }
            }
        }

        self.writer.flush()?;
        Ok(())
    }
}
