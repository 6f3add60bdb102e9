//! Run counters, skip reasons and progress reporting

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Why a record produced no output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Blank line after trimming
    EmptyLine,
    /// Line is not valid JSON
    MalformedJson,
    /// No string `des` field in a JSON object
    MissingDescription,
    /// Description shorter than the minimum length, before or after cleanup
    BelowMinLength,
    /// Fewer segments than required
    InsufficientSegments,
    /// A segment of a short segment list is below the length floor
    SegmentTooShort,
    /// The split selector found no usable cut
    NoSplitPoint,
}

impl SkipReason {
    pub const ALL: [SkipReason; 7] = [
        SkipReason::EmptyLine,
        SkipReason::MalformedJson,
        SkipReason::MissingDescription,
        SkipReason::BelowMinLength,
        SkipReason::InsufficientSegments,
        SkipReason::SegmentTooShort,
        SkipReason::NoSplitPoint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::EmptyLine => "empty_line",
            SkipReason::MalformedJson => "malformed_json",
            SkipReason::MissingDescription => "missing_description",
            SkipReason::BelowMinLength => "below_min_length",
            SkipReason::InsufficientSegments => "insufficient_segments",
            SkipReason::SegmentTooShort => "segment_too_short",
            SkipReason::NoSplitPoint => "no_split_point",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters for one cleaning run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    /// Lines read, empty ones included
    pub total: u64,
    /// Lines that produced no output
    pub skipped: u64,
    /// Input records that produced output
    pub records_written: u64,
    /// Output lines written; pair output writes two per record
    pub lines_written: u64,
    /// Skip count per reason; sums to `skipped`
    pub skip_reasons: BTreeMap<SkipReason, u64>,
}

impl CleanStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_line(&mut self) {
        self.total += 1;
    }

    pub fn record_skip(&mut self, reason: SkipReason) {
        self.skipped += 1;
        *self.skip_reasons.entry(reason).or_insert(0) += 1;
    }

    pub fn record_output(&mut self, lines: usize) {
        self.records_written += 1;
        self.lines_written += lines as u64;
    }

    pub fn skipped_for(&self, reason: SkipReason) -> u64 {
        self.skip_reasons.get(&reason).copied().unwrap_or(0)
    }

    /// Progress line in the historical `processed N, skiped :M` format.
    ///
    /// Existing log scrapers match this text exactly, spelling included.
    pub fn progress_line(&self) -> String {
        format!("processed {}, skiped :{}", self.total, self.skipped)
    }
}

/// Receives progress checkpoints and the end-of-run summary
pub trait ProgressSink {
    /// Called after every `interval` lines read
    fn checkpoint(&mut self, stats: &CleanStats);

    /// Called once after the input is exhausted
    fn finish(&mut self, stats: &CleanStats);
}

/// Reports through the `log` facade at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn checkpoint(&mut self, stats: &CleanStats) {
        log::info!("{}", stats.progress_line());
    }

    fn finish(&mut self, stats: &CleanStats) {
        log::info!("{}", stats.progress_line());
    }
}

/// Discards all progress
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn checkpoint(&mut self, _stats: &CleanStats) {}

    fn finish(&mut self, _stats: &CleanStats) {}
}

impl<P: ProgressSink + ?Sized> ProgressSink for &mut P {
    fn checkpoint(&mut self, stats: &CleanStats) {
        (**self).checkpoint(stats);
    }

    fn finish(&mut self, stats: &CleanStats) {
        (**self).finish(stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = CleanStats::new();
        for _ in 0..4 {
            stats.record_line();
        }
        stats.record_skip(SkipReason::EmptyLine);
        stats.record_skip(SkipReason::BelowMinLength);
        stats.record_skip(SkipReason::BelowMinLength);
        stats.record_output(2);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.skipped, 3);
        assert_eq!(stats.records_written, 1);
        assert_eq!(stats.lines_written, 2);
        assert_eq!(stats.skipped_for(SkipReason::BelowMinLength), 2);
        assert_eq!(stats.skipped_for(SkipReason::NoSplitPoint), 0);
    }

    #[test]
    fn test_progress_line_format() {
        let stats = CleanStats {
            total: 20000,
            skipped: 17,
            ..CleanStats::default()
        };
        assert_eq!(stats.progress_line(), "processed 20000, skiped :17");
    }

    #[test]
    fn test_skip_reason_serializes_snake_case() {
        let mut stats = CleanStats::new();
        stats.record_line();
        stats.record_skip(SkipReason::MalformedJson);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["skip_reasons"]["malformed_json"], 1);
        assert_eq!(json["total"], 1);
    }

    #[test]
    fn test_skip_reason_names_match_serde() {
        for reason in SkipReason::ALL {
            let json = serde_json::to_string(&reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason.as_str()));
        }
    }
}
