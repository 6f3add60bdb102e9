//! Segment count and segment length filter

use crate::config::SegmentFilterConfig;
use crate::normalize::char_len;
use crate::stats::SkipReason;

/// Rejects segment lists that are too short to be useful.
///
/// Lists with fewer than `min_segments` entries are rejected. Lists with at
/// most `checked_up_to` entries are rejected if any segment is shorter than
/// `min_segment_len` code points; longer lists pass unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentFilter {
    min_segments: usize,
    min_segment_len: usize,
    checked_up_to: usize,
}

impl SegmentFilter {
    pub fn new(config: &SegmentFilterConfig) -> Self {
        Self {
            min_segments: config.min_segments,
            min_segment_len: config.min_segment_len,
            checked_up_to: config.checked_up_to,
        }
    }

    pub fn check(&self, segments: &[&str]) -> Result<(), SkipReason> {
        if segments.len() < self.min_segments {
            return Err(SkipReason::InsufficientSegments);
        }

        if segments.len() <= self.checked_up_to
            && segments.iter().any(|s| char_len(s) < self.min_segment_len)
        {
            return Err(SkipReason::SegmentTooShort);
        }

        Ok(())
    }
}
