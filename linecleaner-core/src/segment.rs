//! Sentence segmentation strategies
//!
//! Two strategies exist:
//! - [`TerminatorMatcher`] scans for runs of non-terminator characters, each
//!   optionally followed by one terminator that stays attached to the segment.
//!   Consecutive terminators after the first are dropped.
//! - [`DelimiterSplitter`] splits on every delimiter and discards it. Empty
//!   pieces (from adjacent or trailing delimiters) are kept.

use regex::Regex;

use crate::config::SegmentationConfig;
use crate::error::Result;

/// Splits normalized text into sentence-like segments
pub trait Segmenter: Send + Sync {
    /// Segment the text; segments borrow from the input
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Strategy name for logging
    fn name(&self) -> &'static str;
}

/// Match-based segmentation that keeps the terminator
#[derive(Debug, Clone)]
pub struct TerminatorMatcher {
    pattern: Regex,
}

impl TerminatorMatcher {
    pub fn new(terminators: &[char]) -> Result<Self> {
        let class: String = terminators
            .iter()
            .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
            .collect();
        let pattern = Regex::new(&format!("[^{class}]+[{class}]?"))?;
        Ok(Self { pattern })
    }
}

impl Segmenter for TerminatorMatcher {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern.find_iter(text).map(|m| m.as_str()).collect()
    }

    fn name(&self) -> &'static str {
        "keep_terminator"
    }
}

/// Split-based segmentation that discards the delimiter
#[derive(Debug, Clone)]
pub struct DelimiterSplitter {
    delimiters: Vec<char>,
}

impl DelimiterSplitter {
    pub fn new(delimiters: &[char]) -> Self {
        Self {
            delimiters: delimiters.to_vec(),
        }
    }
}

impl Segmenter for DelimiterSplitter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(|c: char| self.delimiters.contains(&c)).collect()
    }

    fn name(&self) -> &'static str {
        "drop_delimiter"
    }
}

/// Build the segmenter for a configuration, `None` when segmentation is off
pub fn build_segmenter(config: &SegmentationConfig) -> Result<Option<Box<dyn Segmenter>>> {
    Ok(match config {
        SegmentationConfig::None => None,
        SegmentationConfig::KeepTerminator { terminators } => {
            Some(Box::new(TerminatorMatcher::new(terminators)?))
        }
        SegmentationConfig::DropDelimiter { delimiters } => {
            Some(Box::new(DelimiterSplitter::new(delimiters)))
        }
    })
}
