//! Per-record cleaning pipeline and the line-by-line driver
//!
//! For every input line the pipeline:
//! 1. trims the line and skips it when empty
//! 2. parses it as JSON and extracts the string field `des`
//! 3. rejects descriptions below the minimum length
//! 4. applies the substitution table, then collapses whitespace
//! 5. runs the variant's cleanup heuristics, if any
//! 6. re-checks the minimum length
//! 7. segments, filters and shapes the output for the variant

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde_json::Value;

use crate::config::{OutputConfig, SubstitutionRule, Variant, VariantConfig};
use crate::error::{CleanError, Result};
use crate::filter::SegmentFilter;
use crate::heuristics::Cleanup;
use crate::normalize::{apply_substitutions, char_len, collapse_whitespace};
use crate::segment::{build_segmenter, Segmenter};
use crate::split::{LeadingClauseSplit, SegmentPair, SplitSelector};
use crate::stats::{CleanStats, ProgressSink, SkipReason};

/// JSON field holding the free-text description
pub const DESCRIPTION_FIELD: &str = "des";

/// Result of processing one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Lines to write, without trailing newlines
    Emit(Vec<String>),
    /// The record produced no output
    Skip(SkipReason),
}

/// How qualifying records are written
enum Emission {
    Plain,
    Joined,
    Pairs {
        selector: Box<dyn SplitSelector>,
        positive_label: String,
        negative_label: String,
    },
}

/// Configured cleaning pipeline for one variant
pub struct LineCleaner {
    name: String,
    min_len: usize,
    substitutions: Vec<SubstitutionRule>,
    cleanup: Option<Cleanup>,
    segmenter: Option<Box<dyn Segmenter>>,
    segment_filter: SegmentFilter,
    emission: Emission,
    progress_interval: u64,
}

impl std::fmt::Debug for LineCleaner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineCleaner")
            .field("name", &self.name)
            .field("min_len", &self.min_len)
            .field("segmenter", &self.segmenter.as_ref().map(|s| s.name()))
            .field("progress_interval", &self.progress_interval)
            .finish()
    }
}

impl LineCleaner {
    /// Build a pipeline from a variant configuration
    pub fn new(config: &VariantConfig) -> Result<Self> {
        config.validate()?;

        let cleanup = if config.cleanup.is_enabled() {
            Some(Cleanup::from_config(&config.cleanup)?)
        } else {
            None
        };

        let emission = match &config.output {
            OutputConfig::Plain => Emission::Plain,
            OutputConfig::Joined => Emission::Joined,
            OutputConfig::Pairs {
                lead_min_len,
                group_min_len,
                positive_label,
                negative_label,
            } => Emission::Pairs {
                selector: Box::new(LeadingClauseSplit {
                    lead_min_len: *lead_min_len,
                    group_min_len: *group_min_len,
                }),
                positive_label: positive_label.clone(),
                negative_label: negative_label.clone(),
            },
        };

        Ok(Self {
            name: config.metadata.name.clone(),
            min_len: config.filter.min_len,
            substitutions: config.substitutions.rules.clone(),
            cleanup,
            segmenter: build_segmenter(&config.segmentation)?,
            segment_filter: SegmentFilter::new(&config.segment_filter),
            emission,
            progress_interval: config.progress.interval,
        })
    }

    /// Build a pipeline for a built-in variant
    pub fn for_variant(variant: Variant) -> Result<Self> {
        Self::new(variant.config())
    }

    /// Override the minimum description length
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Replace the split-point strategy of a pair-emitting pipeline
    pub fn with_split_selector(mut self, selector: Box<dyn SplitSelector>) -> Result<Self> {
        if let Emission::Pairs { selector: slot, .. } = &mut self.emission {
            *slot = selector;
            return Ok(self);
        }
        Err(CleanError::Configuration(format!(
            "variant '{}' does not emit pairs",
            self.name
        )))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn progress_interval(&self) -> u64 {
        self.progress_interval
    }

    /// Process one raw input line
    pub fn process_line(&self, line: &str) -> Outcome {
        let line = line.trim();
        if line.is_empty() {
            return Outcome::Skip(SkipReason::EmptyLine);
        }

        let record: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(_) => return Outcome::Skip(SkipReason::MalformedJson),
        };

        match record.get(DESCRIPTION_FIELD).and_then(Value::as_str) {
            Some(description) => self.process_description(description),
            None => Outcome::Skip(SkipReason::MissingDescription),
        }
    }

    /// Process a description that was already extracted from its record
    pub fn process_description(&self, description: &str) -> Outcome {
        match self.clean_description(description) {
            Ok(lines) => Outcome::Emit(lines),
            Err(reason) => Outcome::Skip(reason),
        }
    }

    fn clean_description(&self, description: &str) -> std::result::Result<Vec<String>, SkipReason> {
        if char_len(description) < self.min_len {
            return Err(SkipReason::BelowMinLength);
        }

        let substituted = apply_substitutions(description, &self.substitutions);
        let mut text = collapse_whitespace(&substituted);
        if let Some(cleanup) = &self.cleanup {
            text = cleanup.apply(&text);
        }

        if char_len(&text) < self.min_len {
            return Err(SkipReason::BelowMinLength);
        }

        let segmenter = match &self.segmenter {
            Some(segmenter) => segmenter,
            None => return Ok(vec![text]),
        };

        let segments = segmenter.segment(&text);
        self.segment_filter.check(&segments)?;

        match &self.emission {
            Emission::Plain => Ok(vec![text.clone()]),
            Emission::Joined => Ok(vec![segments.join("\t")]),
            Emission::Pairs {
                selector,
                positive_label,
                negative_label,
            } => {
                // Both groups must be non-empty
                let idx = selector
                    .select(&segments)
                    .filter(|&idx| idx < segments.len().saturating_sub(1))
                    .ok_or(SkipReason::NoSplitPoint)?;
                let pair = SegmentPair::from_split(&segments, idx);
                Ok(vec![
                    pair.forward_line(positive_label),
                    pair.reversed_line(negative_label),
                ])
            }
        }
    }

    /// Clean every line of `reader` into `writer`.
    ///
    /// Per-record problems are counted in the returned statistics. Read and
    /// write failures abort the run; lines already written stay written.
    pub fn run<R, W, P>(&self, reader: R, writer: &mut W, mut progress: P) -> Result<CleanStats>
    where
        R: BufRead,
        W: Write,
        P: ProgressSink,
    {
        log::debug!(
            "cleaning with variant '{}' (min_len {})",
            self.name,
            self.min_len
        );

        let mut stats = CleanStats::new();

        for line in reader.lines() {
            let line = line.map_err(|source| CleanError::Read {
                line: stats.total + 1,
                source,
            })?;
            stats.record_line();

            // Reported before the line's own outcome is counted
            if stats.total % self.progress_interval == 0 {
                progress.checkpoint(&stats);
            }

            match self.process_line(&line) {
                Outcome::Emit(lines) => {
                    for out in &lines {
                        writeln!(writer, "{out}").map_err(CleanError::Write)?;
                    }
                    stats.record_output(lines.len());
                }
                Outcome::Skip(reason) => {
                    log::trace!("line {} skipped: {reason}", stats.total);
                    stats.record_skip(reason);
                }
            }
        }

        writer.flush().map_err(CleanError::Write)?;
        progress.finish(&stats);

        log::debug!(
            "finished: {} lines read, {} skipped, {} lines written",
            stats.total,
            stats.skipped,
            stats.lines_written
        );

        Ok(stats)
    }

    /// Clean `input` into `output`, creating or truncating the output file
    pub fn clean_file<P: ProgressSink>(
        &self,
        input: &Path,
        output: &Path,
        progress: P,
    ) -> Result<CleanStats> {
        let input_file = File::open(input).map_err(|source| CleanError::InputOpen {
            path: input.to_path_buf(),
            source,
        })?;
        let output_file = File::create(output).map_err(|source| CleanError::OutputCreate {
            path: output.to_path_buf(),
            source,
        })?;

        let mut writer = BufWriter::new(output_file);
        let stats = self.run(BufReader::new(input_file), &mut writer, progress)?;

        let output_file = writer
            .into_inner()
            .map_err(|e| CleanError::Write(e.into_error()))?;
        output_file.sync_all().map_err(CleanError::Write)?;

        Ok(stats)
    }
}

/// Clean a file with a built-in variant, optionally overriding its minimum length
pub fn clean_data<P: ProgressSink>(
    input: &Path,
    output: &Path,
    variant: Variant,
    min_len: Option<usize>,
    progress: P,
) -> Result<CleanStats> {
    let mut cleaner = LineCleaner::for_variant(variant)?;
    if let Some(min_len) = min_len {
        cleaner = cleaner.with_min_len(min_len);
    }
    cleaner.clean_file(input, output, progress)
}
