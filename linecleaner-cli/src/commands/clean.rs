//! Clean command implementation

use crate::error::CliError;
use crate::output::{write_summary, SummaryFormat};
use crate::progress::ProgressReporter;
use crate::variant_source::VariantSource;
use anyhow::{Context, Result};
use clap::Args;
use linecleaner_core::{LineCleaner, Variant};
use std::io;
use std::path::{Path, PathBuf};

/// Arguments for the clean command
#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Input JSON-lines file with a `des` field per record
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file, created or truncated
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Minimum description length in characters (default: the variant's own)
    #[arg(short, long, value_name = "CHARS")]
    pub min_len: Option<usize>,

    /// Built-in cleaning variant
    #[arg(long, value_enum, default_value = "sentences", conflicts_with = "config")]
    pub variant: VariantArg,

    /// Variant configuration file (TOML) used instead of a built-in variant
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Format of the run summary printed to stdout
    #[arg(long, value_enum, default_value = "text")]
    pub summary: SummaryFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Built-in variants selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VariantArg {
    /// One cleaned description per line
    Sentences,
    /// Labelled forward and reversed sentence-order pairs
    Pairs,
    /// Clauses joined by tabs
    Segments,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Sentences => Variant::Sentences,
            VariantArg::Pairs => Variant::Pairs,
            VariantArg::Segments => Variant::Segments,
        }
    }
}

impl CleanArgs {
    /// Execute the clean command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting cleaning run");
        log::debug!("Arguments: {:?}", self);

        self.check_paths()?;

        let source = self.variant_source();
        let config = source.load()?;
        let mut cleaner = LineCleaner::new(&config)
            .with_context(|| format!("Failed to build cleaner from {}", source.display_name()))?;
        if let Some(min_len) = self.min_len {
            cleaner = cleaner.with_min_len(min_len);
        }
        log::info!(
            "Variant {} with minimum length {}",
            source.display_name(),
            cleaner.min_len()
        );

        let mut reporter = ProgressReporter::new(self.quiet);
        reporter.init();

        let stats = cleaner
            .clean_file(&self.input, &self.output, &mut reporter)
            .with_context(|| {
                format!(
                    "Failed to clean {} into {}",
                    self.input.display(),
                    self.output.display()
                )
            })?;
        log::info!(
            "Wrote {} lines for {} records",
            stats.lines_written,
            stats.records_written
        );

        write_summary(io::stdout().lock(), &stats, self.summary)
    }

    fn variant_source(&self) -> VariantSource {
        match &self.config {
            Some(path) => VariantSource::External { path: path.clone() },
            None => VariantSource::BuiltIn(self.variant.into()),
        }
    }

    /// Reject runs that would truncate the input before reading it
    fn check_paths(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(CliError::MissingInput(self.input.clone()).into());
        }
        if same_file(&self.input, &self.output) {
            return Err(CliError::OutputIsInput(self.output.clone()).into());
        }
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when several commands run in one process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
