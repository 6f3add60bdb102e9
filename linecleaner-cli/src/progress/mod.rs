//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use linecleaner_core::{CleanStats, ProgressSink};
use std::time::Duration;

/// Progress reporter for a cleaning run
///
/// Checkpoint lines keep the historical `processed N, skiped :M` text so
/// that existing log scrapers still match.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the spinner shown while lines are read
    pub fn init(&mut self) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("[{elapsed_precise}] {spinner} {msg}")
        {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    fn report(&self, line: &str) {
        if self.quiet {
            return;
        }
        match &self.progress_bar {
            // A hidden bar swallows println, so fall back to stderr
            Some(pb) if !pb.is_hidden() => pb.println(line),
            _ => eprintln!("{line}"),
        }
    }
}

impl ProgressSink for ProgressReporter {
    fn checkpoint(&mut self, stats: &CleanStats) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{} lines read", stats.total));
        }
        self.report(&stats.progress_line());
    }

    fn finish(&mut self, stats: &CleanStats) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
        self.report(&stats.progress_line());
    }
}
