//! Cleaning pipeline for JSON-lines description corpora
//!
//! Every input line is expected to be a JSON object with a free-text `des`
//! field. The pipeline normalizes the description, drops records that are
//! too short or badly structured, and writes the survivors in one of three
//! shapes:
//!
//! - **sentences**: the cleaned description, one per line
//! - **pairs**: `1\tA\tB` and `0\tB\tA` for a description cut into a leading
//!   group `A` and a trailing group `B`, for sentence-order classification
//! - **segments**: the description's clauses joined by tabs
//!
//! Unusable records are counted, never fatal; only I/O failures abort a run.
//!
//! # Example
//!
//! ```rust
//! use linecleaner_core::{LineCleaner, NoProgress, Variant};
//! use std::io::Cursor;
//!
//! let cleaner = LineCleaner::for_variant(Variant::Sentences)
//!     .unwrap()
//!     .with_min_len(10);
//!
//! let input = "{\"des\":\"first line<br/>second   line\"}\n{\"des\":\"short\"}\n";
//! let mut output = Vec::new();
//! let stats = cleaner
//!     .run(Cursor::new(input), &mut output, NoProgress)
//!     .unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "first line second line\n");
//! assert_eq!(stats.total, 2);
//! assert_eq!(stats.skipped, 1);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod heuristics;
pub mod normalize;
pub mod pipeline;
pub mod segment;
pub mod split;
pub mod stats;

pub use config::{Variant, VariantConfig};
pub use error::{CleanError, Result};
pub use normalize::collapse_whitespace;
pub use pipeline::{clean_data, LineCleaner, Outcome};
pub use segment::{DelimiterSplitter, Segmenter, TerminatorMatcher};
pub use split::{LeadingClauseSplit, SplitSelector};
pub use stats::{CleanStats, LogProgress, NoProgress, ProgressSink, SkipReason};
