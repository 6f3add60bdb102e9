//! Variant configuration
//!
//! A variant bundles every tunable of the cleaning pipeline: the length
//! threshold, the substitution table, the optional cleanup heuristics, the
//! segmentation strategy and the output shape. Three presets ship embedded in
//! the crate; custom variants are read from TOML files with the same layout.

mod loader;
mod types;

use std::fmt;
use std::str::FromStr;

use crate::error::CleanError;

pub use loader::{get_variant_config, list_available_variants, load_variant_file, variant_template};
pub use types::{
    CleanupConfig, FilterConfig, MetadataConfig, OutputConfig, ProgressConfig, SegmentFilterConfig,
    SegmentationConfig, SubstitutionConfig, SubstitutionRule, VariantConfig,
    DEFAULT_PROGRESS_INTERVAL,
};

/// Built-in cleaning variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// One normalized description per line
    #[default]
    Sentences,
    /// Labelled forward/reversed sentence-group pairs
    Pairs,
    /// Tab-joined clauses of multi-clause descriptions
    Segments,
}

impl Variant {
    /// All built-in variants
    pub const ALL: [Variant; 3] = [Variant::Sentences, Variant::Pairs, Variant::Segments];

    /// Preset code, also the `metadata.name` of the embedded TOML
    pub fn code(&self) -> &'static str {
        match self {
            Variant::Sentences => "sentences",
            Variant::Pairs => "pairs",
            Variant::Segments => "segments",
        }
    }

    /// The embedded configuration for this variant
    pub fn config(&self) -> &'static VariantConfig {
        get_variant_config(self.code()).expect("every built-in variant has an embedded preset")
    }

    /// Default minimum description length
    pub fn default_min_len(&self) -> usize {
        self.config().filter.min_len
    }
}

impl FromStr for Variant {
    type Err = CleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sentences" | "plain" => Ok(Variant::Sentences),
            "pairs" | "pair" => Ok(Variant::Pairs),
            "segments" | "joined" => Ok(Variant::Segments),
            _ => Err(CleanError::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_from_str() {
        assert_eq!("pairs".parse::<Variant>().unwrap(), Variant::Pairs);
        assert_eq!("SENTENCES".parse::<Variant>().unwrap(), Variant::Sentences);
        assert_eq!("joined".parse::<Variant>().unwrap(), Variant::Segments);
        assert!("other".parse::<Variant>().is_err());
    }

    #[test]
    fn test_default_min_len() {
        assert_eq!(Variant::Sentences.default_min_len(), 80);
        assert_eq!(Variant::Pairs.default_min_len(), 30);
        assert_eq!(Variant::Segments.default_min_len(), 40);
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Segments.to_string(), "segments");
        assert_eq!(Variant::default(), Variant::Sentences);
    }
}
