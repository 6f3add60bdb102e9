use serde::{Deserialize, Serialize};

use crate::error::{CleanError, Result};

/// Default number of input lines between two progress checkpoints
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

/// Complete description of one cleaning variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantConfig {
    pub metadata: MetadataConfig,
    pub filter: FilterConfig,
    pub substitutions: SubstitutionConfig,
    #[serde(default)]
    pub cleanup: CleanupConfig,
    pub segmentation: SegmentationConfig,
    #[serde(default)]
    pub segment_filter: SegmentFilterConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum description length in code points, checked before and after cleanup
    pub min_len: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionConfig {
    pub rules: Vec<SubstitutionRule>,
}

/// Literal replacement, applied to every occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanupConfig {
    #[serde(default)]
    pub colon_truncation: bool,
    #[serde(default)]
    pub enumeration_glyphs: Vec<String>,
    #[serde(default)]
    pub strip_inline_numbering: bool,
}

impl CleanupConfig {
    pub fn is_enabled(&self) -> bool {
        self.colon_truncation || !self.enumeration_glyphs.is_empty() || self.strip_inline_numbering
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SegmentationConfig {
    /// Text is emitted whole
    None,
    /// Each segment keeps its trailing terminator
    KeepTerminator { terminators: Vec<char> },
    /// Text is split on delimiters, which are discarded
    DropDelimiter { delimiters: Vec<char> },
}

impl SegmentationConfig {
    pub fn is_none(&self) -> bool {
        matches!(self, SegmentationConfig::None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentFilterConfig {
    pub min_segments: usize,
    pub min_segment_len: usize,
    /// Segment lengths are only checked when the count is at most this value
    pub checked_up_to: usize,
}

impl Default for SegmentFilterConfig {
    fn default() -> Self {
        Self {
            min_segments: 1,
            min_segment_len: 0,
            checked_up_to: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OutputConfig {
    Plain,
    Joined,
    Pairs {
        lead_min_len: usize,
        group_min_len: usize,
        #[serde(default = "default_positive_label")]
        positive_label: String,
        #[serde(default = "default_negative_label")]
        negative_label: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressConfig {
    #[serde(default = "default_interval")]
    pub interval: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

fn default_positive_label() -> String {
    "1".to_string()
}

fn default_negative_label() -> String {
    "0".to_string()
}

fn default_interval() -> u64 {
    DEFAULT_PROGRESS_INTERVAL
}

impl VariantConfig {
    /// Parse a variant from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: VariantConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the combination of settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.metadata.name.trim().is_empty() {
            return Err(CleanError::Configuration(
                "metadata.name must not be empty".into(),
            ));
        }

        if let Some(index) = self.substitutions.rules.iter().position(|r| r.from.is_empty()) {
            return Err(CleanError::Configuration(format!(
                "substitution rule {index} has an empty 'from' pattern"
            )));
        }

        if self.progress.interval == 0 {
            return Err(CleanError::Configuration(
                "progress.interval must be greater than 0".into(),
            ));
        }

        match &self.segmentation {
            SegmentationConfig::None => {}
            SegmentationConfig::KeepTerminator { terminators } if terminators.is_empty() => {
                return Err(CleanError::Configuration(
                    "segmentation.terminators must not be empty".into(),
                ));
            }
            SegmentationConfig::DropDelimiter { delimiters } if delimiters.is_empty() => {
                return Err(CleanError::Configuration(
                    "segmentation.delimiters must not be empty".into(),
                ));
            }
            _ => {
                if self.segment_filter.min_segments == 0 {
                    return Err(CleanError::Configuration(
                        "segment_filter.min_segments must be greater than 0".into(),
                    ));
                }
            }
        }

        match &self.output {
            OutputConfig::Plain if !self.segmentation.is_none() => {
                Err(CleanError::Configuration(
                    "plain output does not use segmentation; set segmentation.mode = \"none\""
                        .into(),
                ))
            }
            OutputConfig::Joined if self.segmentation.is_none() => Err(
                CleanError::Configuration("joined output requires a segmentation mode".into()),
            ),
            OutputConfig::Pairs {
                positive_label,
                negative_label,
                ..
            } => {
                if self.segmentation.is_none() {
                    return Err(CleanError::Configuration(
                        "pairs output requires a segmentation mode".into(),
                    ));
                }
                if self.segment_filter.min_segments < 2 {
                    return Err(CleanError::Configuration(
                        "pairs output requires segment_filter.min_segments >= 2".into(),
                    ));
                }
                if positive_label == negative_label {
                    return Err(CleanError::Configuration(
                        "pair labels must differ".into(),
                    ));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
