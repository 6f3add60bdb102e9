//! Cleanup heuristics for descriptions with a title clause or list numbering

use regex::Regex;

use crate::config::CleanupConfig;
use crate::error::Result;

const FULLWIDTH_COLON: &str = "：";
const ASCII_COLON_SPACE: &str = ": ";

/// Digit between two non-digit runs; only 1-9 count as list numbers
const INLINE_NUMBERING: &str = r"([^123456789]*)[1-9]([^123456789]+)";

/// Keep only what follows the last colon.
///
/// The full-width colon is handled first, then the ASCII `": "` pair. A colon
/// at index 0 is ignored. Only the colon character itself is removed, so any
/// space after an ASCII colon stays in the text.
pub fn truncate_after_colon(text: &str) -> &str {
    let mut rest = text;
    if let Some(idx) = rest.rfind(FULLWIDTH_COLON) {
        if idx > 0 {
            rest = &rest[idx + FULLWIDTH_COLON.len()..];
        }
    }
    if let Some(idx) = rest.rfind(ASCII_COLON_SPACE) {
        if idx > 0 {
            rest = &rest[idx + 1..];
        }
    }
    rest
}

/// Compiled cleanup step of a variant
#[derive(Debug, Clone)]
pub struct Cleanup {
    colon_truncation: bool,
    glyphs: Option<Regex>,
    numbering: Option<Regex>,
}

impl Cleanup {
    pub fn from_config(config: &CleanupConfig) -> Result<Self> {
        let glyphs = if config.enumeration_glyphs.is_empty() {
            None
        } else {
            let alternation = config
                .enumeration_glyphs
                .iter()
                .map(|glyph| regex::escape(glyph))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&alternation)?)
        };

        let numbering = if config.strip_inline_numbering {
            Some(Regex::new(INLINE_NUMBERING)?)
        } else {
            None
        };

        Ok(Self {
            colon_truncation: config.colon_truncation,
            glyphs,
            numbering,
        })
    }

    pub fn apply(&self, text: &str) -> String {
        let text = if self.colon_truncation {
            truncate_after_colon(text)
        } else {
            text
        };

        let text = match &self.glyphs {
            Some(re) => re.replace_all(text, "").into_owned(),
            None => text.to_string(),
        };

        // First occurrence only: later list numbers are left in place.
        match &self.numbering {
            Some(re) => re.replacen(&text, 1, "${1}${2}").into_owned(),
            None => text,
        }
    }
}
