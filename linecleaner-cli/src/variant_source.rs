//! Variant source management for CLI

use anyhow::{Context, Result};
use linecleaner_core::config::load_variant_file;
use linecleaner_core::{Variant, VariantConfig};
use std::path::PathBuf;

/// Where the cleaning rules come from
#[derive(Debug, Clone)]
pub enum VariantSource {
    /// Preset embedded in the binary
    BuiltIn(Variant),
    /// External TOML configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
    },
}

impl VariantSource {
    /// Get the display name for the variant source
    pub fn display_name(&self) -> String {
        match self {
            VariantSource::BuiltIn(variant) => format!("Built-in: {variant}"),
            VariantSource::External { path } => format!("External: {}", path.display()),
        }
    }

    /// Load the validated configuration
    pub fn load(&self) -> Result<VariantConfig> {
        match self {
            VariantSource::BuiltIn(variant) => Ok(variant.config().clone()),
            VariantSource::External { path } => load_variant_file(path)
                .with_context(|| format!("Failed to load variant config {}", path.display())),
        }
    }
}
