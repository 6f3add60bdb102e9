//! Generate config command implementation

use super::clean::VariantArg;
use anyhow::{Context, Result};
use clap::Args;
use linecleaner_core::config::variant_template;
use linecleaner_core::Variant;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Built-in variant to start from
    #[arg(long, value_enum, default_value = "sentences")]
    pub variant: VariantArg,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        let variant = Variant::from(self.variant);
        println!("Generating variant configuration template...");
        println!("  Based on: {variant}");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, variant_template(variant))
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to customize the cleaning rules");
        println!("2. Validate your configuration:");
        println!("   linecleaner validate --config {}", self.output.display());
        println!("3. Use it for cleaning:");
        println!(
            "   linecleaner clean -i input.jsonl -o output.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}
