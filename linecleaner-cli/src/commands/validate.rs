//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use linecleaner_core::config::load_variant_file;
use linecleaner_core::LineCleaner;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to variant configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating variant configuration: {}", self.config.display());

        // Building the cleaner also compiles the segmentation and cleanup patterns
        let checked = load_variant_file(&self.config)
            .and_then(|config| LineCleaner::new(&config).map(|cleaner| (config, cleaner)));

        match checked {
            Ok((config, cleaner)) => {
                println!("✓ Configuration is valid!");
                println!("  Variant name: {}", cleaner.name());
                println!("  Minimum length: {}", cleaner.min_len());
                println!("  Substitutions: {}", config.substitutions.rules.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::Error::new(e)
                    .context(CliError::InvalidVariantFile(self.config.clone())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[metadata]
name = "custom"

[filter]
min_len = 12

[substitutions]
rules = [{ from = "<br/>", to = " " }]

[segmentation]
mode = "drop_delimiter"
delimiters = ["。"]

[output]
mode = "joined"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let toml_content = r#"
[metadata]
name = "broken"

[filter]
min_len = 12

[substitutions]
rules = []

[segmentation]
mode = "none"

[output]
mode = "pairs"
lead_min_len = 15
group_min_len = 15
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(format!("{err:#}").contains("requires a segmentation mode"));
    }
}
