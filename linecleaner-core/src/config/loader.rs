use super::types::VariantConfig;
use super::Variant;
use crate::error::{CleanError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

static VARIANT_CONFIGS: OnceLock<HashMap<&'static str, VariantConfig>> = OnceLock::new();

macro_rules! embed_variant_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

const EMBEDDED_CONFIGS: [(&str, &str); 3] = [
    embed_variant_config!("sentences", "../../configs/variants/sentences.toml"),
    embed_variant_config!("pairs", "../../configs/variants/pairs.toml"),
    embed_variant_config!("segments", "../../configs/variants/segments.toml"),
];

fn load_embedded_configs() -> Result<HashMap<&'static str, VariantConfig>> {
    let mut configs = HashMap::new();

    for (code, toml_content) in EMBEDDED_CONFIGS {
        let config = VariantConfig::from_toml_str(toml_content).map_err(|e| {
            CleanError::Configuration(format!("Failed to parse {code} preset: {e}"))
        })?;

        if config.metadata.name != code {
            return Err(CleanError::Configuration(format!(
                "Preset name mismatch: expected {}, got {}",
                code, config.metadata.name
            )));
        }

        configs.insert(code, config);
    }

    Ok(configs)
}

fn embedded_configs() -> &'static HashMap<&'static str, VariantConfig> {
    VARIANT_CONFIGS
        .get_or_init(|| load_embedded_configs().expect("Failed to load embedded variant presets"))
}

/// Look up a built-in variant preset by code
pub fn get_variant_config(code: &str) -> Result<&'static VariantConfig> {
    embedded_configs()
        .get(code)
        .ok_or_else(|| CleanError::UnknownVariant(code.to_string()))
}

/// Raw TOML text of a built-in preset, comments included
pub fn variant_template(variant: Variant) -> &'static str {
    let code = variant.code();
    EMBEDDED_CONFIGS
        .iter()
        .find(|(name, _)| *name == code)
        .map(|(_, content)| *content)
        .unwrap_or_default()
}

pub fn list_available_variants() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = embedded_configs().keys().copied().collect();
    codes.sort_unstable();
    codes
}

/// Load and validate a variant configuration from a TOML file
pub fn load_variant_file(path: &Path) -> Result<VariantConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        CleanError::Configuration(format!("Failed to read {}: {e}", path.display()))
    })?;
    VariantConfig::from_toml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, SegmentationConfig};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_get_variant_config_unknown() {
        match get_variant_config("nonexistent") {
            Err(CleanError::UnknownVariant(code)) => assert_eq!(code, "nonexistent"),
            other => panic!("Expected UnknownVariant error, got {other:?}"),
        }
    }

    #[test]
    fn test_sentences_preset() {
        let config = get_variant_config("sentences").unwrap();
        assert_eq!(config.filter.min_len, 80);
        assert_eq!(config.segmentation, SegmentationConfig::None);
        assert_eq!(config.output, OutputConfig::Plain);
        assert_eq!(config.substitutions.rules.len(), 4);
        assert_eq!(config.substitutions.rules[3].from, "\t\t");
        assert_eq!(config.substitutions.rules[3].to, "\t");
        assert!(!config.cleanup.is_enabled());
    }

    #[test]
    fn test_pairs_preset() {
        let config = get_variant_config("pairs").unwrap();
        assert_eq!(config.filter.min_len, 30);
        assert!(config.cleanup.colon_truncation);
        assert!(config.cleanup.strip_inline_numbering);
        assert_eq!(config.cleanup.enumeration_glyphs.len(), 26);
        assert_eq!(
            config.segmentation,
            SegmentationConfig::KeepTerminator {
                terminators: vec!['!', '?', '。', '.', '！', '？', '；']
            }
        );
        assert_eq!(config.segment_filter.min_segment_len, 10);
        assert!(matches!(
            config.output,
            OutputConfig::Pairs {
                lead_min_len: 15,
                group_min_len: 15,
                ..
            }
        ));
    }

    #[test]
    fn test_segments_preset() {
        let config = get_variant_config("segments").unwrap();
        assert_eq!(config.filter.min_len, 40);
        assert_eq!(config.segment_filter.min_segment_len, 25);
        assert_eq!(config.output, OutputConfig::Joined);
    }

    #[test]
    fn test_list_available_variants_sorted() {
        assert_eq!(
            list_available_variants(),
            vec!["pairs", "segments", "sentences"]
        );
    }

    #[test]
    fn test_get_variant_config_multiple_times() {
        let config1 = get_variant_config("pairs").unwrap();
        let config2 = get_variant_config("pairs").unwrap();
        assert!(std::ptr::eq(config1, config2));
    }

    #[test]
    fn test_variant_template_round_trips_through_parser() {
        for variant in Variant::ALL {
            let template = variant_template(variant);
            assert!(template.contains("[metadata]"));
            let parsed = VariantConfig::from_toml_str(template).unwrap();
            assert_eq!(parsed.metadata.name, variant.code());
        }
    }

    #[test]
    fn test_load_variant_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", variant_template(Variant::Segments)).unwrap();

        let config = load_variant_file(temp_file.path()).unwrap();
        assert_eq!(config.metadata.name, "segments");
    }

    #[test]
    fn test_load_variant_file_missing() {
        let err = load_variant_file(Path::new("/nonexistent/variant.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
