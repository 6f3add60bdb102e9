//! List command implementation

use crate::CliResult;
use linecleaner_core::Variant;

/// Print every built-in variant with its default threshold
pub fn list_variants() -> CliResult<()> {
    println!("Available variants:");
    for variant in Variant::ALL {
        let config = variant.config();
        println!(
            "  {:<10} min_len {:<4} {}",
            variant.code(),
            config.filter.min_len,
            config.metadata.description
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_variants_succeeds() {
        assert!(list_variants().is_ok());
    }
}
