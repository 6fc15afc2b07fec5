// validation.rs - Input validation utilities

use std::path::Path;
use std::str::FromStr;
use regex::Regex;
use crate::cli::args::{Args, RunMode};
use crate::compare::{ComparatorRegistry, ItemComparator};
use crate::core::EnumerationConfig;
use crate::output::OutputFormat;

pub struct ValidationResult {
    pub mode: RunMode,
    pub format: OutputFormat,
    pub comparator: &'static dyn ItemComparator,
    pub word_delimiter: Regex,
    pub enumeration: EnumerationConfig,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let mode = args.run_mode()?;

    // Validate comparator
    let registry = ComparatorRegistry::new();
    let comparator = registry.get_comparator(&args.comparator).ok_or_else(|| {
        format!(
            "Invalid comparator '{}'. Available: {}",
            args.comparator,
            registry.get_comparator_names().join(", ")
        )
    })?;

    let format = OutputFormat::from_str(&args.format)?;

    let word_delimiter = Regex::new(&args.word_delimiter)
        .map_err(|e| format!("Invalid word_delimiter regex: {}", e))?;
    if word_delimiter.is_match("") {
        return Err(format!(
            "Word delimiter '{}' matches the empty string",
            args.word_delimiter
        ));
    }

    let enumeration = EnumerationConfig {
        thinning_threshold: args.thinning_threshold,
        max_expansions: args.max_expansions,
    };
    enumeration.validate()?;

    if args.max_shown == 0 {
        return Err("--max-shown must be at least 1".to_string());
    }
    if args.threads == Some(0) {
        return Err("--threads must be at least 1".to_string());
    }

    // Batch-only checks
    if mode == RunMode::Batch {
        if let Some(input) = &args.input {
            if !Path::new(input).exists() {
                return Err(format!("Input file '{}' does not exist", input));
            }
        }
        if args.output.is_none() {
            return Err("--output is required when scoring an --input file".to_string());
        }
    } else if args.output.is_some() {
        return Err("--output is only used together with --input".to_string());
    }

    Ok(ValidationResult {
        mode,
        format,
        comparator,
        word_delimiter,
        enumeration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(p: &str, t: &str) -> Args {
        let mut args = Args::defaults();
        args.presented = Some(p.to_string());
        args.transcribed = Some(t.to_string());
        args
    }

    #[test]
    fn test_valid_defaults() {
        let result = validate_args(&single("cat", "cot")).unwrap();
        assert_eq!(result.mode, RunMode::Single);
        assert_eq!(result.format, OutputFormat::Tsv);
        assert_eq!(result.comparator.name(), "EXACT");
        assert_eq!(result.enumeration, EnumerationConfig::default());
        assert!(result.word_delimiter.is_match(" "));
    }

    #[test]
    fn test_resolves_comparator() {
        let mut args = single("cat", "COT");
        args.comparator = "ignore-case".to_string();
        let result = validate_args(&args).unwrap();
        assert_eq!(result.comparator.name(), "IGNORE-CASE");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut args = single("a", "b");
        args.comparator = "fuzzy".to_string();
        let err = validate_args(&args).err().unwrap();
        assert!(err.contains("exact, ignore-case"));

        let mut args = single("a", "b");
        args.format = "xml".to_string();
        assert!(validate_args(&args).is_err());

        let mut args = single("a", "b");
        args.word_delimiter = "(".to_string();
        assert!(validate_args(&args).is_err());

        let mut args = single("a", "b");
        args.word_delimiter = "\\s*".to_string();
        assert!(validate_args(&args).is_err());

        let mut args = single("a", "b");
        args.thinning_threshold = 0;
        assert!(validate_args(&args).is_err());

        let mut args = single("a", "b");
        args.max_expansions = Some(0);
        assert!(validate_args(&args).is_err());

        let mut args = single("a", "b");
        args.output = Some("out.tsv".to_string());
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_batch_requires_existing_input_and_output() {
        let mut args = Args::defaults();
        args.input = Some("/nonexistent/trials.tsv".to_string());
        args.output = Some("results.tsv".to_string());
        let err = validate_args(&args).err().unwrap();
        assert!(err.contains("does not exist"));

        let path = std::env::temp_dir().join("msdist_validation_trials.tsv");
        std::fs::write(&path, "presented\ttranscribed\ncat\tcot\n").unwrap();

        let mut args = Args::defaults();
        args.input = Some(path.to_string_lossy().to_string());
        assert!(validate_args(&args).is_err());

        args.output = Some("results.tsv".to_string());
        let result = validate_args(&args).unwrap();
        assert_eq!(result.mode, RunMode::Batch);

        std::fs::remove_file(&path).ok();
    }
}
