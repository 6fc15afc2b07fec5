// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,
    pub output: Option<String>,
    pub format: Option<String>,

    // Comparison
    pub transpositions: Option<bool>,
    pub word_level: Option<bool>,
    pub word_delimiter: Option<String>,
    pub comparator: Option<String>,

    // Search limits
    pub thinning_threshold: Option<usize>,
    pub max_expansions: Option<usize>,

    // Display
    pub show_paths: Option<bool>,
    pub max_shown: Option<usize>,

    // Performance
    pub threads: Option<usize>,

    // Flags
    pub quiet: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# msdist.toml - Configuration file for msdist
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Trial file for batch scoring (.tsv, .txt or .csv)
# Columns: presented, transcribed and optionally id, keystrokes, time_ms
input = "trials.tsv"

# Output results file
output = "results.tsv"

# Output format: tsv, csv, json
format = "tsv"

# =============================================================================
# COMPARISON
# =============================================================================

# Count an adjacent swap as a single edit
transpositions = false

# Compare word sequences instead of characters
word_level = false

# Regex separating words in word-level mode
word_delimiter = '\s+'

# Item comparator: exact, ignore-case
comparator = "exact"

# =============================================================================
# SEARCH LIMITS
# =============================================================================

# Frontier size above which the alignment search is thinned.
# Thinned results are flagged; the MSD itself is always exact.
thinning_threshold = 200

# Hard limit on search nodes expanded per pair (omit for unlimited)
# max_expansions = 1000000

# =============================================================================
# DISPLAY
# =============================================================================

# Print each alignment as an annotated matrix path
show_paths = false

# Maximum number of alignments printed per pair
max_shown = 10

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads for batch scoring (omit for auto-detection)
# threads = 8

# =============================================================================
# FLAGS
# =============================================================================

# Suppress status lines
quiet = false

# Validate inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.input.as_deref(), Some("trials.tsv"));
        assert_eq!(config.format.as_deref(), Some("tsv"));
        assert_eq!(config.word_delimiter.as_deref(), Some("\\s+"));
        assert_eq!(config.comparator.as_deref(), Some("exact"));
        assert_eq!(config.thinning_threshold, Some(200));
        assert_eq!(config.max_expansions, None);
        assert_eq!(config.threads, None);
        assert_eq!(config.transpositions, Some(false));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join("msdist_config_round_trip.toml");
        let config = Config {
            comparator: Some("ignore-case".to_string()),
            transpositions: Some(true),
            max_expansions: Some(5000),
            ..Config::new()
        };

        config.to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/msdist.toml").unwrap_err();
        assert!(err.contains("Failed to read config file"));
    }
}
