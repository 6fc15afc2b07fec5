// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output (single-pair and interactive runs never pick up a batch input)
        if self.input.is_none() && self.presented.is_none() && !self.interactive {
            self.input = config.input;
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if self.format == "tsv" {
            if let Some(format) = config.format {
                self.format = format;
            }
        }

        // Comparison (only override defaults, not explicit CLI values)
        if self.word_delimiter == "\\s+" {
            if let Some(delimiter) = config.word_delimiter {
                self.word_delimiter = delimiter;
            }
        }
        if self.comparator == "exact" {
            if let Some(comparator) = config.comparator {
                self.comparator = comparator;
            }
        }

        // Search limits
        if self.thinning_threshold == 200 {
            if let Some(threshold) = config.thinning_threshold {
                self.thinning_threshold = threshold;
            }
        }
        if self.max_expansions.is_none() {
            self.max_expansions = config.max_expansions;
        }

        // Display
        if self.max_shown == 10 {
            if let Some(max_shown) = config.max_shown {
                self.max_shown = max_shown;
            }
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.transpositions && config.transpositions.unwrap_or(false) {
            self.transpositions = true;
        }
        if !self.word_level && config.word_level.unwrap_or(false) {
            self.word_level = true;
        }
        if !self.show_paths && config.show_paths.unwrap_or(false) {
            self.show_paths = true;
        }
        if !self.quiet && config.quiet.unwrap_or(false) {
            self.quiet = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
