// score.rs - Turn validated options into MSD computations

use std::sync::Arc;
use regex::Regex;
use crate::cli::args::Args;
use crate::cli::tokenize::split_words;
use crate::cli::validation::ValidationResult;
use crate::compare::ItemComparator;
use crate::core::{EnumerationConfig, Msd, MsdError};
use crate::data::{CharPair, SequencePair, TrialPair, WordPair};
use crate::output::ResultRow;

/// Scores presented/transcribed pairs with one fixed set of options.
/// Shared read-only across batch worker threads.
#[derive(Debug, Clone)]
pub struct PairScorer {
    comparator: &'static dyn ItemComparator,
    transpositions: bool,
    word_delimiter: Option<Regex>,
    enumeration: EnumerationConfig,
}

impl PairScorer {
    pub fn new(args: &Args, validation: &ValidationResult) -> Self {
        Self {
            comparator: validation.comparator,
            transpositions: args.transpositions,
            word_delimiter: args.word_level.then(|| validation.word_delimiter.clone()),
            enumeration: validation.enumeration.clone(),
        }
    }

    pub fn is_word_level(&self) -> bool {
        self.word_delimiter.is_some()
    }

    pub fn transpositions(&self) -> bool {
        self.transpositions
    }

    fn sequences(&self, presented: &str, transcribed: &str) -> Arc<dyn SequencePair> {
        match &self.word_delimiter {
            Some(delimiter) => Arc::new(
                WordPair::new(
                    split_words(presented, delimiter),
                    split_words(transcribed, delimiter),
                )
                .with_transpositions(self.transpositions)
                .with_comparator(self.comparator),
            ),
            None => Arc::new(
                CharPair::new(presented, transcribed)
                    .with_transpositions(self.transpositions)
                    .with_comparator(self.comparator),
            ),
        }
    }

    pub fn score(&self, presented: &str, transcribed: &str) -> Result<Msd, MsdError> {
        Msd::compute(self.sequences(presented, transcribed), &self.enumeration)
    }

    pub fn score_trial(&self, trial: &TrialPair) -> Result<ResultRow, String> {
        let msd = self
            .score(&trial.presented, &trial.transcribed)
            .map_err(|e| format!("Trial '{}': {}", trial.id, e))?;
        Ok(ResultRow::from_trial(trial, &msd))
    }
}
