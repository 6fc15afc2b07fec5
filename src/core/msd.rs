// msd.rs - Minimum String Distance computation: matrix, alignments, error rate

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::core::alignment::Alignment;
use crate::core::enumerate::{enumerate, EnumerationConfig, ThinningStats};
use crate::core::error::MsdError;
use crate::core::matrix::DistanceMatrix;
use crate::data::{CharPair, SequencePair, WordPair};

/// Scalar results of one computation, as consumed by scoring and reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsdSummary {
    pub msd: u32,
    pub alignment_count: usize,
    pub average_alignment_length: f64,
    pub error_rate: f64,
    pub thinning: ThinningStats,
}

/// The MSD of one presented/transcribed pair together with every alignment
/// the enumeration kept.
///
/// The matrix is built once and never mutated; alignments decode their
/// aligned sequences lazily from the shared pair.
#[derive(Debug, Clone)]
pub struct Msd {
    sequences: Arc<dyn SequencePair>,
    matrix: DistanceMatrix,
    alignments: Vec<Alignment>,
    average_length: f64,
    thinning: ThinningStats,
    expanded: usize,
}

impl Msd {
    pub fn compute(
        sequences: Arc<dyn SequencePair>,
        config: &EnumerationConfig,
    ) -> Result<Self, MsdError> {
        let matrix = DistanceMatrix::build(sequences.as_ref());
        let found = enumerate(&matrix, sequences.as_ref(), config)?;
        let average_length = found.average_length();

        let alignments = found
            .explanations
            .into_iter()
            .map(|e| Alignment::new(e, Arc::clone(&sequences)))
            .collect();

        Ok(Self {
            sequences,
            matrix,
            alignments,
            average_length,
            thinning: found.thinning,
            expanded: found.expanded,
        })
    }

    /// Character-level MSD with the default enumeration limits
    pub fn from_strings(
        presented: &str,
        transcribed: &str,
        transpositions: bool,
    ) -> Result<Self, MsdError> {
        let pair = CharPair::new(presented, transcribed).with_transpositions(transpositions);
        Self::compute(Arc::new(pair), &EnumerationConfig::default())
    }

    /// Word-level MSD over already tokenized texts
    pub fn from_words<S: AsRef<str>>(
        presented: &[S],
        transcribed: &[S],
        transpositions: bool,
    ) -> Result<Self, MsdError> {
        let pair = WordPair::new(
            presented.iter().map(|w| w.as_ref().to_string()),
            transcribed.iter().map(|w| w.as_ref().to_string()),
        )
        .with_transpositions(transpositions);
        Self::compute(Arc::new(pair), &EnumerationConfig::default())
    }

    pub fn msd(&self) -> u32 {
        self.matrix.msd()
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn sequences(&self) -> &dyn SequencePair {
        self.sequences.as_ref()
    }

    pub fn presented_len(&self) -> usize {
        self.sequences.presented_len()
    }

    pub fn presented_item(&self, index: usize) -> String {
        self.sequences.presented_item(index)
    }

    pub fn transcribed_len(&self) -> usize {
        self.sequences.transcribed_len()
    }

    pub fn transcribed_item(&self, index: usize) -> String {
        self.sequences.transcribed_item(index)
    }

    pub fn alignments(&self) -> &[Alignment] {
        &self.alignments
    }

    pub fn alignment(&self, index: usize) -> &Alignment {
        &self.alignments[index]
    }

    pub fn alignment_count(&self) -> usize {
        self.alignments.len()
    }

    pub fn average_alignment_length(&self) -> f64 {
        self.average_length
    }

    /// `MSD / average alignment length * 100`.
    ///
    /// Two empty texts produce a single empty alignment; their error rate is
    /// 0.0 rather than NaN.
    pub fn error_rate(&self) -> f64 {
        if self.average_length == 0.0 {
            return 0.0;
        }
        self.msd() as f64 / self.average_length * 100.0
    }

    pub fn thinning(&self) -> ThinningStats {
        self.thinning
    }

    /// True when growth mitigation discarded part of the alignment set
    pub fn is_approximate(&self) -> bool {
        self.thinning.is_approximate()
    }

    /// Frontier nodes expanded by the alignment search
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn summary(&self) -> MsdSummary {
        MsdSummary {
            msd: self.msd(),
            alignment_count: self.alignment_count(),
            average_alignment_length: self.average_length,
            error_rate: self.error_rate(),
            thinning: self.thinning,
        }
    }
}
