// alignment.rs - One minimum-cost alignment and its decoded views

use std::fmt;
use std::sync::{Arc, OnceLock};
use serde::{Deserialize, Serialize};
use crate::data::SequencePair;

/// Marker used in an aligned sequence where one side has no element
pub const GAP: &str = "-";

/// One edit operation of an explanation string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditOp {
    Correct,
    Insertion,
    Deletion,
    Substitution,
    Transposition,
}

impl EditOp {
    pub fn symbol(&self) -> char {
        match self {
            EditOp::Correct => 'c',
            EditOp::Insertion => 'i',
            EditOp::Deletion => 'd',
            EditOp::Substitution => 'x',
            EditOp::Transposition => 't',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'c' => Some(EditOp::Correct),
            'i' => Some(EditOp::Insertion),
            'd' => Some(EditOp::Deletion),
            'x' => Some(EditOp::Substitution),
            't' => Some(EditOp::Transposition),
            _ => None,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            EditOp::Correct => "correct",
            EditOp::Insertion => "insertion",
            EditOp::Deletion => "deletion",
            EditOp::Substitution => "substitution",
            EditOp::Transposition => "transposition",
        }
    }
}

/// Operation counts of one explanation string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCounts {
    pub correct: usize,
    pub insertions: usize,
    pub deletions: usize,
    pub substitutions: usize,
    /// Number of swaps; each swap occupies two `t` characters
    pub transpositions: usize,
}

impl EditCounts {
    pub fn from_explanation(explanation: &str) -> Self {
        let mut counts = Self::default();
        let mut t_chars = 0;

        for symbol in explanation.chars() {
            match symbol {
                'c' => counts.correct += 1,
                'i' => counts.insertions += 1,
                'd' => counts.deletions += 1,
                'x' => counts.substitutions += 1,
                't' => t_chars += 1,
                _ => {}
            }
        }

        counts.transpositions = t_chars / 2;
        counts
    }

    /// Total edit cost; equals the MSD for every alignment of a computation
    pub fn cost(&self) -> usize {
        self.insertions + self.deletions + self.substitutions + self.transpositions
    }
}

/// Aligned sequences and matrix path, computed on first use
#[derive(Debug, Clone)]
struct AlignedView {
    presented: Vec<String>,
    transcribed: Vec<String>,
    path: Vec<(usize, usize)>,
}

/// One discovered minimum-cost path through the distance matrix.
///
/// The explanation reads in presented-to-transcribed order:
///
/// ```text
///    Presented:     aaa bbb  -  ddd fff ggg
///    Transcribed:   aaa  -  ccc eee ggg fff
///    Explanation:    c   d   i   x   t   t
/// ```
#[derive(Debug, Clone)]
pub struct Alignment {
    explanation: String,
    sequences: Arc<dyn SequencePair>,
    view: OnceLock<AlignedView>,
}

impl Alignment {
    pub fn new(explanation: String, sequences: Arc<dyn SequencePair>) -> Self {
        Self {
            explanation,
            sequences,
            view: OnceLock::new(),
        }
    }

    /// The whole explanation string over `{c, i, d, x, t}`
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn explanation_len(&self) -> usize {
        self.explanation.len()
    }

    /// Explanation character at `index`
    pub fn explanation_at(&self, index: usize) -> char {
        self.explanation.as_bytes()[index] as char
    }

    pub fn ops(&self) -> impl Iterator<Item = EditOp> + '_ {
        self.explanation.chars().filter_map(EditOp::from_symbol)
    }

    pub fn edit_counts(&self) -> EditCounts {
        EditCounts::from_explanation(&self.explanation)
    }

    pub fn cost(&self) -> usize {
        self.edit_counts().cost()
    }

    fn view(&self) -> &AlignedView {
        self.view.get_or_init(|| decode(&self.explanation, self.sequences.as_ref()))
    }

    pub fn aligned_presented(&self) -> &[String] {
        &self.view().presented
    }

    pub fn aligned_transcribed(&self) -> &[String] {
        &self.view().transcribed
    }

    pub fn aligned_presented_len(&self) -> usize {
        self.view().presented.len()
    }

    pub fn aligned_transcribed_len(&self) -> usize {
        self.view().transcribed.len()
    }

    pub fn aligned_presented_item(&self, index: usize) -> &str {
        &self.view().presented[index]
    }

    pub fn aligned_transcribed_item(&self, index: usize) -> &str {
        &self.view().transcribed[index]
    }

    /// Matrix cells `(presented, transcribed)` visited by this alignment,
    /// from the origin to the terminal cell. One entry per explanation
    /// character plus the origin.
    pub fn path_cells(&self) -> &[(usize, usize)] {
        &self.view().path
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.explanation)
    }
}

/// Walk the explanation left to right. The presented offset lags the step
/// count by the insertions seen so far, the transcribed offset by the
/// deletions. Each `t` is one diagonal step.
fn decode(explanation: &str, sequences: &dyn SequencePair) -> AlignedView {
    let n = explanation.len();
    let mut presented = Vec::with_capacity(n);
    let mut transcribed = Vec::with_capacity(n);
    let mut path = Vec::with_capacity(n + 1);

    let mut insertions = 0;
    let mut deletions = 0;
    path.push((0, 0));

    for (step, symbol) in explanation.chars().enumerate() {
        let x = step - insertions;
        let y = step - deletions;

        match symbol {
            'i' => {
                presented.push(GAP.to_string());
                transcribed.push(sequences.transcribed_item(y));
                insertions += 1;
            }
            'd' => {
                presented.push(sequences.presented_item(x));
                transcribed.push(GAP.to_string());
                deletions += 1;
            }
            // c, x, t
            _ => {
                presented.push(sequences.presented_item(x));
                transcribed.push(sequences.transcribed_item(y));
            }
        }

        path.push((step + 1 - insertions, step + 1 - deletions));
    }

    AlignedView {
        presented,
        transcribed,
        path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CharPair, WordPair};

    fn char_alignment(explanation: &str, presented: &str, transcribed: &str) -> Alignment {
        Alignment::new(
            explanation.to_string(),
            Arc::new(CharPair::new(presented, transcribed)),
        )
    }

    #[test]
    fn test_decode_mixed() {
        let a = char_alignment("cdixtt", "abdfg", "acegf");
        assert_eq!(a.aligned_presented(), &["a", "b", "-", "d", "f", "g"]);
        assert_eq!(a.aligned_transcribed(), &["a", "-", "c", "e", "g", "f"]);
        assert_eq!(a.aligned_presented_len(), 6);
        assert_eq!(a.aligned_transcribed_len(), 6);
        assert_eq!(a.aligned_presented_item(2), GAP);
        assert_eq!(a.aligned_transcribed_item(2), "c");
        assert_eq!(a.to_string(), "cdixtt");
    }

    #[test]
    fn test_path_cells() {
        let a = char_alignment("cid", "ab", "ax");
        assert_eq!(a.path_cells(), &[(0, 0), (1, 1), (1, 2), (2, 2)]);
        assert_eq!(*a.path_cells().last().unwrap(), (2, 2));
    }

    #[test]
    fn test_edit_counts() {
        let a = char_alignment("cdixtt", "abdfg", "acegf");
        let counts = a.edit_counts();
        assert_eq!(counts.correct, 1);
        assert_eq!(counts.deletions, 1);
        assert_eq!(counts.insertions, 1);
        assert_eq!(counts.substitutions, 1);
        assert_eq!(counts.transpositions, 1);
        assert_eq!(a.cost(), 4);
    }

    #[test]
    fn test_ops_and_symbols() {
        let a = char_alignment("cx", "ab", "ac");
        let ops: Vec<EditOp> = a.ops().collect();
        assert_eq!(ops, vec![EditOp::Correct, EditOp::Substitution]);
        assert_eq!(a.explanation_at(1), 'x');
        for op in [
            EditOp::Correct,
            EditOp::Insertion,
            EditOp::Deletion,
            EditOp::Substitution,
            EditOp::Transposition,
        ] {
            assert_eq!(EditOp::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(EditOp::from_symbol('q'), None);
        assert_eq!(EditOp::Transposition.description(), "transposition");
    }

    #[test]
    fn test_decode_words() {
        let pair = WordPair::new(vec!["the", "cat"], vec!["the", "black", "cat"]);
        let a = Alignment::new("cic".to_string(), Arc::new(pair));
        assert_eq!(a.aligned_presented(), &["the", "-", "cat"]);
        assert_eq!(a.aligned_transcribed(), &["the", "black", "cat"]);
    }

    #[test]
    fn test_empty_explanation() {
        let a = char_alignment("", "", "");
        assert_eq!(a.explanation_len(), 0);
        assert!(a.aligned_presented().is_empty());
        assert_eq!(a.path_cells(), &[(0, 0)]);
    }
}
