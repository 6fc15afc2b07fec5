// sequence.rs - Presented/transcribed sequence access for the MSD engine

use std::fmt::Debug;
use crate::compare::{ExactComparator, ItemComparator};

/// Sentinel transposition cost, larger than any real path cost.
/// Kept well below `u32::MAX` so sums of matrix cells never overflow.
pub const INFINITY: u32 = u32::MAX >> 2;

/// Access to the presented and transcribed texts of one computation, and the
/// means to compare their elements.
///
/// The distance matrix and the alignment enumerator depend only on this
/// trait, so the same engine scores strings of characters and lists of words.
/// Implementations must be immutable for the lifetime of a computation.
pub trait SequencePair: Send + Sync + Debug {
    /// Number of elements in the presented text
    fn presented_len(&self) -> usize;

    /// Element of the presented text, rendered as a string
    fn presented_item(&self, index: usize) -> String;

    /// Number of elements in the transcribed text
    fn transcribed_len(&self) -> usize;

    /// Element of the transcribed text, rendered as a string
    fn transcribed_item(&self, index: usize) -> String;

    /// 0 if `presented[p]` equals `transcribed[t]`, 1 otherwise
    fn item_distance(&self, p: usize, t: usize) -> u32;

    /// 1 if transpositions are enabled and the elements ending at `p` and `t`
    /// are swapped neighbours (`P[p-1] == T[t]` and `P[p] == T[t-1]`),
    /// [`INFINITY`] otherwise.
    fn transposed_distance(&self, p: usize, t: usize) -> u32;

    /// Whether this pair treats a swap of neighbours as one edit
    fn transpositions_allowed(&self) -> bool;
}

/// Character-level pair: every `char` is one element.
#[derive(Debug, Clone)]
pub struct CharPair {
    presented: Vec<char>,
    transcribed: Vec<char>,
    transpositions: bool,
    comparator: &'static dyn ItemComparator,
}

impl CharPair {
    pub fn new(presented: &str, transcribed: &str) -> Self {
        Self {
            presented: presented.chars().collect(),
            transcribed: transcribed.chars().collect(),
            transpositions: false,
            comparator: &ExactComparator,
        }
    }

    pub fn with_transpositions(mut self, allowed: bool) -> Self {
        self.transpositions = allowed;
        self
    }

    pub fn with_comparator(mut self, comparator: &'static dyn ItemComparator) -> Self {
        self.comparator = comparator;
        self
    }
}

impl SequencePair for CharPair {
    fn presented_len(&self) -> usize {
        self.presented.len()
    }

    fn presented_item(&self, index: usize) -> String {
        self.presented[index].to_string()
    }

    fn transcribed_len(&self) -> usize {
        self.transcribed.len()
    }

    fn transcribed_item(&self, index: usize) -> String {
        self.transcribed[index].to_string()
    }

    fn item_distance(&self, p: usize, t: usize) -> u32 {
        self.comparator.char_distance(self.presented[p], self.transcribed[t])
    }

    fn transposed_distance(&self, p: usize, t: usize) -> u32 {
        if !self.transpositions || p < 1 || t < 1 {
            return INFINITY;
        }

        let c = self.comparator;
        if c.same_char(self.presented[p - 1], self.transcribed[t])
            && c.same_char(self.presented[p], self.transcribed[t - 1])
        {
            1
        } else {
            INFINITY
        }
    }

    fn transpositions_allowed(&self) -> bool {
        self.transpositions
    }
}

/// Word-level pair: every token is one element.
/// Tokenization happens before construction; this type never splits text.
#[derive(Debug, Clone)]
pub struct WordPair {
    presented: Vec<String>,
    transcribed: Vec<String>,
    transpositions: bool,
    comparator: &'static dyn ItemComparator,
}

impl WordPair {
    pub fn new<P, T>(presented: P, transcribed: T) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            presented: presented.into_iter().map(Into::into).collect(),
            transcribed: transcribed.into_iter().map(Into::into).collect(),
            transpositions: false,
            comparator: &ExactComparator,
        }
    }

    pub fn with_transpositions(mut self, allowed: bool) -> Self {
        self.transpositions = allowed;
        self
    }

    pub fn with_comparator(mut self, comparator: &'static dyn ItemComparator) -> Self {
        self.comparator = comparator;
        self
    }
}

impl SequencePair for WordPair {
    fn presented_len(&self) -> usize {
        self.presented.len()
    }

    fn presented_item(&self, index: usize) -> String {
        self.presented[index].clone()
    }

    fn transcribed_len(&self) -> usize {
        self.transcribed.len()
    }

    fn transcribed_item(&self, index: usize) -> String {
        self.transcribed[index].clone()
    }

    fn item_distance(&self, p: usize, t: usize) -> u32 {
        self.comparator.word_distance(&self.presented[p], &self.transcribed[t])
    }

    fn transposed_distance(&self, p: usize, t: usize) -> u32 {
        if !self.transpositions || p < 1 || t < 1 {
            return INFINITY;
        }

        let c = self.comparator;
        if c.same_word(&self.presented[p - 1], &self.transcribed[t])
            && c.same_word(&self.presented[p], &self.transcribed[t - 1])
        {
            1
        } else {
            INFINITY
        }
    }

    fn transpositions_allowed(&self) -> bool {
        self.transpositions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::IgnoreCaseComparator;

    #[test]
    fn test_char_pair_access() {
        let pair = CharPair::new("héllo", "help");
        assert_eq!(pair.presented_len(), 5);
        assert_eq!(pair.transcribed_len(), 4);
        assert_eq!(pair.presented_item(1), "é");
        assert_eq!(pair.transcribed_item(3), "p");
        assert_eq!(pair.item_distance(0, 0), 0);
        assert_eq!(pair.item_distance(1, 1), 1);
    }

    #[test]
    fn test_char_pair_transposition() {
        let pair = CharPair::new("ab", "ba");
        assert_eq!(pair.transposed_distance(1, 1), INFINITY);

        let pair = pair.with_transpositions(true);
        assert!(pair.transpositions_allowed());
        assert_eq!(pair.transposed_distance(1, 1), 1);
        // No preceding element at the origin
        assert_eq!(pair.transposed_distance(0, 1), INFINITY);
        assert_eq!(pair.transposed_distance(1, 0), INFINITY);
    }

    #[test]
    fn test_char_pair_with_comparator() {
        let pair = CharPair::new("Ab", "bA")
            .with_transpositions(true)
            .with_comparator(&IgnoreCaseComparator);
        assert_eq!(pair.item_distance(0, 1), 0);
        assert_eq!(pair.transposed_distance(1, 1), 1);
    }

    #[test]
    fn test_word_pair() {
        let pair = WordPair::new(vec!["the", "quick", "fox"], vec!["quick", "the", "fox"])
            .with_transpositions(true);
        assert_eq!(pair.presented_len(), 3);
        assert_eq!(pair.transcribed_item(0), "quick");
        assert_eq!(pair.item_distance(2, 2), 0);
        assert_eq!(pair.item_distance(0, 0), 1);
        assert_eq!(pair.transposed_distance(1, 1), 1);
        assert_eq!(pair.transposed_distance(2, 2), INFINITY);
    }
}
