// traits.rs - Core trait for item comparison strategies

use std::fmt::Debug;

/// Trait for deciding whether a presented item matches a transcribed item.
/// This allows pluggable matching rules for both character-level and
/// word-level scoring.
pub trait ItemComparator: Send + Sync + Debug {
    /// Compare two characters
    fn same_char(&self, presented: char, transcribed: char) -> bool;

    /// Compare two words
    fn same_word(&self, presented: &str, transcribed: &str) -> bool;

    /// Get a human-readable name for this comparator
    fn name(&self) -> &'static str;

    /// Get a description of this comparator
    fn description(&self) -> &'static str;

    /// Character distance: 0 when equal, 1 otherwise
    fn char_distance(&self, presented: char, transcribed: char) -> u32 {
        if self.same_char(presented, transcribed) {
            0
        } else {
            1
        }
    }

    /// Word distance: 0 when equal, 1 otherwise
    fn word_distance(&self, presented: &str, transcribed: &str) -> u32 {
        if self.same_word(presented, transcribed) {
            0
        } else {
            1
        }
    }
}
