// exact.rs - Exact item comparator

use super::traits::ItemComparator;

/// Items match only when they are identical
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactComparator;

impl ItemComparator for ExactComparator {
    fn same_char(&self, presented: char, transcribed: char) -> bool {
        presented == transcribed
    }

    fn same_word(&self, presented: &str, transcribed: &str) -> bool {
        presented == transcribed
    }

    fn name(&self) -> &'static str {
        "EXACT"
    }

    fn description(&self) -> &'static str {
        "Items match only when identical (case-sensitive)"
    }
}
