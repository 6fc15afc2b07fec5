// ignore_case.rs - Case-insensitive item comparator

use super::traits::ItemComparator;

/// Items match when they differ only by letter case.
/// Uses full Unicode lowercase mapping, so 'Σ' and 'σ' compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreCaseComparator;

impl ItemComparator for IgnoreCaseComparator {
    fn same_char(&self, presented: char, transcribed: char) -> bool {
        presented == transcribed || presented.to_lowercase().eq(transcribed.to_lowercase())
    }

    fn same_word(&self, presented: &str, transcribed: &str) -> bool {
        presented == transcribed || presented.to_lowercase() == transcribed.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "IGNORE-CASE"
    }

    fn description(&self) -> &'static str {
        "Items match when they differ only by letter case"
    }
}
