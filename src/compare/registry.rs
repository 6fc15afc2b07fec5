// registry.rs - Comparator registry for managing available comparators

use std::collections::HashMap;
use super::traits::ItemComparator;
use super::{ExactComparator, IgnoreCaseComparator};

/// Registry for available comparators
pub struct ComparatorRegistry {
    comparators: HashMap<String, &'static dyn ItemComparator>,
}

impl ComparatorRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            comparators: HashMap::new(),
        };

        // Register built-in comparators
        registry.register_comparator("exact", &ExactComparator);
        registry.register_comparator("ignore-case", &IgnoreCaseComparator);

        registry
    }

    /// Register a new comparator
    pub fn register_comparator(&mut self, name: &str, comparator: &'static dyn ItemComparator) {
        self.comparators.insert(name.to_string(), comparator);
    }

    /// Get a comparator by name
    pub fn get_comparator(&self, name: &str) -> Option<&'static dyn ItemComparator> {
        self.comparators.get(name).copied()
    }

    /// Check if a comparator exists
    pub fn has_comparator(&self, name: &str) -> bool {
        self.comparators.contains_key(name)
    }

    /// List all available comparators
    pub fn list_comparators(&self) -> Vec<(&str, &str)> {
        let mut listed: Vec<(&str, &str)> = self
            .comparators
            .iter()
            .map(|(key, c)| (key.as_str(), c.description()))
            .collect();
        listed.sort();
        listed
    }

    /// Get all comparator names
    pub fn get_comparator_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.comparators.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for ComparatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
