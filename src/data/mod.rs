// mod.rs - Data structures module

pub mod loaders;
pub mod sequence;
pub mod trials;

// Re-export main types for convenience
pub use sequence::{CharPair, SequencePair, WordPair, INFINITY};
pub use trials::{TrialColumns, TrialPair, TrialSet};
