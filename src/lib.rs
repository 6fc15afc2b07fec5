// lib.rs - msdist library root

//! # msdist - Minimum String Distance for text entry evaluation
//!
//! Computes the Minimum String Distance (MSD) between a presented and a
//! transcribed text, enumerates every optimal alignment between them and
//! derives the MSD error rate used to score text-entry experiments.
//!
//! ## Features
//!
//! - **Exact MSD**: Levenshtein distance, optionally with adjacent transpositions
//! - **All optimal alignments**: each explained as a string over `c`, `i`, `d`, `x`, `t`
//! - **Character or word level**: any sequence pair implementing [`data::SequencePair`]
//! - **Pluggable comparators**: exact or case-insensitive item matching
//! - **Batch scoring**: TSV/CSV trial files scored in parallel, TSV/CSV/JSON results
//!
//! ## Basic Usage
//!
//! ```rust
//! use msdist::prelude::*;
//!
//! let msd = Msd::from_strings("quickly", "qucehkly", false)?;
//! assert_eq!(msd.msd(), 3);
//!
//! for alignment in msd.alignments() {
//!     println!("{}", alignment);
//! }
//! println!("error rate: {:.2}%", msd.error_rate());
//! # Ok::<(), MsdError>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod compare;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::compare::{ComparatorRegistry, ExactComparator, IgnoreCaseComparator, ItemComparator};
    pub use crate::core::{Alignment, EditCounts, EditOp, EnumerationConfig, Msd, MsdError, ThinningStats};
    pub use crate::data::{CharPair, SequencePair, TrialPair, TrialSet, WordPair};
    pub use crate::output::{write_results, OutputFormat, ResultRow};
}

// Re-export main types at the root level for convenience
pub use compare::{ComparatorRegistry, ItemComparator};
pub use core::{Alignment, EnumerationConfig, Msd, MsdError};
pub use data::{CharPair, SequencePair, WordPair};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "msdist v{} - Minimum String Distance and optimal alignments",
        VERSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_info() {
        assert!(get_info().starts_with("msdist v"));
        assert!(get_info().contains(VERSION));
    }
}
