// mod.rs - Core logic module

pub mod alignment;
pub mod enumerate;
pub mod error;
pub mod matrix;
pub mod msd;

// Re-export main types for convenience
pub use alignment::{Alignment, EditCounts, EditOp, GAP};
pub use enumerate::{enumerate, EnumerationConfig, ThinningStats, DEFAULT_THINNING_THRESHOLD};
pub use error::MsdError;
pub use matrix::DistanceMatrix;
pub use msd::{Msd, MsdSummary};
