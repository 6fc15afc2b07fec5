// error.rs - Error classification for MSD computations

use std::fmt;

/// Failures surfaced by the MSD engine.
///
/// Normal computations never fail; these only arise from a bad
/// configuration or from an explicit work budget set by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MsdError {
    /// Precondition violation in the caller's input or configuration
    InvalidInput(String),
    /// The alignment search expanded more frontier nodes than allowed
    ResourceExhausted { expanded: usize, limit: usize },
}

impl fmt::Display for MsdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MsdError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            MsdError::ResourceExhausted { expanded, limit } => write!(
                f,
                "Alignment search exhausted its budget: {} nodes expanded (limit {})",
                expanded, limit
            ),
        }
    }
}

impl std::error::Error for MsdError {}

impl From<MsdError> for String {
    fn from(e: MsdError) -> Self {
        e.to_string()
    }
}
