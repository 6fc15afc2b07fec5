// mod.rs - CLI module

pub mod args;
pub mod config;
pub mod merge;
pub mod score;
pub mod tokenize;
pub mod validation;

// Re-export main types for convenience
pub use args::{Args, RunMode};
pub use config::Config;
pub use score::PairScorer;
pub use tokenize::split_words;
pub use validation::{validate_args, ValidationResult};
