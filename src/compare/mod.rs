// mod.rs - Item comparators module root

pub mod exact;
pub mod ignore_case;
pub mod registry;
pub mod traits;

// Re-export main types for convenience
pub use exact::ExactComparator;
pub use ignore_case::IgnoreCaseComparator;
pub use registry::ComparatorRegistry;
pub use traits::ItemComparator;
