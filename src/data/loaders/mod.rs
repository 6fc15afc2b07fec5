// mod.rs - Trial file loaders

pub mod csv;
pub mod tsv;
