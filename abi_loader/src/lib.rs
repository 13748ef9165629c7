//! Artifact Loading
//!
//! This crate reads compiled contract artifacts from disk and parses their
//! `abi` array into the data model from `abi_types`.

pub mod file;

// Re-export commonly used items at the crate root
pub use file::{contract_name_from_path, load_artifact, parse_artifact, LoadError};

// Re-export abi_types for convenience
pub use abi_types;
