//! Starknet ABI Type Definitions
//!
//! This crate contains the data model for compiled contract artifacts.
//! It provides pure data structures for the `abi` array of an artifact
//! without any file I/O or code generation logic.

pub mod types;

// Re-export commonly used types at the crate root
pub use types::*;
