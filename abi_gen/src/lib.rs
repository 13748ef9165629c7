//! Cairo interface generation from compiled Starknet contract ABIs.

pub mod inspect;
pub mod interface;
pub mod shorten;

pub use inspect::emit_inspect;
pub use interface::{InterfaceGenerator, InterfaceGeneratorOptions, emit_interface};
pub use shorten::{DEFAULT_PREFIXES, PrefixTable, shorten_type, shorten_type_with};
