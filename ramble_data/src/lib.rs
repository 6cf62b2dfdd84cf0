//! Shared data model for Ramble game definitions.

pub mod data_paths;
pub mod defs;
pub mod validate;

pub use data_paths::detect_data_root;
pub use defs::*;
pub use validate::{ValidationError, validate_game};
