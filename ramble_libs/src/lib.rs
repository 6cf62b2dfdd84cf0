#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const RAMBLE_LIBS_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod answers;
pub mod data_paths;
pub mod fill;
pub mod placeholder;

pub use answers::{AnswerMap, collect};
pub use fill::fill;
pub use placeholder::{Placeholder, extract};
