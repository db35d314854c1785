#![no_std] // Shared with the WASM binding

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod gender;

// Re-export core types for convenience
pub use config::{ConfigError, Country, Language, VocativeForm};
pub use gender::*;

pub mod model;
pub use model::*;
