// src/presets/mod.rs

// Named chaos-game setups built from the modification families.
// Gated so downstream crates enable only the families they use.

pub mod sdk;
pub use sdk::*;

#[cfg(feature = "presets")]
pub mod classic;

#[cfg(feature = "presets")]
pub use classic::*;
