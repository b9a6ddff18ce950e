//! Variant matrix for the sample-format converter generator.
//!
//! This crate defines the generation axes (host sample type, wire byte-order
//! handling, channel width) and the `VariantKey` cross-product that drives
//! code generation. The axis value-sets are fixed constants of the system,
//! not runtime configuration, and the enumeration order is pinned so a
//! regenerated artifact is byte-identical run to run.

pub mod key;
pub mod sample;
pub mod swap;

pub use key::{VariantKey, CHANNEL_WIDTHS};
pub use sample::SampleType;
pub use swap::SwapMode;
