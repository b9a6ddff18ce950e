//! Converter source generation.
//!
//! This crate turns the variant matrix from `convgen-matrix` into one
//! compilable C++ source artifact: a fixed preamble followed by a
//! host-to-wire / wire-to-host converter pair for every variant key, in
//! matrix order. Instantiation is pure text assembly: the emitted functions
//! reference the host driver's scalar conversion primitives and byte-swap
//! helper but nothing is resolved or validated at generation time.

pub mod artifact;
pub mod emit;
pub mod error;
pub mod registry;

pub use artifact::{generate_converter_source, preamble};
pub use emit::{function_pair, host_to_wire, wire_to_host};
pub use error::{CodegenError, Result};
pub use registry::NameRegistry;
