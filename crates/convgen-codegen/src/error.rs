//! Error types for converter generation.

use thiserror::Error;

/// Result type for codegen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors raised while assembling the converter source artifact.
///
/// Generation is deterministic text assembly over fixed constants, so the
/// only failure the core itself can detect is a converter-name collision.
/// Output-path failures belong to the caller that writes the artifact, and
/// missing scalar primitives surface when the consuming build compiles the
/// emitted source.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Two variant keys derived the same converter name. The artifact would
    /// silently shadow a converter in the downstream registry, so the run
    /// aborts before anything is written.
    #[error("duplicate converter name: {name}")]
    DuplicateConverterName { name: String },
}
