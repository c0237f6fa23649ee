//! Error types for code generation and artifact emission.

use thiserror::Error;

/// Error type for emitting one generated artifact.
///
/// Emission failures are per-artifact: the pipeline reports them and moves
/// on, they never corrupt in-memory state or abort the batch.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The writer failed to persist an artifact.
    #[error("failed to write artifact '{artifact}': {source}")]
    Io {
        /// Artifact (generated type) name.
        artifact: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Error type for single-spec generation entry points.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The spec failed validation; generation was skipped.
    #[error("spec '{spec}' failed validation with {errors} error(s)")]
    Validation {
        /// Spec name.
        spec: String,
        /// Number of validation errors collected.
        errors: usize,
    },

    /// An artifact could not be emitted.
    #[error(transparent)]
    Emit(#[from] EmitError),
}
