//! Error types for building the spec arena.

use thiserror::Error;

/// Error type for registry operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (object spec, plain interface).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },
}

impl SchemaError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }
}
