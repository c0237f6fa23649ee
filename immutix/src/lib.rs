//! # Immutix
//!
//! Immutix turns declarative descriptions of immutable objects into two
//! generated artifacts per object: an immutable implementation and a mutable
//! builder that constructs instances safely.
//!
//! For a declared type `T` the generated implementation is named
//! `Immutable{T}` and the generated builder `{T}Builder`, both peers of `T`.
//!
//! ## Quick start
//!
//! ```
//! use immutix::prelude::*;
//!
//! let mut endpoint = ObjectSpec::new("Endpoint", "demo::Endpoint");
//! endpoint.add_property(PropertySpec::required("port", "u16"));
//! endpoint.add_property(PropertySpec::new("alias", "String"));
//!
//! let mut registry = Registry::new();
//! registry.add_object(endpoint).unwrap();
//!
//! let mut writer = BufferWriter::new();
//! let report = Pipeline::new(&registry).run(&mut writer);
//! assert!(report.is_success());
//! ```
//!
//! ## Crate organization
//!
//! - [`core`] - Runtime support referenced by generated code
//! - [`schema`] - Spec arena, inheritance resolution and validation
//! - [`codegen`] - Obligation planning, generators, writers and pipeline

pub mod prelude;

/// Runtime support referenced by generated code.
pub mod core {
    pub use immutix_core::*;
}

/// Spec arena, inheritance resolution and validation.
pub mod schema {
    pub use immutix_schema::*;
}

/// Obligation planning, generators, writers and the pipeline.
pub mod codegen {
    pub use immutix_codegen::*;
}

// Re-export the names generated code references at the crate root.
pub use immutix_core::{
    CachedHash, CachedText, HashCode, Immutable, ValueNotProvidedError, type_name_hash,
};

pub use immutix_codegen::{
    BufferWriter, FsWriter, GeneratedType, ObligationPlan, Pipeline, RunReport, SourceWriter,
    generate_builder_type, generate_object_type, generate_to, generate_types,
};

pub use immutix_schema::{
    ObjectSpec, PlainInterface, PropertyKind, PropertySpec, Registry, Role, ValidationResult,
    classify, resolve_properties, validate_object, validate_property,
};
