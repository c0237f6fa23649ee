//! Prelude module for convenient imports.
//!
//! ```
//! use immutix::prelude::*;
//! ```

// Runtime support
pub use immutix_core::{
    CachedHash, CachedText, HashCode, Immutable, ValueNotProvidedError, type_name_hash,
};

// Schema model
pub use immutix_schema::{
    Construct, InterfaceRef, ObjectSpec, PlainInterface, PropertyKind, PropertySpec, Registry,
    Role, SchemaError, ValidationResult, classify, resolve_properties, validate_object,
    validate_property,
};

// Generation
pub use immutix_codegen::{
    BufferWriter, BuilderGenerator, CodegenError, EmitError, FsWriter, GeneratedType,
    ObjectGenerator, ObligationPlan, Pipeline, RunReport, SourceWriter, SpecOutcome,
    generate_builder_type, generate_object_type, generate_to, generate_types,
};
