//! # Immutix Codegen
//!
//! Code generation for the Immutix generator.
//!
//! This crate provides:
//! - Builder obligation planning (bitset layout for required scalars)
//! - Object and builder generators producing generated-type descriptions
//! - The `SourceWriter` seam plus filesystem/in-memory writers
//! - The per-spec generation pipeline with partial-failure isolation

pub mod builder;
pub mod error;
pub mod object;
pub mod pipeline;
pub mod plan;
pub mod types;
pub mod writer;

mod mapping;

pub use builder::BuilderGenerator;
pub use error::{CodegenError, EmitError};
pub use object::ObjectGenerator;
pub use pipeline::{Pipeline, RunReport, SpecOutcome};
pub use plan::ObligationPlan;
pub use types::{FieldDef, GeneratedType, ImplBlock, MethodDef};
pub use writer::{BufferWriter, FsWriter, SourceWriter};

use immutix_schema::{ObjectSpec, PropertySpec, Registry, resolve_properties, validate_object};

/// Generates the immutable implementation description for a spec.
///
/// # Arguments
/// * `spec` - The object spec
/// * `properties` - Its resolved, flattened property list
#[must_use]
pub fn generate_object_type(spec: &ObjectSpec, properties: &[PropertySpec]) -> GeneratedType {
    ObjectGenerator::new(spec, properties).generate()
}

/// Generates the builder description for a spec.
///
/// # Arguments
/// * `spec` - The object spec
/// * `properties` - Its resolved, flattened property list
/// * `plan` - The obligation plan computed from `properties`
#[must_use]
pub fn generate_builder_type(
    spec: &ObjectSpec,
    properties: &[PropertySpec],
    plan: &ObligationPlan,
) -> GeneratedType {
    BuilderGenerator::new(spec, properties, plan).generate()
}

/// Validates a spec and generates both of its artifact descriptions.
///
/// # Errors
/// Returns `CodegenError::Validation` if the spec fails validation;
/// generation is skipped in that case.
pub fn generate_types(
    spec: &ObjectSpec,
    registry: &Registry,
) -> Result<(GeneratedType, GeneratedType), CodegenError> {
    let validation = validate_object(spec, registry);
    if !validation.is_success() {
        return Err(CodegenError::Validation {
            spec: spec.name.clone(),
            errors: validation.errors.len(),
        });
    }

    let properties = resolve_properties(spec, registry);
    let plan = ObligationPlan::plan(&properties);

    Ok((
        generate_object_type(spec, &properties),
        generate_builder_type(spec, &properties, &plan),
    ))
}

/// Validates a spec, generates both artifacts and hands them to a writer.
///
/// # Errors
/// Returns `CodegenError::Validation` if the spec fails validation, or
/// `CodegenError::Emit` if either artifact could not be persisted.
pub fn generate_to(
    spec: &ObjectSpec,
    registry: &Registry,
    writer: &mut dyn SourceWriter,
) -> Result<(), CodegenError> {
    let (object, builder) = generate_types(spec, registry)?;
    writer.write(&object)?;
    writer.write(&builder)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_types_for_valid_spec() {
        let mut registry = Registry::new();
        let mut spec = ObjectSpec::new("Endpoint", "demo::Endpoint");
        spec.add_property(PropertySpec::required("port", "u16"));
        registry.add_object(spec.clone()).unwrap();

        let (object, builder) = generate_types(&spec, &registry).unwrap();
        assert_eq!(object.name, "ImmutableEndpoint");
        assert_eq!(builder.name, "EndpointBuilder");
    }

    #[test]
    fn test_generate_types_refuses_invalid_spec() {
        let registry = Registry::new();
        let mut spec = ObjectSpec::new("Broken", "demo::Broken");
        spec.add_super("Missing");

        let err = generate_types(&spec, &registry).unwrap_err();
        assert!(matches!(err, CodegenError::Validation { .. }));
    }

    #[test]
    fn test_generate_to_writes_both_artifacts() {
        let mut registry = Registry::new();
        let mut spec = ObjectSpec::new("Endpoint", "demo::Endpoint");
        spec.add_property(PropertySpec::new("alias", "String"));
        registry.add_object(spec.clone()).unwrap();

        let mut writer = BufferWriter::new();
        generate_to(&spec, &registry, &mut writer).unwrap();

        assert!(writer.source("ImmutableEndpoint").is_some());
        assert!(writer.source("EndpointBuilder").is_some());
    }
}
