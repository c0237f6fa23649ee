//! # Immutix Schema
//!
//! Schema model and validation for the Immutix generator.
//!
//! This crate provides:
//! - The type-kind classifier for declared property types
//! - The spec arena: object specs, property specs, plain interfaces and the
//!   registry that owns them
//! - The inheritance resolver producing flattened property lists
//! - The validation engine: predicate pipeline and message catalog

pub mod error;
pub mod kind;
pub mod messages;
pub mod model;
pub mod resolve;
pub mod validate;

pub use error::SchemaError;
pub use kind::{PropertyKind, classify};
pub use model::{Construct, InterfaceRef, ObjectSpec, PlainInterface, PropertySpec, Registry, Role};
pub use resolve::resolve_properties;
pub use validate::{ValidationResult, validate_object, validate_property};
