//! The spec arena: object specs, property specs and plain interfaces.
//!
//! Specs are value records built once from an external declaration source
//! and owned by the registry for the duration of a generation pass; nothing
//! here is mutated once validation begins.

use crate::error::SchemaError;
use crate::kind::{PropertyKind, classify};
use std::collections::HashMap;

/// The declared construct of a spec's source declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Construct {
    /// Method-only, non-instantiable declaration.
    #[default]
    Interface,
    /// Concrete class-like declaration.
    Class,
    /// Enumeration declaration.
    Enum,
}

/// The schema role a declaration was marked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// An instantiable immutable object; generation produces artifacts.
    #[default]
    Object,
    /// A pure mixin contributing properties to descendants.
    Super,
    /// Marked as both; validation warns and generation proceeds as Object.
    Both,
}

impl Role {
    /// Returns true if artifacts are generated for this role.
    #[must_use]
    pub const fn generates(&self) -> bool {
        matches!(self, Self::Object | Self::Both)
    }
}

/// One property accessor of an object spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    /// Accessor name, unique within a flattened list.
    pub name: String,
    /// Declared return type text.
    pub declared_type: String,
    /// Classified kind of the declared type.
    pub kind: PropertyKind,
    /// Whether the property must receive a value before construction.
    pub required: bool,
    /// Declared parameter types. Accessors must not take parameters.
    pub params: Vec<String>,
    /// Declared generic type parameters. Accessors must not have any.
    pub type_params: Vec<String>,
    /// Declared checked failure types. Accessors must not declare any.
    pub faults: Vec<String>,
}

impl PropertySpec {
    /// Creates an optional property of the given declared type.
    #[must_use]
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        let declared_type = declared_type.into();
        let kind = classify(&declared_type);

        Self {
            name: name.into(),
            declared_type,
            kind,
            required: false,
            params: Vec::new(),
            type_params: Vec::new(),
            faults: Vec::new(),
        }
    }

    /// Creates a required property of the given declared type.
    #[must_use]
    pub fn required(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        let mut property = Self::new(name, declared_type);
        property.required = true;
        property
    }

    /// Returns true if this property participates in builder obligation
    /// tracking: required with a scalar kind.
    #[must_use]
    pub fn is_required_primitive(&self) -> bool {
        self.required && self.kind.is_primitive()
    }
}

/// One declared immutable-object (or super mixin) spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSpec {
    /// Simple name of the declared type.
    pub name: String,
    /// Qualified name of the declared type; seeds the generated hash.
    pub qualified_name: String,
    /// Declared construct of the source declaration.
    pub construct: Construct,
    /// Schema role the declaration was marked with.
    pub role: Role,
    /// Directly declared properties, in declaration order.
    pub declared_properties: Vec<PropertySpec>,
    /// Names of direct super-interfaces, in declaration order.
    pub super_interfaces: Vec<String>,
}

impl ObjectSpec {
    /// Creates an interface object spec with no properties or supers.
    #[must_use]
    pub fn new(name: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
            construct: Construct::Interface,
            role: Role::Object,
            declared_properties: Vec::new(),
            super_interfaces: Vec::new(),
        }
    }

    /// Adds a declared property.
    pub fn add_property(&mut self, property: PropertySpec) {
        self.declared_properties.push(property);
    }

    /// Adds a direct super-interface by name.
    pub fn add_super(&mut self, name: impl Into<String>) {
        self.super_interfaces.push(name.into());
    }
}

/// An ordinary interface that is not part of the schema.
///
/// Such ancestors may appear in a spec's super chain but must not declare
/// methods; validation checks this transitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainInterface {
    /// Simple name.
    pub name: String,
    /// Declared method names.
    pub methods: Vec<String>,
    /// Names of direct super-interfaces, in declaration order.
    pub super_interfaces: Vec<String>,
}

impl PlainInterface {
    /// Creates an empty plain interface.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            super_interfaces: Vec::new(),
        }
    }
}

/// A name resolved against the registry.
#[derive(Debug, Clone, Copy)]
pub enum InterfaceRef<'a> {
    /// A schema-recognized object or super spec.
    Object(&'a ObjectSpec),
    /// An ordinary, non-schema interface.
    Plain(&'a PlainInterface),
}

/// The arena owning every spec of one generation pass.
#[derive(Debug, Default)]
pub struct Registry {
    objects: Vec<ObjectSpec>,
    plain: Vec<PlainInterface>,
    object_map: HashMap<String, usize>,
    plain_map: HashMap<String, usize>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object spec.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateDefinition` if the name is taken.
    pub fn add_object(&mut self, spec: ObjectSpec) -> Result<(), SchemaError> {
        if self.object_map.contains_key(&spec.name) || self.plain_map.contains_key(&spec.name) {
            return Err(SchemaError::duplicate("object spec", &spec.name));
        }

        self.object_map.insert(spec.name.clone(), self.objects.len());
        self.objects.push(spec);
        Ok(())
    }

    /// Adds a plain interface.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateDefinition` if the name is taken.
    pub fn add_plain(&mut self, iface: PlainInterface) -> Result<(), SchemaError> {
        if self.object_map.contains_key(&iface.name) || self.plain_map.contains_key(&iface.name) {
            return Err(SchemaError::duplicate("plain interface", &iface.name));
        }

        self.plain_map.insert(iface.name.clone(), self.plain.len());
        self.plain.push(iface);
        Ok(())
    }

    /// Looks up an object spec by name.
    #[must_use]
    pub fn object(&self, name: &str) -> Option<&ObjectSpec> {
        self.object_map.get(name).map(|&idx| &self.objects[idx])
    }

    /// Looks up any interface by name.
    #[must_use]
    pub fn interface(&self, name: &str) -> Option<InterfaceRef<'_>> {
        if let Some(&idx) = self.object_map.get(name) {
            return Some(InterfaceRef::Object(&self.objects[idx]));
        }

        self.plain_map
            .get(name)
            .map(|&idx| InterfaceRef::Plain(&self.plain[idx]))
    }

    /// Returns every object spec, in registration order.
    #[must_use]
    pub fn objects(&self) -> &[ObjectSpec] {
        &self.objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_spec_kinds() {
        let scalar = PropertySpec::new("port", "u16");
        assert_eq!(scalar.kind, PropertyKind::Short);
        assert!(!scalar.required);

        let array = PropertySpec::new("tags", "Vec<String>");
        assert!(array.kind.is_array());
    }

    #[test]
    fn test_required_primitive_subset() {
        assert!(PropertySpec::required("port", "u16").is_required_primitive());
        assert!(!PropertySpec::required("host", "String").is_required_primitive());
        assert!(!PropertySpec::new("port", "u16").is_required_primitive());
        assert!(!PropertySpec::required("tags", "Vec<i32>").is_required_primitive());
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = Registry::new();
        registry
            .add_object(ObjectSpec::new("Endpoint", "demo::Endpoint"))
            .unwrap();
        registry.add_plain(PlainInterface::new("Marker")).unwrap();

        assert!(registry.object("Endpoint").is_some());
        assert!(registry.object("Marker").is_none());
        assert!(matches!(
            registry.interface("Endpoint"),
            Some(InterfaceRef::Object(_))
        ));
        assert!(matches!(
            registry.interface("Marker"),
            Some(InterfaceRef::Plain(_))
        ));
        assert!(registry.interface("Unknown").is_none());
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let mut registry = Registry::new();
        registry
            .add_object(ObjectSpec::new("Endpoint", "demo::Endpoint"))
            .unwrap();

        assert!(registry
            .add_object(ObjectSpec::new("Endpoint", "other::Endpoint"))
            .is_err());
        assert!(registry.add_plain(PlainInterface::new("Endpoint")).is_err());
    }

    #[test]
    fn test_role_generates() {
        assert!(Role::Object.generates());
        assert!(Role::Both.generates());
        assert!(!Role::Super.generates());
    }
}
