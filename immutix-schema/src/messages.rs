//! Catalog of validation diagnostics.
//!
//! All message text lives here so predicates stay free of formatting and
//! diagnostics stay uniform: every message carries the declaring type name
//! and, where one exists, the property or ancestor it points at.

use crate::model::{ObjectSpec, Role};

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Object | Role::Both => "object",
        Role::Super => "super",
    }
}

/// A property accessor declares parameters.
#[must_use]
pub fn property_has_parameters(owner: &ObjectSpec, property: &str) -> String {
    format!(
        "{} spec {} has accessor {} with parameters; spec accessors must not take parameters",
        role_label(owner.role),
        owner.name,
        property
    )
}

/// A property accessor declares generic type parameters.
#[must_use]
pub fn property_has_type_variables(owner: &ObjectSpec, property: &str) -> String {
    format!(
        "{} spec {} has accessor {} with type parameters; spec accessors must not be generic",
        role_label(owner.role),
        owner.name,
        property
    )
}

/// A property accessor declares checked failure types.
#[must_use]
pub fn property_declares_faults(owner: &ObjectSpec, property: &str) -> String {
    format!(
        "{} spec {} has accessor {} that declares failure types; spec accessors must not fail",
        role_label(owner.role),
        owner.name,
        property
    )
}

/// A property accessor returns no value.
#[must_use]
pub fn property_returns_no_value(owner: &ObjectSpec, property: &str) -> String {
    format!(
        "{} spec {} has accessor {} that returns no value; spec accessors must return a value",
        role_label(owner.role),
        owner.name,
        property
    )
}

/// The spec's source declaration is not an interface.
#[must_use]
pub fn not_an_interface(spec: &ObjectSpec) -> String {
    format!(
        "{} spec {} is not an interface; specs are only allowed on interfaces",
        role_label(spec.role),
        spec.name
    )
}

/// A non-schema ancestor interface declares a method.
#[must_use]
pub fn non_schema_interface_has_method(extending: &str, iface: &str, method: &str) -> String {
    format!(
        "{extending} extends {iface}, a non-schema interface with a method {iface}::{method}(..); \
         specs may only extend non-schema interfaces without methods"
    )
}

/// A super-interface name resolves to nothing.
#[must_use]
pub fn unknown_superinterface(extending: &str, iface: &str) -> String {
    format!("{extending} extends {iface}, which is neither a spec nor a known plain interface")
}

/// The super graph contains a cycle.
#[must_use]
pub fn superinterface_cycle(path: &[String]) -> String {
    format!("superinterface cycle detected: {}", path.join(" -> "))
}

/// A property name resolves more than once across the inheritance chain.
#[must_use]
pub fn duplicate_property_name(spec: &ObjectSpec, property: &str) -> String {
    format!(
        "object spec {} resolves property {} more than once across its inheritance chain; \
         flattened property names must be unique",
        spec.name, property
    )
}

/// The declaration carries both the object and the super role.
#[must_use]
pub fn object_and_super_role(spec: &ObjectSpec) -> String {
    format!(
        "{} is marked as both an immutable object and a super mixin, consider using one of them",
        spec.name
    )
}
