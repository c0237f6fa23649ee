//! Validation engine: predicate pipeline over object and property specs.
//!
//! Predicates are independent pure functions; each returns its own partial
//! result and a failure never short-circuits its siblings. Findings are
//! collected, not thrown, so every problem in a spec is reported together.

use crate::messages;
use crate::model::{Construct, InterfaceRef, ObjectSpec, PropertySpec, Registry, Role};
use crate::resolve::resolve_properties;
use std::collections::{HashMap, HashSet};

/// Aggregated findings of a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Non-fatal findings; generation proceeds.
    pub warnings: Vec<String>,
    /// Fatal findings; generation for the spec is skipped.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Creates an empty (successful) result.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// Creates a result with a single error.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            warnings: Vec::new(),
            errors: vec![message.into()],
        }
    }

    /// Creates a result with a single warning.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            warnings: vec![message.into()],
            errors: Vec::new(),
        }
    }

    /// Absorbs another result's findings.
    pub fn merge(&mut self, other: Self) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }

    /// Success iff no errors were collected.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A predicate over an object spec.
pub type ObjectPredicate = fn(&Registry, &ObjectSpec) -> ValidationResult;

/// A predicate over one property of a spec's flattened list.
pub type PropertyPredicate = fn(&ObjectSpec, &PropertySpec) -> ValidationResult;

/// Object predicates, in evaluation order.
pub const OBJECT_PREDICATES: &[ObjectPredicate] = &[
    object_is_interface,
    superinterfaces_exist,
    empty_plain_superinterfaces,
    acyclic_superinterfaces,
    unique_property_names,
    single_role,
];

/// Property predicates, in evaluation order.
pub const PROPERTY_PREDICATES: &[PropertyPredicate] = &[
    no_parameters,
    no_type_variables,
    no_faults,
    non_void_return,
];

/// Validates an object spec and every property in its flattened list.
#[must_use]
pub fn validate_object(spec: &ObjectSpec, registry: &Registry) -> ValidationResult {
    let mut result = ValidationResult::success();

    for predicate in OBJECT_PREDICATES {
        result.merge(predicate(registry, spec));
    }

    for property in resolve_properties(spec, registry) {
        result.merge(validate_property(spec, &property));
    }

    result
}

/// Validates a single property against its declaring spec.
#[must_use]
pub fn validate_property(owner: &ObjectSpec, property: &PropertySpec) -> ValidationResult {
    let mut result = ValidationResult::success();

    for predicate in PROPERTY_PREDICATES {
        result.merge(predicate(owner, property));
    }

    result
}

fn object_is_interface(_registry: &Registry, spec: &ObjectSpec) -> ValidationResult {
    match spec.construct {
        Construct::Interface => ValidationResult::success(),
        Construct::Class | Construct::Enum => {
            ValidationResult::error(messages::not_an_interface(spec))
        }
    }
}

fn superinterfaces_exist(registry: &Registry, spec: &ObjectSpec) -> ValidationResult {
    let mut result = ValidationResult::success();
    let mut visited = HashSet::new();
    check_known(&spec.name, &spec.super_interfaces, registry, &mut visited, &mut result);
    result
}

fn check_known(
    extending: &str,
    supers: &[String],
    registry: &Registry,
    visited: &mut HashSet<String>,
    result: &mut ValidationResult,
) {
    for name in supers {
        if !visited.insert(name.clone()) {
            continue;
        }

        match registry.interface(name) {
            Some(InterfaceRef::Object(spec)) => {
                check_known(name, &spec.super_interfaces, registry, visited, result);
            }
            Some(InterfaceRef::Plain(iface)) => {
                check_known(name, &iface.super_interfaces, registry, visited, result);
            }
            None => result
                .errors
                .push(messages::unknown_superinterface(extending, name)),
        }
    }
}

fn empty_plain_superinterfaces(registry: &Registry, spec: &ObjectSpec) -> ValidationResult {
    let mut result = ValidationResult::success();
    let mut visited = HashSet::new();

    for name in &spec.super_interfaces {
        check_plain_chain(&spec.name, name, registry, &mut visited, &mut result);
    }

    result
}

fn check_plain_chain(
    extending: &str,
    name: &str,
    registry: &Registry,
    visited: &mut HashSet<String>,
    result: &mut ValidationResult,
) {
    if !visited.insert(name.to_string()) {
        return;
    }

    match registry.interface(name) {
        // schema interfaces are validated on their own
        Some(InterfaceRef::Object(_)) | None => {}
        Some(InterfaceRef::Plain(iface)) => {
            for method in &iface.methods {
                result.errors.push(messages::non_schema_interface_has_method(
                    extending,
                    &iface.name,
                    method,
                ));
            }

            for super_name in &iface.super_interfaces {
                check_plain_chain(&iface.name, super_name, registry, visited, result);
            }
        }
    }
}

fn acyclic_superinterfaces(registry: &Registry, spec: &ObjectSpec) -> ValidationResult {
    let mut stack = vec![spec.name.clone()];
    let mut done = HashSet::new();

    if let Some(path) = find_cycle(&spec.super_interfaces, registry, &mut stack, &mut done) {
        return ValidationResult::error(messages::superinterface_cycle(&path));
    }

    ValidationResult::success()
}

fn find_cycle(
    supers: &[String],
    registry: &Registry,
    stack: &mut Vec<String>,
    done: &mut HashSet<String>,
) -> Option<Vec<String>> {
    for name in supers {
        if done.contains(name) {
            continue;
        }

        if stack.contains(name) {
            let start = stack.iter().position(|n| n == name).unwrap_or(0);
            let mut path: Vec<String> = stack[start..].to_vec();
            path.push(name.clone());
            return Some(path);
        }

        if let Some(InterfaceRef::Object(spec)) = registry.interface(name) {
            stack.push(name.clone());
            let found = find_cycle(&spec.super_interfaces, registry, stack, done);
            stack.pop();

            if found.is_some() {
                return found;
            }
        }

        done.insert(name.clone());
    }

    None
}

fn unique_property_names(registry: &Registry, spec: &ObjectSpec) -> ValidationResult {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let properties = resolve_properties(spec, registry);

    for property in &properties {
        *counts.entry(property.name.as_str()).or_insert(0) += 1;
    }

    let mut result = ValidationResult::success();
    let mut reported = HashSet::new();

    for property in &properties {
        if counts[property.name.as_str()] > 1 && reported.insert(property.name.as_str()) {
            result
                .errors
                .push(messages::duplicate_property_name(spec, &property.name));
        }
    }

    result
}

fn single_role(_registry: &Registry, spec: &ObjectSpec) -> ValidationResult {
    match spec.role {
        Role::Both => ValidationResult::warning(messages::object_and_super_role(spec)),
        Role::Object | Role::Super => ValidationResult::success(),
    }
}

fn no_parameters(owner: &ObjectSpec, property: &PropertySpec) -> ValidationResult {
    if property.params.is_empty() {
        ValidationResult::success()
    } else {
        ValidationResult::error(messages::property_has_parameters(owner, &property.name))
    }
}

fn no_type_variables(owner: &ObjectSpec, property: &PropertySpec) -> ValidationResult {
    if property.type_params.is_empty() {
        ValidationResult::success()
    } else {
        ValidationResult::error(messages::property_has_type_variables(owner, &property.name))
    }
}

fn no_faults(owner: &ObjectSpec, property: &PropertySpec) -> ValidationResult {
    if property.faults.is_empty() {
        ValidationResult::success()
    } else {
        ValidationResult::error(messages::property_declares_faults(owner, &property.name))
    }
}

fn non_void_return(owner: &ObjectSpec, property: &PropertySpec) -> ValidationResult {
    match property.declared_type.trim() {
        "" | "()" => ValidationResult::error(messages::property_returns_no_value(owner, &property.name)),
        _ => ValidationResult::success(),
    }
}
