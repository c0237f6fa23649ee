//! Inheritance resolution: flattening a spec's property list.

use crate::model::{InterfaceRef, ObjectSpec, PropertySpec, Registry};
use std::collections::HashSet;

/// Resolves the flattened, ordered property list for an object spec.
///
/// Order is most-super-first, current-object-declared-last: for each super
/// in declared order, the super's own ancestors resolve depth-first before
/// its declared properties; the spec's declared properties come last. This
/// order is load-bearing — constructor parameters, obligation bit indices
/// and diagnostic listings all follow it.
///
/// Resolution always completes and never reports: plain and unknown
/// interfaces contribute no properties, cycles are skipped on revisit, and
/// structural problems are the validation engine's to surface.
#[must_use]
pub fn resolve_properties(spec: &ObjectSpec, registry: &Registry) -> Vec<PropertySpec> {
    let mut properties = Vec::new();
    let mut visited = HashSet::new();
    visited.insert(spec.name.clone());

    for super_name in &spec.super_interfaces {
        collect_super(super_name, registry, &mut visited, &mut properties);
    }

    properties.extend(spec.declared_properties.iter().cloned());
    properties
}

fn collect_super(
    name: &str,
    registry: &Registry,
    visited: &mut HashSet<String>,
    out: &mut Vec<PropertySpec>,
) {
    if !visited.insert(name.to_string()) {
        return;
    }

    let Some(InterfaceRef::Object(spec)) = registry.interface(name) else {
        return;
    };

    for super_name in &spec.super_interfaces {
        collect_super(super_name, registry, visited, out);
    }

    out.extend(spec.declared_properties.iter().cloned());
}
