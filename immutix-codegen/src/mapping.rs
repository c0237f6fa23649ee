//! Kind-aware type mapping shared by the object and builder generators.
//!
//! Scalars travel by value; arrays and references have an absence sentinel,
//! so they cross the constructor boundary as `Option` and are stored bare
//! only when required.

use immutix_schema::PropertyKind;
use immutix_schema::PropertySpec;
use immutix_schema::kind::array_element;

/// Field type on the generated immutable object.
pub(crate) fn field_type(property: &PropertySpec) -> String {
    if property.kind.is_primitive() || property.required {
        property.declared_type.clone()
    } else {
        format!("Option<{}>", property.declared_type)
    }
}

/// Constructor parameter type on the generated immutable object.
pub(crate) fn ctor_param_type(property: &PropertySpec) -> String {
    if property.kind.is_primitive() {
        property.declared_type.clone()
    } else {
        format!("Option<{}>", property.declared_type)
    }
}

/// Accessor return type, as declared by the spec's trait.
pub(crate) fn accessor_return_type(property: &PropertySpec) -> String {
    match &property.kind {
        kind if kind.is_primitive() => property.declared_type.clone(),
        PropertyKind::Array(_) => {
            let element = array_element(&property.declared_type).unwrap_or("_");
            if property.required {
                format!("&[{element}]")
            } else {
                format!("Option<&[{element}]>")
            }
        }
        _ => {
            if property.required {
                format!("&{}", property.declared_type)
            } else {
                format!("Option<&{}>", property.declared_type)
            }
        }
    }
}

/// Accessor body expression on the generated immutable object.
pub(crate) fn accessor_body(property: &PropertySpec) -> String {
    match &property.kind {
        kind if kind.is_primitive() => format!("self.{}", property.name),
        PropertyKind::Array(_) => {
            if property.required {
                format!("&self.{}", property.name)
            } else {
                format!("self.{}.as_deref()", property.name)
            }
        }
        _ => {
            if property.required {
                format!("&self.{}", property.name)
            } else {
                format!("self.{}.as_ref()", property.name)
            }
        }
    }
}
