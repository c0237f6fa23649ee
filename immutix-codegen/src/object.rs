//! Immutable object generation.

use crate::mapping::{accessor_body, accessor_return_type, ctor_param_type, field_type};
use crate::types::{FieldDef, GeneratedType, ImplBlock, MethodDef};
use immutix_schema::{ObjectSpec, PropertyKind, PropertySpec};

/// Generator for the immutable implementation of an object spec.
pub struct ObjectGenerator<'a> {
    spec: &'a ObjectSpec,
    properties: &'a [PropertySpec],
}

impl<'a> ObjectGenerator<'a> {
    /// Creates an object generator over a resolved property list.
    #[must_use]
    pub fn new(spec: &'a ObjectSpec, properties: &'a [PropertySpec]) -> Self {
        Self { spec, properties }
    }

    /// Generates the `Immutable{T}` type description.
    #[must_use]
    pub fn generate(&self) -> GeneratedType {
        let mut ty = GeneratedType::new(format!("Immutable{}", self.spec.name));
        ty.doc
            .push(format!("An immutable implementation of `{}`.", self.spec.name));
        ty.doc.push(format!(
            "Prefer constructing instances through `{}Builder`.",
            self.spec.name
        ));
        ty.uses.push("use std::fmt;".to_string());

        for property in self.properties {
            ty.fields
                .push(FieldDef::new(&property.name, field_type(property)));
        }
        ty.fields
            .push(FieldDef::new("cached_hash", "immutix::CachedHash"));
        ty.fields
            .push(FieldDef::new("cached_text", "immutix::CachedText"));

        let mut inherent = ImplBlock::inherent();
        inherent.method(self.constructor());
        inherent.method(self.hash_code());
        inherent.method(self.rendered());
        ty.impls.push(inherent);

        let mut accessors = ImplBlock::for_trait(self.spec.name.clone());
        for property in self.properties {
            accessors.method(self.accessor(property));
        }
        ty.impls.push(accessors);

        let mut immutable = ImplBlock::for_trait("immutix::Immutable");
        immutable.method(self.clear());
        ty.impls.push(immutable);

        let mut partial_eq = ImplBlock::for_trait("PartialEq");
        partial_eq.method(self.eq());
        ty.impls.push(partial_eq);

        let mut display = ImplBlock::for_trait("fmt::Display");
        display.method(self.fmt());
        ty.impls.push(display);

        ty
    }

    fn constructor(&self) -> MethodDef {
        let params: Vec<String> = self
            .properties
            .iter()
            .map(|p| format!("{}: {}", p.name, ctor_param_type(p)))
            .collect();

        let mut method = MethodDef::new(format!(
            "pub fn new({}) -> Result<Self, immutix::ValueNotProvidedError>",
            params.join(", ")
        ));
        method.doc("Constructs a new instance from positional property values.");
        method.doc("Copies the provided values shallowly; fails while a required");
        method.doc("array or reference property is absent.");

        for property in self.properties {
            if property.required && !property.kind.is_primitive() {
                method.line(format!("let Some({0}) = {0} else {{", property.name));
                method.line(format!(
                    "    return Err(immutix::ValueNotProvidedError::for_property(\"{}\"));",
                    property.name
                ));
                method.line("};");
            }
        }

        method.line("Ok(Self {");
        for property in self.properties {
            method.line(format!("    {},", property.name));
        }
        method.line("    cached_hash: immutix::CachedHash::new(),");
        method.line("    cached_text: immutix::CachedText::new(),");
        method.line("})");

        method
    }

    fn hash_code(&self) -> MethodDef {
        let mut method = MethodDef::new("pub fn hash_code(&self) -> i32");
        method.doc("Returns the stable hash of this object: the type-qualifier seed");
        method.doc("XOR-combined with one contribution per property, memoized.");

        if self.properties.is_empty() {
            method.line(format!(
                "self.cached_hash.get_or_compute(|| immutix::type_name_hash(\"{}\"))",
                self.spec.qualified_name
            ));
            return method;
        }

        method.line("self.cached_hash.get_or_compute(|| {");
        method.line(format!(
            "    let mut hash = immutix::type_name_hash(\"{}\");",
            self.spec.qualified_name
        ));
        for property in self.properties {
            for line in hash_lines(property) {
                method.line(format!("    {line}"));
            }
        }
        method.line("    hash");
        method.line("})");

        method
    }

    fn rendered(&self) -> MethodDef {
        let mut method = MethodDef::new("fn rendered(&self) -> std::sync::Arc<str>");

        method.line("self.cached_text.get_or_compute(|| {");
        method.line("    let mut out = String::new();");
        method.line(format!("    out.push_str(\"{}@\");", self.spec.name));
        method.line(
            "    out.push_str(&format!(\"{:08x}\", self as *const Self as usize as u32));",
        );

        if self.properties.is_empty() {
            method.line("    out.push_str(\"{  }\");");
        } else {
            method.line("    out.push_str(\"{ \");");
            for (index, property) in self.properties.iter().enumerate() {
                if index > 0 {
                    method.line("    out.push_str(\", \");");
                }
                method.line(format!("    out.push_str(\"{} = \");", property.name));
                for line in text_lines(property) {
                    method.line(format!("    {line}"));
                }
            }
            method.line("    out.push_str(\" }\");");
        }

        method.line("    out");
        method.line("})");

        method
    }

    fn accessor(&self, property: &PropertySpec) -> MethodDef {
        let mut method = MethodDef::new(format!(
            "fn {}(&self) -> {}",
            property.name,
            accessor_return_type(property)
        ));
        method.line(accessor_body(property));
        method
    }

    fn clear(&self) -> MethodDef {
        let mut method = MethodDef::new("fn clear(&self)");
        method.line("self.cached_hash.clear();");
        method.line("self.cached_text.clear();");
        method
    }

    fn eq(&self) -> MethodDef {
        let other = if self.properties.is_empty() {
            "_other"
        } else {
            "other"
        };
        let mut method = MethodDef::new(format!("fn eq(&self, {other}: &Self) -> bool"));

        for property in self.properties {
            method.line(format!(
                "if self.{0} != other.{0} {{",
                property.name
            ));
            method.line("    return false;");
            method.line("}");
        }
        method.line("true");

        method
    }

    fn fmt(&self) -> MethodDef {
        let mut method =
            MethodDef::new("fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result");
        method.line("f.write_str(&self.rendered())");
        method
    }
}

/// Hash contribution lines for one property, kind-selected.
fn hash_lines(property: &PropertySpec) -> Vec<String> {
    let name = &property.name;

    match &property.kind {
        PropertyKind::Int => {
            if property.declared_type == "i32" {
                vec![format!("hash ^= self.{name};")]
            } else {
                vec![format!("hash ^= self.{name} as i32;")]
            }
        }
        PropertyKind::Long => vec![
            format!("hash ^= (self.{name} >> 32) as i32;"),
            format!("hash ^= self.{name} as i32;"),
        ],
        PropertyKind::Short | PropertyKind::Byte | PropertyKind::Boolean => {
            vec![format!("hash ^= i32::from(self.{name});")]
        }
        PropertyKind::Char => vec![format!("hash ^= self.{name} as i32;")],
        PropertyKind::Float => vec![format!("hash ^= self.{name}.to_bits() as i32;")],
        PropertyKind::Double => vec![
            "{".to_string(),
            format!("    let bits = self.{name}.to_bits();"),
            "    hash ^= (bits >> 32) as i32;".to_string(),
            "    hash ^= bits as i32;".to_string(),
            "}".to_string(),
        ],
        PropertyKind::Array(_) | PropertyKind::Reference => {
            vec![format!("hash ^= immutix::HashCode::hash_code(&self.{name});")]
        }
    }
}

/// Text rendering lines for one property's value, kind-selected.
///
/// Present values render as `<value>`; an absent optional renders as the
/// literal token `@null`.
fn text_lines(property: &PropertySpec) -> Vec<String> {
    let name = &property.name;

    if property.kind.is_primitive() {
        return vec![format!("out.push_str(&format!(\"<{{}}>\", self.{name}));")];
    }

    if property.required {
        return vec![format!("out.push_str(&format!(\"<{{:?}}>\", self.{name}));")];
    }

    vec![
        format!("match self.{name}.as_ref() {{"),
        "    Some(value) => out.push_str(&format!(\"<{:?}>\", value)),".to_string(),
        "    None => out.push_str(\"@null\"),".to_string(),
        "}".to_string(),
    ]
}
