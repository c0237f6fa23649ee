//! Builder generation.

use crate::plan::ObligationPlan;
use crate::types::{FieldDef, GeneratedType, ImplBlock, MethodDef};
use immutix_schema::{ObjectSpec, PropertyKind, PropertySpec};

/// Generator for the builder of an object spec.
pub struct BuilderGenerator<'a> {
    spec: &'a ObjectSpec,
    properties: &'a [PropertySpec],
    plan: &'a ObligationPlan,
}

impl<'a> BuilderGenerator<'a> {
    /// Creates a builder generator over a resolved property list and its
    /// obligation plan.
    #[must_use]
    pub fn new(
        spec: &'a ObjectSpec,
        properties: &'a [PropertySpec],
        plan: &'a ObligationPlan,
    ) -> Self {
        Self {
            spec,
            properties,
            plan,
        }
    }

    /// Generates the `{T}Builder` type description.
    #[must_use]
    pub fn generate(&self) -> GeneratedType {
        let mut ty = GeneratedType::new(format!("{}Builder", self.spec.name));
        ty.doc.push(format!(
            "A builder for immutable instances of `{}`.",
            self.spec.name
        ));
        ty.doc.push("Builders are reusable: `build()` borrows and may be".to_string());
        ty.doc.push("called repeatedly.".to_string());

        for property in self.properties {
            let field = if property.kind.is_primitive() {
                FieldDef::new(&property.name, &property.declared_type)
            } else {
                FieldDef::new(&property.name, format!("Option<{}>", property.declared_type))
            };
            ty.fields.push(field);
        }

        if !self.plan.is_empty() {
            ty.fields.push(FieldDef::new(
                "checked",
                format!("[u32; {}]", self.plan.word_count()),
            ));
        }

        let mut inherent = ImplBlock::inherent();
        inherent.method(self.creator());
        inherent.method(self.copier());
        for property in self.properties {
            inherent.method(self.setter(property));
        }
        inherent.method(self.build());
        ty.impls.push(inherent);

        ty
    }

    fn creator(&self) -> MethodDef {
        let mut method = MethodDef::new("pub fn create() -> Self");
        method.doc("Creates an empty builder with every obligation unmet.");

        method.line("Self {");
        for property in self.properties {
            let value = property
                .kind
                .default_literal()
                .unwrap_or("None");
            method.line(format!("    {}: {},", property.name, value));
        }
        if !self.plan.is_empty() {
            let words: Vec<String> = (0..self.plan.word_count())
                .map(|word| match self.plan.preset_mask(word) {
                    0 => "0".to_string(),
                    mask => format!("0x{mask:08x}"),
                })
                .collect();
            method.line(format!("    checked: [{}],", words.join(", ")));
        }
        method.line("}");

        method
    }

    fn copier(&self) -> MethodDef {
        if self.properties.is_empty() {
            let mut method = MethodDef::new(format!(
                "pub fn from(_value: &impl {}) -> Self",
                self.spec.name
            ));
            method.doc("Creates a builder initialized from an existing instance.");
            method.line("Self::create()");
            return method;
        }

        let mut method = MethodDef::new(format!(
            "pub fn from(value: &impl {}) -> Self",
            self.spec.name
        ));
        method.doc("Creates a builder initialized from an existing instance's");
        method.doc("accessors; every obligation of the instance is already met.");

        method.line("let mut builder = Self::create();");
        for property in self.properties {
            for line in copy_lines(property) {
                method.line(line);
            }
        }
        method.line("builder");

        method
    }

    fn setter(&self, property: &PropertySpec) -> MethodDef {
        let mut method = MethodDef::new(format!(
            "pub fn {0}(&mut self, value: {1}) -> &mut Self",
            property.name, property.declared_type
        ));

        if property.kind.is_primitive() {
            method.line(format!("self.{} = value;", property.name));
        } else {
            method.line(format!("self.{} = Some(value);", property.name));
        }

        if let Some(index) = self.tracked_index(property) {
            method.doc(format!("Sets `{}` and marks its obligation met.", property.name));
            method.line(format!(
                "self.checked[{}] |= 1 << {};",
                ObligationPlan::word_of(index),
                ObligationPlan::bit_of(index)
            ));
        }

        method.line("self");
        method
    }

    fn build(&self) -> MethodDef {
        let mut method = MethodDef::new(format!(
            "pub fn build(&self) -> Result<Immutable{}, immutix::ValueNotProvidedError>",
            self.spec.name
        ));
        method.doc("Builds a new immutable instance from the current values.");
        method.doc("Fails while a required property is still missing; the");
        method.doc("constructor re-checks required references independently.");

        for word in 0..self.plan.word_count() {
            let tracked = self.plan.tracked_in_word(word);

            method.line(format!("if self.checked[{word}] != u32::MAX {{"));
            if let [only] = tracked {
                method.line(format!(
                    "    return Err(immutix::ValueNotProvidedError::for_property(\"{}\"));",
                    only.name
                ));
            } else {
                method.line("    let mut missing: Vec<&str> = Vec::new();");
                for (offset, property) in tracked.iter().enumerate() {
                    method.line(format!(
                        "    if self.checked[{word}] & (1 << {offset}) == 0 {{"
                    ));
                    method.line(format!("        missing.push(\"{}\");", property.name));
                    method.line("    }");
                }
                method.line(
                    "    return Err(immutix::ValueNotProvidedError::for_properties(missing.join(\", \")));",
                );
            }
            method.line("}");
        }

        let args: Vec<String> = self
            .properties
            .iter()
            .map(|p| {
                if p.kind.is_primitive() {
                    format!("self.{}", p.name)
                } else {
                    format!("self.{}.clone()", p.name)
                }
            })
            .collect();
        method.line(format!(
            "Immutable{}::new({})",
            self.spec.name,
            args.join(", ")
        ));

        method
    }

    fn tracked_index(&self, property: &PropertySpec) -> Option<usize> {
        self.plan
            .tracked()
            .iter()
            .position(|p| p.name == property.name)
    }
}

/// Copier lines for one property, kind-selected.
fn copy_lines(property: &PropertySpec) -> Vec<String> {
    let name = &property.name;

    match &property.kind {
        kind if kind.is_primitive() => vec![format!("builder.{name}(value.{name}());")],
        PropertyKind::Array(_) => {
            if property.required {
                vec![format!("builder.{name}(value.{name}().to_vec());")]
            } else {
                vec![
                    format!("if let Some(v) = value.{name}() {{"),
                    format!("    builder.{name}(v.to_vec());"),
                    "}".to_string(),
                ]
            }
        }
        _ => {
            if property.required {
                vec![format!("builder.{name}(value.{name}().clone());")]
            } else {
                vec![
                    format!("if let Some(v) = value.{name}() {{"),
                    format!("    builder.{name}(v.clone());"),
                    "}".to_string(),
                ]
            }
        }
    }
}
