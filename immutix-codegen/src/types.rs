//! Generated-type descriptions consumed by source writers.
//!
//! Generators produce these descriptions instead of writing text directly;
//! the narrow [`crate::writer::SourceWriter`] seam turns them into persisted
//! source. Rendering assembles plain source text, one struct plus its impl
//! blocks per artifact.

/// One field of a generated struct.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field type text.
    pub ty: String,
}

impl FieldDef {
    /// Creates a field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// One method of a generated impl block.
#[derive(Debug, Clone)]
pub struct MethodDef {
    /// Doc comment lines, without the `///` prefix.
    pub doc: Vec<String>,
    /// Full signature up to the opening brace, e.g. `pub fn build(&self) -> T`.
    pub signature: String,
    /// Body lines, indented relative to the method body.
    pub body: Vec<String>,
}

impl MethodDef {
    /// Creates a method with an empty body.
    #[must_use]
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            doc: Vec::new(),
            signature: signature.into(),
            body: Vec::new(),
        }
    }

    /// Adds a doc line.
    pub fn doc(&mut self, line: impl Into<String>) -> &mut Self {
        self.doc.push(line.into());
        self
    }

    /// Adds a body line.
    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.body.push(line.into());
        self
    }
}

/// One impl block of a generated type.
#[derive(Debug, Clone)]
pub struct ImplBlock {
    /// Trait implemented, or `None` for the inherent block.
    pub trait_name: Option<String>,
    /// Methods in declaration order.
    pub methods: Vec<MethodDef>,
}

impl ImplBlock {
    /// Creates an inherent impl block.
    #[must_use]
    pub fn inherent() -> Self {
        Self {
            trait_name: None,
            methods: Vec::new(),
        }
    }

    /// Creates a trait impl block.
    #[must_use]
    pub fn for_trait(trait_name: impl Into<String>) -> Self {
        Self {
            trait_name: Some(trait_name.into()),
            methods: Vec::new(),
        }
    }

    /// Adds a method.
    pub fn method(&mut self, method: MethodDef) -> &mut Self {
        self.methods.push(method);
        self
    }
}

/// Description of one generated type: a struct and its impl blocks.
#[derive(Debug, Clone)]
pub struct GeneratedType {
    /// Generated type name.
    pub name: String,
    /// Doc comment lines for the struct, without the `///` prefix.
    pub doc: Vec<String>,
    /// `use` lines emitted at the top of the artifact.
    pub uses: Vec<String>,
    /// Struct fields in declaration order.
    pub fields: Vec<FieldDef>,
    /// Impl blocks in declaration order.
    pub impls: Vec<ImplBlock>,
}

impl GeneratedType {
    /// Creates an empty generated type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            uses: Vec::new(),
            fields: Vec::new(),
            impls: Vec::new(),
        }
    }

    /// Renders the description to Rust source text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        for use_line in &self.uses {
            out.push_str(use_line);
            out.push('\n');
        }
        if !self.uses.is_empty() {
            out.push('\n');
        }

        for line in &self.doc {
            out.push_str("/// ");
            out.push_str(line);
            out.push('\n');
        }

        out.push_str(&format!("pub struct {} {{\n", self.name));
        for field in &self.fields {
            out.push_str(&format!("    {}: {},\n", field.name, field.ty));
        }
        out.push_str("}\n");

        for block in &self.impls {
            out.push('\n');
            match &block.trait_name {
                Some(trait_name) => {
                    out.push_str(&format!("impl {} for {} {{\n", trait_name, self.name));
                }
                None => out.push_str(&format!("impl {} {{\n", self.name)),
            }

            for (index, method) in block.methods.iter().enumerate() {
                if index > 0 {
                    out.push('\n');
                }

                for line in &method.doc {
                    out.push_str("    /// ");
                    out.push_str(line);
                    out.push('\n');
                }

                out.push_str(&format!("    {} {{\n", method.signature));
                for line in &method.body {
                    if line.is_empty() {
                        out.push('\n');
                    } else {
                        out.push_str("        ");
                        out.push_str(line);
                        out.push('\n');
                    }
                }
                out.push_str("    }\n");
            }

            out.push_str("}\n");
        }

        out
    }
}

/// Converts a type name to snake_case for artifact file names.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}
