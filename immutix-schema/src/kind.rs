//! Type-kind classification of declared property types.
//!
//! Every downstream component selects per-kind formulas (equality, hashing,
//! obligation tracking) through this classifier; it is the single place that
//! interprets declared type text.

/// The kind of a property's declared type.
///
/// Arrays are single-level: the element kind of a nested array collapses to
/// [`PropertyKind::Reference`], so array semantics never recurse past one
/// level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// 32-bit signed integer.
    Int,
    /// 64-bit integer.
    Long,
    /// 16-bit integer.
    Short,
    /// 8-bit integer.
    Byte,
    /// Unicode scalar value.
    Char,
    /// Boolean.
    Boolean,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Growable array of the element kind.
    Array(Box<PropertyKind>),
    /// Any other type.
    Reference,
}

impl PropertyKind {
    /// Returns true for the eight scalar kinds.
    ///
    /// Only required properties of these kinds participate in builder
    /// obligation tracking: a scalar has no "unset" sentinel, while arrays
    /// and references do (absence).
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        !matches!(self, Self::Array(_) | Self::Reference)
    }

    /// Returns true for array kinds.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns the zero-equivalent literal for a scalar kind.
    ///
    /// Used by generated builders to initialize bare scalar fields; `None`
    /// for arrays and references, whose builder fields are `Option`s.
    #[must_use]
    pub fn default_literal(&self) -> Option<&'static str> {
        match self {
            Self::Int | Self::Long | Self::Short | Self::Byte => Some("0"),
            Self::Char => Some("'\\0'"),
            Self::Boolean => Some("false"),
            Self::Float | Self::Double => Some("0.0"),
            Self::Array(_) | Self::Reference => None,
        }
    }
}

/// Classifies declared Rust type text into a [`PropertyKind`].
///
/// Total and pure: any type not matching a known scalar or `Vec<..>` shape
/// is [`PropertyKind::Reference`].
#[must_use]
pub fn classify(declared: &str) -> PropertyKind {
    let declared = declared.trim();

    match declared {
        "i32" | "u32" => PropertyKind::Int,
        "i64" | "u64" | "isize" | "usize" => PropertyKind::Long,
        "i16" | "u16" => PropertyKind::Short,
        "i8" | "u8" => PropertyKind::Byte,
        "char" => PropertyKind::Char,
        "bool" => PropertyKind::Boolean,
        "f32" => PropertyKind::Float,
        "f64" => PropertyKind::Double,
        _ => match array_element(declared) {
            Some(element) => {
                let element_kind = match classify(element) {
                    // single-level arrays: nested element collapses
                    PropertyKind::Array(_) => PropertyKind::Reference,
                    kind => kind,
                };
                PropertyKind::Array(Box::new(element_kind))
            }
            None => PropertyKind::Reference,
        },
    }
}

/// Returns the element type text of a `Vec<..>` declaration.
#[must_use]
pub fn array_element(declared: &str) -> Option<&str> {
    declared
        .trim()
        .strip_prefix("Vec<")
        .and_then(|rest| rest.strip_suffix('>'))
        .map(str::trim)
}
