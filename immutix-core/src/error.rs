//! Error types raised by generated constructors and builders.

use thiserror::Error;

/// Condition raised when a required property has not received a value.
///
/// Generated immutable constructors raise the single-property form for an
/// absent required reference or array; generated builders raise either form
/// depending on how many obligations a tracking word left unmet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueNotProvidedError {
    /// A single required property was not provided.
    #[error("value for property {property} was not provided")]
    Property {
        /// Property name.
        property: String,
    },

    /// Several required properties were not provided.
    #[error("not all values for the properties {properties} were provided")]
    Properties {
        /// Comma-joined list of property names.
        properties: String,
    },
}

impl ValueNotProvidedError {
    /// Creates the condition for a single missing property.
    #[must_use]
    pub fn for_property(property: impl Into<String>) -> Self {
        Self::Property {
            property: property.into(),
        }
    }

    /// Creates the condition for a comma-joined list of missing properties.
    #[must_use]
    pub fn for_properties(properties: impl Into<String>) -> Self {
        Self::Properties {
            properties: properties.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_property_message() {
        let err = ValueNotProvidedError::for_property("endpoint");
        assert_eq!(
            err.to_string(),
            "value for property endpoint was not provided"
        );
    }

    #[test]
    fn test_for_properties_message() {
        let err = ValueNotProvidedError::for_properties("host, port");
        assert_eq!(
            err.to_string(),
            "not all values for the properties host, port were provided"
        );
    }
}
