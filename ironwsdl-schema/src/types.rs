//! Document-level type definitions.
//!
//! This module contains the root [`Definition`] and the embedded XML Schema
//! header carried by the `<types>` section.

use crate::messages::{Message, PortType, WsdlOperation};

/// Complete WSDL document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    /// Text of the top-level `<documentation>` element, verbatim.
    pub documentation: String,
    /// Message definitions in document order.
    pub messages: Vec<Message>,
    /// The port type.
    pub port_type: PortType,
    /// The embedded types section.
    pub types: Types,
}

impl Definition {
    /// Creates a new empty definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message definition.
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Looks up the first message whose name equals `name` exactly.
    #[must_use]
    pub fn message(&self, name: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.name == name)
    }

    /// Looks up an operation of the port type by name.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&WsdlOperation> {
        self.port_type.operation(name)
    }
}

/// The `<types>` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Types {
    /// Embedded schema header.
    pub schema: Schema,
}

/// Attributes of the embedded `<schema>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// `attributeFormDefault`, `None` when absent.
    pub attribute_form_default: Option<FormDefault>,
    /// `elementFormDefault`, `None` when absent.
    pub element_form_default: Option<FormDefault>,
    /// `targetNamespace` URI.
    pub target_namespace: String,
}

/// Form default of an XML Schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormDefault {
    /// Local declarations are namespace-qualified.
    Qualified,
    /// Local declarations are unqualified.
    Unqualified,
    /// Any other value, kept as written.
    Other(String),
}

impl FormDefault {
    /// Parses a form default from attribute text.
    ///
    /// Matching is exact; anything other than `qualified` or `unqualified`
    /// becomes [`FormDefault::Other`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "qualified" => Self::Qualified,
            "unqualified" => Self::Unqualified,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the attribute text for this value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Qualified => "qualified",
            Self::Unqualified => "unqualified",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for FormDefault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Part;

    #[test]
    fn test_form_default_parse() {
        assert_eq!(FormDefault::parse("qualified"), FormDefault::Qualified);
        assert_eq!(FormDefault::parse("unqualified"), FormDefault::Unqualified);
        assert_eq!(
            FormDefault::parse("Qualified"),
            FormDefault::Other("Qualified".to_string())
        );
        assert_eq!(FormDefault::parse("Qualified").as_str(), "Qualified");
        assert_eq!(FormDefault::Unqualified.to_string(), "unqualified");
    }

    #[test]
    fn test_definition_lookup() {
        let mut def = Definition::new();
        def.add_message(Message::new(
            "ReadRetlWSInput",
            Part::new("tuxtype:ReadRetlWS", "FML32"),
        ));

        assert!(def.message("ReadRetlWSInput").is_some());
        assert!(def.message("tns:ReadRetlWSInput").is_none());
        assert!(def.operation("ReadRetlWS").is_none());
    }

    #[test]
    fn test_default_is_empty() {
        let def = Definition::default();
        assert!(def.documentation.is_empty());
        assert!(def.messages.is_empty());
        assert!(def.port_type.operations.is_empty());
        assert_eq!(def.types.schema.element_form_default, None);
    }
}
