//! Error types for WSDL decoding and reference checks.

use thiserror::Error;

/// Error type for WSDL decoding operations.
///
/// Every variant describes input that is not a usable XML document. Missing
/// WSDL elements are never reported here; they decode to empty fields.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML syntax error reported by the tokenizer.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute list.
    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Malformed entity or character reference.
    #[error("malformed escape sequence: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The document ended while an element was still open.
    #[error("unexpected end of document inside element '{element}'")]
    UnexpectedEof {
        /// Local name of the innermost open element.
        element: String,
    },

    /// The input contains no root element.
    #[error("document has no root element")]
    NoRootElement,

    /// The XML declaration names an encoding other than UTF-8.
    #[error("unsupported document encoding '{encoding}'")]
    UnsupportedEncoding {
        /// Encoding label from the XML declaration.
        encoding: String,
    },

    /// Reference to a general entity that is not one of the predefined five.
    #[error("unknown entity reference '&{name};'")]
    UnknownEntity {
        /// Entity name without `&` and `;`.
        name: String,
    },
}

impl ParseError {
    /// Creates an unexpected end-of-document error.
    pub fn unexpected_eof(element: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            element: element.into(),
        }
    }

    /// Creates an unsupported encoding error.
    pub fn unsupported_encoding(encoding: impl Into<String>) -> Self {
        Self::UnsupportedEncoding {
            encoding: encoding.into(),
        }
    }

    /// Creates an unknown entity error.
    pub fn unknown_entity(name: impl Into<String>) -> Self {
        Self::UnknownEntity { name: name.into() }
    }
}

/// Direction of an operation's message reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `<input>` reference.
    Input,
    /// `<output>` reference.
    Output,
    /// `<fault>` reference.
    Fault,
}

impl Direction {
    /// Returns the WSDL element name for this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Fault => "fault",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for the opt-in reference checks on a decoded definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// An operation refers to a message that is not defined.
    #[error("operation '{operation}' {direction} refers to unknown message '{reference}'")]
    UnknownMessage {
        /// Operation name.
        operation: String,
        /// Which reference of the operation is dangling.
        direction: Direction,
        /// Reference string as written in the document.
        reference: String,
    },

    /// Two messages share a name.
    #[error("duplicate message definition: '{name}'")]
    DuplicateMessage {
        /// Name of the duplicate.
        name: String,
    },

    /// Two operations in the port type share a name.
    #[error("duplicate operation definition: '{name}'")]
    DuplicateOperation {
        /// Name of the duplicate.
        name: String,
    },
}

impl ReferenceError {
    /// Creates an unknown message error.
    pub fn unknown_message(
        operation: impl Into<String>,
        direction: Direction,
        reference: impl Into<String>,
    ) -> Self {
        Self::UnknownMessage {
            operation: operation.into(),
            direction,
            reference: reference.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::unexpected_eof("message");
        assert_eq!(
            err.to_string(),
            "unexpected end of document inside element 'message'"
        );

        let err = ParseError::unknown_entity("nbsp");
        assert_eq!(err.to_string(), "unknown entity reference '&nbsp;'");
    }

    #[test]
    fn test_reference_error_display() {
        let err = ReferenceError::unknown_message("Op", Direction::Fault, "tns:Missing");
        assert_eq!(
            err.to_string(),
            "operation 'Op' fault refers to unknown message 'tns:Missing'"
        );
    }
}
