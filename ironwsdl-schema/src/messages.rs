//! Message and port type definitions for WSDL documents.
//!
//! This module contains the data structures representing WSDL messages,
//! their parts, and the abstract operations grouped under a port type.
//! Message references are kept exactly as written, prefix included.

/// Message definition (`<message>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Message name, unique within the document.
    pub name: String,
    /// The single part carried by the message.
    pub part: Part,
}

impl Message {
    /// Creates a new message definition.
    #[must_use]
    pub fn new(name: impl Into<String>, part: Part) -> Self {
        Self {
            name: name.into(),
            part,
        }
    }
}

/// Message part (`<part>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Part {
    /// Prefixed element reference, e.g. `tuxtype:ReadRetlWS`.
    pub element: String,
    /// Part name, e.g. `FML32`.
    pub name: String,
}

impl Part {
    /// Creates a new part.
    #[must_use]
    pub fn new(element: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            name: name.into(),
        }
    }
}

/// Port type definition (`<portType>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortType {
    /// Port type name.
    pub name: String,
    /// Operations in document order.
    pub operations: Vec<WsdlOperation>,
}

impl PortType {
    /// Creates a new port type with no operations.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: Vec::new(),
        }
    }

    /// Adds an operation to the port type.
    pub fn add_operation(&mut self, operation: WsdlOperation) {
        self.operations.push(operation);
    }

    /// Looks up the first operation with the given name.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&WsdlOperation> {
        self.operations.iter().find(|op| op.name == name)
    }
}

/// Abstract operation (`<operation>` inside `<portType>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WsdlOperation {
    /// Operation name.
    pub name: String,
    /// Request message reference.
    pub input: InputOperation,
    /// Response message reference.
    pub output: OutputOperation,
    /// Fault message reference, `None` when the operation declares no fault.
    pub fault: Option<FaultOperation>,
}

impl WsdlOperation {
    /// Creates a new operation with empty input and output and no fault.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns true if the operation declares a fault.
    #[must_use]
    pub const fn has_fault(&self) -> bool {
        self.fault.is_some()
    }
}

/// Input reference of an operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOperation {
    /// Prefixed message reference, e.g. `tns:ReadRetlWSInput`.
    pub message: String,
}

impl InputOperation {
    /// Creates a new input reference.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Output reference of an operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOperation {
    /// Prefixed message reference.
    pub message: String,
}

impl OutputOperation {
    /// Creates a new output reference.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Fault reference of an operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaultOperation {
    /// Prefixed message reference.
    pub message: String,
    /// The fault's own name, distinct from the message it refers to.
    pub name: String,
}

impl FaultOperation {
    /// Creates a new fault reference.
    #[must_use]
    pub fn new(message: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            name: name.into(),
        }
    }
}

/// Splits a reference string into its textual prefix and local part.
///
/// No namespace lookup happens; `tns:Foo` yields `(Some("tns"), "Foo")` and
/// `Foo` yields `(None, "Foo")`.
#[must_use]
pub fn split_reference(reference: &str) -> (Option<&str>, &str) {
    match reference.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, reference),
    }
}
