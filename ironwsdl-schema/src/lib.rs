//! # IronWSDL Schema
//!
//! WSDL 1.1 data model and XML decoder.
//!
//! This crate provides:
//! - Typed definitions for WSDL documents (messages, port types, schema header)
//! - A tolerant, single-pass decoder from XML bytes
//! - Opt-in reference checks for decoded documents

pub mod error;
pub mod messages;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{Direction, ParseError, ReferenceError};
pub use messages::{
    FaultOperation, InputOperation, Message, OutputOperation, Part, PortType, WsdlOperation,
    split_reference,
};
pub use parser::{parse_wsdl, parse_wsdl_str};
pub use types::{Definition, FormDefault, Schema, Types};
pub use validation::{collect_reference_errors, validate_references};
