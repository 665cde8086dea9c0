//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use ironwsdl::prelude::*;
//! ```

// Data model
pub use ironwsdl_schema::{
    Definition, FaultOperation, FormDefault, InputOperation, Message, OutputOperation, Part,
    PortType, Schema, Types, WsdlOperation,
};

// Decoding and checks
pub use ironwsdl_schema::{
    Direction, ParseError, ReferenceError, collect_reference_errors, parse_wsdl, parse_wsdl_str,
    split_reference, validate_references,
};

// Loading
pub use crate::error::LoadError;
pub use crate::loader::{WsdlLoader, load_file};
pub use crate::report::summarize;
