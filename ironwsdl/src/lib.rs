//! # IronWSDL
//!
//! WSDL 1.1 document decoding and inspection for Rust.
//!
//! IronWSDL turns WSDL XML into a typed [`Definition`] that code generators
//! and introspection tools can walk without touching XML.
//!
//! ## Features
//!
//! - **Tolerant decoding** - Missing sections decode to empty values
//! - **Verbatim references** - `tns:` style prefixes are kept as written
//! - **Order preserving** - Messages and operations keep document order
//! - **Separate load errors** - I/O failures never masquerade as decode errors
//!
//! ## Quick Start
//!
//! ```ignore
//! use ironwsdl::prelude::*;
//!
//! let definition = WsdlLoader::new().load("service.wsdl")?;
//! for operation in &definition.port_type.operations {
//!     println!("{} <- {}", operation.name, operation.input.message);
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Data model, decoder, and reference checks
//! - [`loader`] - File and reader loading with size limits
//! - [`report`] - Plain-text summaries

pub mod error;
pub mod loader;
pub mod prelude;
pub mod report;

/// WSDL data model and decoding.
pub mod schema {
    pub use ironwsdl_schema::*;
}

// Re-export commonly used items at the crate root
pub use error::LoadError;
pub use ironwsdl_schema::{
    Definition, FaultOperation, InputOperation, Message, OutputOperation, ParseError, Part,
    PortType, WsdlOperation, parse_wsdl, parse_wsdl_str,
};
pub use loader::{WsdlLoader, load_file};
pub use report::summarize;
