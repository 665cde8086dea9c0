//! Error types for loading WSDL documents.

use ironwsdl_schema::ParseError;
use thiserror::Error;

/// Error type for loading a WSDL document from a file or reader.
///
/// I/O failures and decode failures are kept apart so callers can tell a
/// missing file from a broken document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the input failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is larger than the configured limit.
    #[error("input of {size} bytes exceeds size limit of {limit} bytes")]
    TooLarge {
        /// Observed size in bytes. For streamed input this is the number of
        /// bytes read before giving up, one past the limit.
        size: u64,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// The input was read but is not a decodable WSDL document.
    #[error("decode error: {0}")]
    Decode(#[from] ParseError),
}

impl LoadError {
    /// Returns true if this error came from reading the input.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::TooLarge { .. })
    }

    /// Returns true if this error came from decoding the document.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
