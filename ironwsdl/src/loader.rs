//! Loading WSDL documents from files and readers.

use crate::error::LoadError;
use ironwsdl_schema::{Definition, parse_wsdl};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default upper bound on the size of a loaded document (16 MiB).
pub const DEFAULT_MAX_SIZE: usize = 16 * 1024 * 1024;

/// Reads WSDL documents into memory and decodes them.
#[derive(Debug, Clone)]
pub struct WsdlLoader {
    max_size: usize,
}

impl WsdlLoader {
    /// Creates a new loader with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }

    /// Sets the maximum document size in bytes.
    #[must_use]
    pub fn max_size(mut self, bytes: usize) -> Self {
        self.max_size = bytes;
        self
    }

    /// Returns the configured maximum document size.
    #[must_use]
    pub const fn size_limit(&self) -> usize {
        self.max_size
    }

    /// Loads and decodes the document at `path`.
    ///
    /// # Errors
    /// Returns `LoadError::Io` if the file cannot be read,
    /// `LoadError::TooLarge` if it exceeds the limit, and
    /// `LoadError::Decode` if its content is not a WSDL document.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Definition, LoadError> {
        let path = path.as_ref();
        tracing::debug!("Loading WSDL from {}", path.display());

        let file = File::open(path)?;
        let len = file.metadata()?.len();
        if len > self.max_size as u64 {
            return Err(LoadError::TooLarge {
                size: len,
                limit: self.max_size,
            });
        }

        self.load_reader(file)
    }

    /// Reads `reader` to the end and decodes the result.
    ///
    /// # Errors
    /// Same conditions as [`WsdlLoader::load`].
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Definition, LoadError> {
        let mut bytes = Vec::new();
        reader
            .take(self.max_size as u64 + 1)
            .read_to_end(&mut bytes)?;

        self.load_bytes(&bytes)
    }

    /// Decodes an in-memory document, enforcing the size limit.
    ///
    /// # Errors
    /// Returns `LoadError::TooLarge` or `LoadError::Decode`.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<Definition, LoadError> {
        if bytes.len() > self.max_size {
            return Err(LoadError::TooLarge {
                size: bytes.len() as u64,
                limit: self.max_size,
            });
        }

        let definition = parse_wsdl(bytes)?;
        tracing::debug!(
            "Loaded WSDL ({} bytes): port type '{}'",
            bytes.len(),
            definition.port_type.name
        );
        Ok(definition)
    }
}

impl Default for WsdlLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads a WSDL file with the default loader settings.
///
/// # Errors
/// See [`WsdlLoader::load`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Definition, LoadError> {
    WsdlLoader::new().load(path)
}
