//! Byte View Module
//!
//! Immutable byte buffer used as a cached value.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::cache::Value;
use crate::error::Result;

// == Byte View ==
/// A read-only view over cached bytes.
///
/// Cloning is cheap and shares the underlying buffer. Callers never get a
/// mutable handle on the stored bytes: [`byte_slice`](Self::byte_slice)
/// hands out a copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteView {
    bytes: Arc<[u8]>,
}

impl ByteView {
    // == Constructor ==
    /// Creates a view by copying the given bytes.
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: Arc::from(bytes),
        }
    }

    // == Length ==
    /// Returns the number of bytes in the view.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    // == Byte Slice ==
    /// Returns a copy of the bytes. Mutating the copy never affects the view.
    pub fn byte_slice(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    // == String Views ==
    /// Returns the bytes as text, replacing invalid UTF-8 sequences.
    pub fn as_string(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Returns the bytes as text, failing on invalid UTF-8.
    pub fn to_str(&self) -> Result<&str> {
        Ok(std::str::from_utf8(&self.bytes)?)
    }
}

impl Value for ByteView {
    fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Display for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<&[u8]> for ByteView {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for ByteView {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Arc::from(bytes),
        }
    }
}

impl From<&str> for ByteView {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl From<String> for ByteView {
    fn from(text: String) -> Self {
        Self::from(text.into_bytes())
    }
}
