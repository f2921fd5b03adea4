//! Value Module
//!
//! Defines the capability every cached value must provide: its byte cost.

use std::sync::Arc;

// == Value Trait ==
/// A payload that can be stored in the cache.
///
/// `len` is the number of bytes the value is charged for against the
/// cache's byte budget. The key's own length is charged separately.
pub trait Value {
    /// Returns the byte cost of this value.
    fn len(&self) -> usize;

    /// Returns true if the value costs zero bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Value for String {
    fn len(&self) -> usize {
        String::len(self)
    }
}

impl Value for &str {
    fn len(&self) -> usize {
        str::len(self)
    }
}

impl Value for Vec<u8> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl Value for Box<[u8]> {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }
}

impl<T: Value + ?Sized> Value for Arc<T> {
    fn len(&self) -> usize {
        T::len(self)
    }
}
