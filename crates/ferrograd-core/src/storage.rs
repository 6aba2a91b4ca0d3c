//! Storage - Raw Memory Management for Tensors
//!
//! Provides the memory buffer that underlies all tensor operations. Storage
//! is reference-counted so that a parameter and the optimizer updating it
//! observe the same buffer, and interior-mutable so updates happen in place
//! through shared handles.
//!
//! # Example
//! ```rust
//! use ferrograd_core::Storage;
//!
//! let storage = Storage::<f64>::zeros(100);
//! assert_eq!(storage.len(), 100);
//! ```
//!
//! @version 0.1.0
//! @author Ferrograd Development Team

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::dtype::Scalar;
use crate::error::{Error, Result};

// =============================================================================
// Storage Struct
// =============================================================================

/// Reference-counted memory storage for tensor data.
///
/// Cloning a `Storage` produces a second handle onto the same buffer; writes
/// through either handle are visible through both. The buffer length is fixed
/// at creation.
#[derive(Debug, Clone)]
pub struct Storage<T: Scalar> {
    /// The underlying data buffer, shared between handles.
    inner: Arc<RwLock<Vec<T>>>,
    /// Number of elements (fixed at creation).
    len: usize,
}

impl<T: Scalar> Storage<T> {
    /// Creates new storage with the given length, initialized to the
    /// element type's default value (zero for numeric types).
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self::from_vec(vec![T::default(); len])
    }

    /// Creates storage from an existing vector.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        Self {
            inner: Arc::new(RwLock::new(data)),
            len,
        }
    }

    /// Creates storage from a slice by copying the data.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Returns the number of elements in this storage.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the storage is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Acquires a read guard on the underlying buffer.
    pub fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.inner.read()
    }

    /// Acquires a write guard on the underlying buffer.
    pub fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.inner.write()
    }

    /// Returns the element at the given linear index.
    pub fn get(&self, index: usize) -> Result<T> {
        let data = self.inner.read();
        data.get(index).copied().ok_or(Error::IndexOutOfBounds {
            index,
            size: self.len,
        })
    }

    /// Sets the element at the given linear index.
    pub fn set(&self, index: usize, value: T) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.len,
            });
        }
        self.inner.write()[index] = value;
        Ok(())
    }

    /// Copies the contents into a new vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.read().clone()
    }

    /// Creates an independent copy of this storage's contents.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self::from_vec(self.to_vec())
    }

    /// Returns true if two handles point at the same buffer.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

// =============================================================================
// Tests
// =============================================================================
