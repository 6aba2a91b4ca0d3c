//! Tensor - Core N-Dimensional Array Type
//!
//! The `Tensor` struct is the data structure every other crate in the
//! workspace operates on: a contiguous N-dimensional array over
//! reference-counted storage. Cloning a tensor is cheap and produces a
//! second handle onto the same buffer, which is how parameters stay
//! shared between a model and the optimizer mutating them in place.
//!
//! @version 0.1.0
//! @author Ferrograd Development Team

use core::fmt;

use ferrograd_core::dtype::{DType, Numeric, Scalar};
use ferrograd_core::error::{Error, Result};
use ferrograd_core::storage::Storage;

use crate::shape::{ensure_same_shape, linear_index, numel, Shape};

// =============================================================================
// Tensor Struct
// =============================================================================

/// An N-dimensional array of numeric values over shared storage.
///
/// All tensors are contiguous in row-major order. `clone` shares storage;
/// use [`Tensor::deep_clone`] for an independent copy.
#[derive(Clone)]
pub struct Tensor<T: Scalar> {
    /// Underlying data storage (reference-counted).
    pub(crate) storage: Storage<T>,
    /// Shape of the tensor (dimensions).
    pub(crate) shape: Shape,
}

impl<T: Scalar> Tensor<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a new tensor from storage with the given shape.
    ///
    /// # Returns
    /// New tensor, or error if shape doesn't match storage size.
    pub fn from_storage(storage: Storage<T>, shape: &[usize]) -> Result<Self> {
        let total = numel(shape);
        if total != storage.len() {
            return Err(Error::shape_mismatch(&[storage.len()], shape));
        }

        Ok(Self {
            storage,
            shape: Shape::from_slice(shape),
        })
    }

    /// Creates a new tensor from a vector with the given shape.
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        Self::from_storage(Storage::from_vec(data), shape)
    }

    /// Creates a new tensor from a slice with the given shape.
    pub fn from_slice(data: &[T], shape: &[usize]) -> Result<Self> {
        Self::from_storage(Storage::from_slice(data), shape)
    }

    /// Creates a scalar tensor (0-dimensional).
    #[must_use]
    pub fn scalar(value: T) -> Self {
        Self {
            storage: Storage::from_vec(vec![value]),
            shape: Shape::new(),
        }
    }

    /// Creates a tensor filled with the default element value.
    #[must_use]
    pub fn zeros(shape: &[usize]) -> Self {
        crate::creation::zeros(shape)
    }

    /// Creates a tensor filled with a constant value.
    #[must_use]
    pub fn full(shape: &[usize], value: T) -> Self {
        crate::creation::full(shape, value)
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Returns the shape of the tensor.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Returns the total number of elements.
    #[must_use]
    pub fn numel(&self) -> usize {
        numel(&self.shape)
    }

    /// Returns true if the tensor has zero elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numel() == 0
    }

    /// Returns true if this tensor is a scalar (0-dimensional).
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// Returns the runtime dtype of the element type.
    #[must_use]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Returns true if two tensors share the same storage buffer.
    #[must_use]
    pub fn shares_storage(&self, other: &Self) -> bool {
        self.storage.ptr_eq(&other.storage)
    }

    // =========================================================================
    // Data Access
    // =========================================================================

    /// Returns the element at the given multi-dimensional indices.
    pub fn get(&self, indices: &[usize]) -> Result<T> {
        let offset = linear_index(indices, &self.shape)?;
        self.storage.get(offset)
    }

    /// Sets the element at the given multi-dimensional indices.
    pub fn set(&self, indices: &[usize], value: T) -> Result<()> {
        let offset = linear_index(indices, &self.shape)?;
        self.storage.set(offset, value)
    }

    /// Extracts the value of a single-element tensor.
    pub fn item(&self) -> Result<T> {
        if self.numel() != 1 {
            return Err(Error::invalid_operation(format!(
                "item() requires a single-element tensor, got {} elements",
                self.numel()
            )));
        }
        self.storage.get(0)
    }

    /// Copies the contents into a new vector (row-major order).
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.storage.to_vec()
    }

    /// Creates an independent copy of this tensor's contents.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self {
            storage: self.storage.deep_clone(),
            shape: self.shape.clone(),
        }
    }

    // =========================================================================
    // In-Place Operations
    // =========================================================================

    /// Fills every element with the given value.
    pub fn fill_(&self, value: T) -> &Self {
        for v in self.storage.write().iter_mut() {
            *v = value;
        }
        self
    }

    /// Overwrites this tensor's contents with another tensor's values.
    ///
    /// Shapes must agree; the storage buffer is kept, only values change.
    pub fn copy_from(&self, other: &Self) -> Result<&Self> {
        ensure_same_shape(&self.shape, &other.shape)?;
        let src = other.to_vec();
        self.storage.write().copy_from_slice(&src);
        Ok(self)
    }
}

impl<T: Numeric> Tensor<T> {
    /// Creates a tensor filled with ones.
    #[must_use]
    pub fn ones(shape: &[usize]) -> Self {
        crate::creation::ones(shape)
    }

    /// Zeroes every element in place.
    pub fn zero_(&self) -> &Self {
        self.fill_(T::ZERO)
    }

    /// In-place element-wise addition: `self += other`.
    pub fn add_(&self, other: &Self) -> Result<&Self> {
        ensure_same_shape(&self.shape, &other.shape)?;
        let rhs = other.to_vec();
        for (v, r) in self.storage.write().iter_mut().zip(rhs.iter()) {
            *v = *v + *r;
        }
        Ok(self)
    }

    /// In-place element-wise subtraction: `self -= other`.
    pub fn sub_(&self, other: &Self) -> Result<&Self> {
        ensure_same_shape(&self.shape, &other.shape)?;
        let rhs = other.to_vec();
        for (v, r) in self.storage.write().iter_mut().zip(rhs.iter()) {
            *v = *v - *r;
        }
        Ok(self)
    }

    /// In-place element-wise multiplication: `self *= other`.
    pub fn mul_(&self, other: &Self) -> Result<&Self> {
        ensure_same_shape(&self.shape, &other.shape)?;
        let rhs = other.to_vec();
        for (v, r) in self.storage.write().iter_mut().zip(rhs.iter()) {
            *v = *v * *r;
        }
        Ok(self)
    }

    /// In-place scaled addition: `self += alpha * other`.
    pub fn add_scaled_(&self, other: &Self, alpha: T) -> Result<&Self> {
        ensure_same_shape(&self.shape, &other.shape)?;
        let rhs = other.to_vec();
        for (v, r) in self.storage.write().iter_mut().zip(rhs.iter()) {
            *v = *v + alpha * *r;
        }
        Ok(self)
    }

    /// In-place scaled subtraction: `self -= alpha * other`.
    pub fn sub_scaled_(&self, other: &Self, alpha: T) -> Result<&Self> {
        ensure_same_shape(&self.shape, &other.shape)?;
        let rhs = other.to_vec();
        for (v, r) in self.storage.write().iter_mut().zip(rhs.iter()) {
            *v = *v - alpha * *r;
        }
        Ok(self)
    }

    /// In-place scalar addition: `self += scalar`.
    pub fn add_scalar_(&self, scalar: T) -> &Self {
        for v in self.storage.write().iter_mut() {
            *v = *v + scalar;
        }
        self
    }

    /// In-place scalar multiplication: `self *= scalar`.
    pub fn mul_scalar_(&self, scalar: T) -> &Self {
        for v in self.storage.write().iter_mut() {
            *v = *v * scalar;
        }
        self
    }

    /// In-place element-wise maximum: `self = max(self, other)`.
    pub fn maximum_(&self, other: &Self) -> Result<&Self> {
        ensure_same_shape(&self.shape, &other.shape)?;
        let rhs = other.to_vec();
        for (v, r) in self.storage.write().iter_mut().zip(rhs.iter()) {
            if *r > *v {
                *v = *r;
            }
        }
        Ok(self)
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: Scalar + fmt::Display> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tensor<{}>(shape={:?}, data={:?})",
            T::DTYPE,
            self.shape(),
            self.to_vec()
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
