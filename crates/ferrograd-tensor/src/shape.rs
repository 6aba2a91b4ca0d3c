//! Shape - Tensor Dimension Management
//!
//! Provides the shape representation used by tensors plus the indexing
//! helpers for contiguous row-major storage.
//!
//! @version 0.1.0
//! @author Ferrograd Development Team

use smallvec::SmallVec;

use ferrograd_core::error::{Error, Result};

// =============================================================================
// Type Aliases
// =============================================================================

/// Shape type - dimensions of a tensor.
/// Uses `SmallVec` for stack allocation of small shapes (up to 6 dimensions).
pub type Shape = SmallVec<[usize; 6]>;

// =============================================================================
// Shape Utilities
// =============================================================================

/// Computes the total number of elements from a shape.
#[must_use]
pub fn numel(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Computes the linear row-major offset for multi-dimensional indices,
/// bounds-checking each index against its dimension.
pub fn linear_index(indices: &[usize], shape: &[usize]) -> Result<usize> {
    if indices.len() != shape.len() {
        return Err(Error::invalid_operation(format!(
            "Expected {} indices, got {}",
            shape.len(),
            indices.len()
        )));
    }

    let mut offset = 0;
    for (&idx, &dim) in indices.iter().zip(shape.iter()) {
        if idx >= dim {
            return Err(Error::IndexOutOfBounds {
                index: idx,
                size: dim,
            });
        }
        offset = offset * dim + idx;
    }
    Ok(offset)
}

/// Verifies that two shapes agree, for element-wise operations.
pub fn ensure_same_shape(expected: &[usize], actual: &[usize]) -> Result<()> {
    if expected != actual {
        return Err(Error::shape_mismatch(expected, actual));
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
