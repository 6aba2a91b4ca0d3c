//! Tensor Data - Serializable tensor exchange type
//!
//! Provides `TensorData`, the flat shape-plus-values form tensors take in
//! persisted state.

use serde::{Deserialize, Serialize};

use ferrograd_core::Result;
use ferrograd_tensor::Tensor;

// =============================================================================
// TensorData
// =============================================================================

/// Serializable tensor data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensorData {
    /// Shape of the tensor.
    pub shape: Vec<usize>,
    /// Flattened f64 values in row-major order.
    pub values: Vec<f64>,
}

impl TensorData {
    /// Create `TensorData` from a tensor.
    #[must_use]
    pub fn from_tensor(tensor: &Tensor<f64>) -> Self {
        Self {
            shape: tensor.shape().to_vec(),
            values: tensor.to_vec(),
        }
    }

    /// Convert `TensorData` back to a tensor.
    pub fn to_tensor(&self) -> Result<Tensor<f64>> {
        Tensor::from_vec(self.values.clone(), &self.shape)
    }

    /// Get the number of elements.
    #[must_use]
    pub fn numel(&self) -> usize {
        self.values.len()
    }

    /// Get the shape.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
}

// =============================================================================
// Tests
// =============================================================================
