//! Parameter - Learnable Parameter Wrapper
//!
//! Wraps a tensor that is a learnable parameter of a model, together with
//! its optional gradient. The gradient slot is populated by an external
//! gradient producer and read by optimizers; a parameter with no gradient
//! is simply skipped by an optimization step.
//!
//! Parameters are cheaply cloneable handles: the model and the optimizer
//! hold clones of the same parameter, and updates through either handle are
//! visible through both.
//!
//! @version 0.1.0
//! @author Ferrograd Development Team

use std::sync::Arc;

use parking_lot::RwLock;

use ferrograd_core::Result;
use ferrograd_tensor::Tensor;

// =============================================================================
// Parameter
// =============================================================================

/// A learnable parameter with an optional associated gradient.
#[derive(Clone)]
pub struct Parameter {
    /// Shared parameter state.
    inner: Arc<RwLock<ParameterInner>>,
    /// Parameter name (for debugging and diagnostics).
    name: String,
}

struct ParameterInner {
    /// The parameter values, updated in place by optimizers.
    data: Tensor<f64>,
    /// The externally produced gradient, if any.
    grad: Option<Tensor<f64>>,
    /// Whether this parameter participates in optimization.
    requires_grad: bool,
}

impl Parameter {
    /// Creates a new parameter from a tensor.
    pub fn new(data: Tensor<f64>, requires_grad: bool) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ParameterInner {
                data,
                grad: None,
                requires_grad,
            })),
            name: String::new(),
        }
    }

    /// Creates a new parameter with a name.
    pub fn named(name: impl Into<String>, data: Tensor<f64>, requires_grad: bool) -> Self {
        let mut param = Self::new(data, requires_grad);
        param.name = name.into();
        param
    }

    /// Returns the parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the parameter name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns a handle onto the parameter tensor.
    ///
    /// The returned tensor shares storage with the parameter; in-place
    /// mutation through it updates the parameter.
    pub fn data(&self) -> Tensor<f64> {
        self.inner.read().data.clone()
    }

    /// Returns the shape of the parameter.
    pub fn shape(&self) -> Vec<usize> {
        self.inner.read().data.shape().to_vec()
    }

    /// Returns the number of elements.
    pub fn numel(&self) -> usize {
        self.inner.read().data.numel()
    }

    /// Returns whether this parameter participates in optimization.
    pub fn requires_grad(&self) -> bool {
        self.inner.read().requires_grad
    }

    /// Returns the gradient if one has been produced.
    ///
    /// The returned tensor shares storage with the stored gradient; the
    /// optimizer treats it as read-only.
    pub fn grad(&self) -> Option<Tensor<f64>> {
        self.inner.read().grad.clone()
    }

    /// Stores a gradient for this parameter, replacing any previous one.
    ///
    /// The shape is not validated here; consumers validate against the
    /// parameter shape at the point of use.
    pub fn set_grad(&self, grad: Tensor<f64>) {
        self.inner.write().grad = Some(grad);
    }

    /// Accumulates a gradient into this parameter.
    ///
    /// Sums with any existing gradient, so repeated backward passes add up.
    pub fn accumulate_grad(&self, grad: &Tensor<f64>) -> Result<()> {
        let mut inner = self.inner.write();
        match &inner.grad {
            Some(existing) => {
                existing.add_(grad)?;
            }
            None => inner.grad = Some(grad.deep_clone()),
        }
        Ok(())
    }

    /// Zeros the gradient in place, if one exists.
    pub fn zero_grad(&self) {
        if let Some(grad) = &self.inner.read().grad {
            grad.zero_();
        }
    }

    /// Removes the gradient entirely.
    ///
    /// A parameter without a gradient is skipped by optimization steps.
    pub fn clear_grad(&self) {
        self.inner.write().grad = None;
    }

    /// Overwrites the parameter values in place.
    pub fn update_data(&self, new_data: &Tensor<f64>) -> Result<()> {
        self.inner.read().data.copy_from(new_data)?;
        Ok(())
    }

    /// Applies a function to the parameter values and writes the result back.
    pub fn apply_update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&Tensor<f64>) -> Tensor<f64>,
    {
        let current = self.data();
        let updated = f(&current);
        self.update_data(&updated)
    }
}

impl std::fmt::Debug for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("shape", &self.shape())
            .field("requires_grad", &self.requires_grad())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
