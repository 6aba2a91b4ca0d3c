//! Optimizer Trait - Core Optimizer Interface
//!
//! Defines the trait that all optimizers implement.
//!
//! @version 0.1.0
//! @author Ferrograd Development Team

use ferrograd_core::Result;
use ferrograd_nn::Parameter;

// =============================================================================
// Optimizer Trait
// =============================================================================

/// Trait for all optimizers.
///
/// Optimizers update model parameters in place based on externally produced
/// gradients. Hyperparameters are fixed for an optimizer's lifetime; a
/// training schedule that varies them reconstructs the optimizer (and may
/// carry state across via its state dictionary).
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Walks the parameter sequence in order, skipping parameters without a
    /// gradient. A shape disagreement between a parameter and its gradient
    /// aborts the call; updates already applied to earlier parameters in the
    /// same call stand.
    fn step(&mut self) -> Result<()>;

    /// Zeros all parameter gradients in place.
    fn zero_grad(&mut self);

    /// Returns the parameters being optimized, in sequence order.
    fn parameters(&self) -> &[Parameter];

    /// Returns the number of parameters.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
