//! Ferrograd Optim - Optimization Algorithms
//!
//! Provides the Adam optimizer (with its AMSGrad variant) for training
//! models whose gradients are produced externally.
//!
//! # Basic Example
//!
//! ```ignore
//! use ferrograd_optim::prelude::*;
//!
//! let mut optimizer = Adam::with_learning_rate(model.parameters(), 0.001)?;
//!
//! for batch in batches {
//!     optimizer.zero_grad();
//!     compute_gradients(&model, &batch);
//!     optimizer.step()?;
//! }
//! ```
//!
//! # Resuming Training
//!
//! Optimizer state (step counts and moment buffers) is captured with
//! [`Adam::state_dict`] and restored with [`Adam::load_state_dict`].
//! Hyperparameters are not part of the state and must be supplied
//! identically when reconstructing, or the resumed run departs from the
//! saved trajectory.
//!
//! ```ignore
//! use ferrograd_serialize::{load_state, save_state};
//!
//! save_state(&optimizer.state_dict(), "optim.fgd")?;
//!
//! // Later, in a fresh process:
//! let mut optimizer = Adam::new(model.parameters(), options)?;
//! optimizer.load_state_dict(&load_state("optim.fgd")?)?;
//! ```
//!
//! @version 0.1.0
//! @author Ferrograd Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

// =============================================================================
// Module Declarations
// =============================================================================

pub mod adam;
pub mod optimizer;

// =============================================================================
// Re-exports
// =============================================================================

pub use adam::{Adam, AdamOptions, AdamStateDict};
pub use optimizer::Optimizer;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for optimization.
pub mod prelude {
    pub use crate::{Adam, AdamOptions, AdamStateDict, Optimizer};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ferrograd_nn::Parameter;
    use ferrograd_serialize::{load_state, save_state};
    use ferrograd_tensor::{randn, Tensor};

    /// A small quadratic problem: minimize |p|^2, whose gradient is 2p.
    fn quadratic_grad(param: &Parameter) -> Tensor<f64> {
        param.data().mul_scalar(2.0)
    }

    #[test]
    fn test_adam_minimizes_quadratic() {
        let start = vec![2.0, -1.5, 3.0, -2.5, 1.0, -3.5, 2.0, -1.0];
        let param = Parameter::new(Tensor::from_vec(start, &[8]).unwrap(), true);
        let mut optimizer = Adam::with_learning_rate(vec![param.clone()], 0.05).unwrap();

        for _ in 0..300 {
            param.set_grad(quadratic_grad(&param));
            optimizer.step().unwrap();
        }
        let final_norm: f64 = param.data().to_vec().iter().map(|v| v * v).sum();

        // Each component walks to the optimum and then dithers within a few
        // multiples of the learning rate.
        assert!(final_norm < 0.5);
    }

    #[test]
    fn test_resume_from_file_matches_uninterrupted_run() {
        let initial = randn::<f64>(&[3, 3]);

        // Uninterrupted run: 20 steps straight.
        let param_full = Parameter::new(initial.deep_clone(), true);
        let mut full = Adam::with_learning_rate(vec![param_full.clone()], 0.01).unwrap();
        for _ in 0..20 {
            param_full.set_grad(quadratic_grad(&param_full));
            full.step().unwrap();
        }

        // Interrupted run: 10 steps, save to disk, restore, 10 more.
        let param_half = Parameter::new(initial.deep_clone(), true);
        let mut first = Adam::with_learning_rate(vec![param_half.clone()], 0.01).unwrap();
        for _ in 0..10 {
            param_half.set_grad(quadratic_grad(&param_half));
            first.step().unwrap();
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("optim.fgd");
        save_state(&first.state_dict(), &path).unwrap();
        drop(first);

        let mut resumed = Adam::with_learning_rate(vec![param_half.clone()], 0.01).unwrap();
        let state: AdamStateDict = load_state(&path).unwrap();
        resumed.load_state_dict(&state).unwrap();
        for _ in 0..10 {
            param_half.set_grad(quadratic_grad(&param_half));
            resumed.step().unwrap();
        }

        assert_eq!(param_full.data().to_vec(), param_half.data().to_vec());
        assert_eq!(full.state_dict(), resumed.state_dict());
    }
}
