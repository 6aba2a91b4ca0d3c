//! Ferrograd Tensor - N-Dimensional Array for Optimization
//!
//! This crate provides the `Tensor` type the rest of the workspace operates
//! on: a contiguous n-dimensional numeric array over reference-counted,
//! interior-mutable storage. Element-wise arithmetic comes in owned and
//! in-place flavors; the in-place flavor is what optimizers use to update
//! parameters and their own state buffers without reallocating.
//!
//! # Example
//! ```rust
//! use ferrograd_tensor::{zeros, Tensor};
//!
//! let a = zeros::<f64>(&[2, 3]);
//! let b = Tensor::full(&[2, 3], 2.0);
//!
//! let c = a.add(&b).unwrap();
//! a.add_(&b).unwrap(); // in place
//! assert_eq!(a.to_vec(), c.to_vec());
//! ```
//!
//! @version 0.1.0
//! @author Ferrograd Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

// =============================================================================
// Modules
// =============================================================================

pub mod creation;
pub mod ops;
pub mod shape;
pub mod tensor;

// =============================================================================
// Re-exports
// =============================================================================

pub use creation::{full, ones, ones_like, rand, randn, zeros, zeros_like};
pub use ferrograd_core::{DType, Error, Result};
pub use shape::Shape;
pub use tensor::Tensor;

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    pub use crate::creation::{full, ones, rand, randn, zeros, zeros_like};
    pub use crate::shape::Shape;
    pub use crate::tensor::Tensor;
    pub use ferrograd_core::{DType, Error, Result};
}
