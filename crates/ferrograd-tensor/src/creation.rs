//! Tensor Creation Functions
//!
//! Factory functions for creating tensors with common initializations:
//! zeros, ones, constants, and random values.
//!
//! @version 0.1.0
//! @author Ferrograd Development Team

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use rand_distr::StandardNormal;

use ferrograd_core::dtype::{Float, Numeric, Scalar};

use crate::shape::numel;
use crate::tensor::Tensor;

// =============================================================================
// Constant Initialization
// =============================================================================

/// Creates a tensor filled with the element type's default value
/// (zero for numeric types).
#[must_use]
pub fn zeros<T: Scalar>(shape: &[usize]) -> Tensor<T> {
    full(shape, T::default())
}

/// Creates a tensor filled with ones.
#[must_use]
pub fn ones<T: Numeric>(shape: &[usize]) -> Tensor<T> {
    full(shape, T::ONE)
}

/// Creates a tensor filled with a specific value.
pub fn full<T: Scalar>(shape: &[usize], value: T) -> Tensor<T> {
    let data = vec![value; numel(shape)];
    Tensor::from_vec(data, shape).expect("length derived from shape")
}

/// Creates a tensor with the same shape as another, filled with zeros.
#[must_use]
pub fn zeros_like<T: Scalar>(other: &Tensor<T>) -> Tensor<T> {
    zeros(other.shape())
}

/// Creates a tensor with the same shape as another, filled with ones.
#[must_use]
pub fn ones_like<T: Numeric>(other: &Tensor<T>) -> Tensor<T> {
    ones(other.shape())
}

// =============================================================================
// Random Initialization
// =============================================================================

/// Creates a tensor with uniformly distributed random values in [0, 1).
#[must_use]
pub fn rand<T: Float>(shape: &[usize]) -> Tensor<T>
where
    Standard: Distribution<T>,
{
    let mut rng = rand::thread_rng();
    let data: Vec<T> = (0..numel(shape)).map(|_| rng.gen()).collect();
    Tensor::from_vec(data, shape).expect("length derived from shape")
}

/// Creates a tensor with values drawn from the standard normal distribution.
#[must_use]
pub fn randn<T: Float>(shape: &[usize]) -> Tensor<T>
where
    StandardNormal: Distribution<T>,
{
    let mut rng = rand::thread_rng();
    let data: Vec<T> = (0..numel(shape))
        .map(|_| StandardNormal.sample(&mut rng))
        .collect();
    Tensor::from_vec(data, shape).expect("length derived from shape")
}

// =============================================================================
// Tests
// =============================================================================
