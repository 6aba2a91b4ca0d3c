//! Element-Wise Tensor Operations
//!
//! Owned (allocating) arithmetic on tensors: binary element-wise operations,
//! scalar variants, unary maps, and the standard operator trait
//! implementations. In-place variants live on `Tensor` itself.
//!
//! @version 0.1.0
//! @author Ferrograd Development Team

use core::ops::{Add, Div, Mul, Neg, Sub};

use ferrograd_core::dtype::{Float, Numeric};
use ferrograd_core::error::Result;

use crate::shape::ensure_same_shape;
use crate::tensor::Tensor;

// =============================================================================
// Binary Element-Wise Operations
// =============================================================================

fn binary_op<T: Numeric>(
    lhs: &Tensor<T>,
    rhs: &Tensor<T>,
    op: impl Fn(T, T) -> T,
) -> Result<Tensor<T>> {
    ensure_same_shape(lhs.shape(), rhs.shape())?;

    let a = lhs.to_vec();
    let b = rhs.to_vec();
    let result: Vec<T> = a.iter().zip(b.iter()).map(|(&x, &y)| op(x, y)).collect();

    Tensor::from_vec(result, lhs.shape())
}

impl<T: Numeric> Tensor<T> {
    /// Element-wise addition.
    pub fn add(&self, other: &Self) -> Result<Self> {
        binary_op(self, other, |a, b| a + b)
    }

    /// Element-wise subtraction.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        binary_op(self, other, |a, b| a - b)
    }

    /// Element-wise multiplication.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        binary_op(self, other, |a, b| a * b)
    }

    /// Element-wise division.
    pub fn div(&self, other: &Self) -> Result<Self> {
        binary_op(self, other, |a, b| a / b)
    }

    /// Element-wise maximum.
    pub fn maximum(&self, other: &Self) -> Result<Self> {
        binary_op(self, other, |a, b| if b > a { b } else { a })
    }

    // =========================================================================
    // Scalar Operations
    // =========================================================================

    /// Scalar addition.
    #[must_use]
    pub fn add_scalar(&self, scalar: T) -> Self {
        self.map(|v| v + scalar)
    }

    /// Scalar subtraction.
    #[must_use]
    pub fn sub_scalar(&self, scalar: T) -> Self {
        self.map(|v| v - scalar)
    }

    /// Scalar multiplication.
    #[must_use]
    pub fn mul_scalar(&self, scalar: T) -> Self {
        self.map(|v| v * scalar)
    }

    /// Scalar division.
    #[must_use]
    pub fn div_scalar(&self, scalar: T) -> Self {
        self.map(|v| v / scalar)
    }

    /// Element-wise square.
    #[must_use]
    pub fn sqr(&self) -> Self {
        self.map(|v| v * v)
    }

    /// Applies a function to every element, producing a new tensor.
    #[must_use]
    pub fn map(&self, f: impl Fn(T) -> T) -> Self {
        let data: Vec<T> = self.to_vec().iter().map(|&v| f(v)).collect();
        Tensor::from_vec(data, self.shape()).expect("map preserves shape")
    }
}

// =============================================================================
// Floating-Point Operations
// =============================================================================

impl<T: Float> Tensor<T> {
    /// Element-wise square root.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        self.map(num_traits::Float::sqrt)
    }

    /// Element-wise negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.map(|v| -v)
    }
}

// =============================================================================
// Operator Trait Implementations
// =============================================================================

impl<T: Numeric> Add for &Tensor<T> {
    type Output = Tensor<T>;

    fn add(self, other: Self) -> Self::Output {
        self.add(other).expect("Addition failed")
    }
}

impl<T: Numeric> Sub for &Tensor<T> {
    type Output = Tensor<T>;

    fn sub(self, other: Self) -> Self::Output {
        self.sub(other).expect("Subtraction failed")
    }
}

impl<T: Numeric> Mul for &Tensor<T> {
    type Output = Tensor<T>;

    fn mul(self, other: Self) -> Self::Output {
        self.mul(other).expect("Multiplication failed")
    }
}

impl<T: Numeric> Div for &Tensor<T> {
    type Output = Tensor<T>;

    fn div(self, other: Self) -> Self::Output {
        self.div(other).expect("Division failed")
    }
}

impl<T: Float> Neg for &Tensor<T> {
    type Output = Tensor<T>;

    fn neg(self) -> Self::Output {
        self.neg()
    }
}

impl<T: Numeric> Add<T> for &Tensor<T> {
    type Output = Tensor<T>;

    fn add(self, scalar: T) -> Self::Output {
        self.add_scalar(scalar)
    }
}

impl<T: Numeric> Mul<T> for &Tensor<T> {
    type Output = Tensor<T>;

    fn mul(self, scalar: T) -> Self::Output {
        self.mul_scalar(scalar)
    }
}

// =============================================================================
// Tests
// =============================================================================
