//! Data Types - Ferrograd Type System
//!
//! Defines the scalar types supported by Ferrograd tensors and provides
//! traits for type-safe operations. Supports floating point (f32, f64)
//! and 64-bit integer element types.
//!
//! @version 0.1.0
//! @author Ferrograd Development Team

use core::fmt::Debug;

use num_traits::{Float as NumFloat, Num, NumCast, One, Zero};

// =============================================================================
// DType Enum
// =============================================================================

/// Runtime representation of tensor data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating point (single precision).
    F32,
    /// 64-bit floating point (double precision).
    F64,
    /// 64-bit signed integer.
    I64,
}

impl DType {
    /// Returns the size in bytes of this data type.
    #[must_use]
    pub const fn size_of(self) -> usize {
        match self {
            Self::F32 => 4,
            Self::F64 | Self::I64 => 8,
        }
    }

    /// Returns true if this is a floating point type.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns the name of this data type as a string.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::I64 => "i64",
        }
    }
}

impl Default for DType {
    fn default() -> Self {
        Self::F64
    }
}

impl core::fmt::Display for DType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Scalar Trait
// =============================================================================

/// Trait for all scalar types that can be stored in a tensor.
///
/// This is the base trait that all tensor element types must implement.
pub trait Scalar:
    Copy + Clone + Debug + Default + PartialEq + PartialOrd + Send + Sync + 'static
{
    /// The runtime dtype for this scalar type.
    const DTYPE: DType;

    /// Returns the dtype for this type.
    #[must_use]
    fn dtype() -> DType {
        Self::DTYPE
    }
}

// =============================================================================
// Numeric Trait
// =============================================================================

/// Trait for numeric types that support arithmetic operations.
pub trait Numeric: Scalar + Num + NumCast + Zero + One {
    /// The zero value for this type.
    const ZERO: Self;

    /// The one value for this type.
    const ONE: Self;
}

// =============================================================================
// Float Trait
// =============================================================================

/// Trait for floating point element types.
pub trait Float: Numeric + NumFloat {}

// =============================================================================
// Implementations
// =============================================================================

impl Scalar for f32 {
    const DTYPE: DType = DType::F32;
}

impl Numeric for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

impl Float for f32 {}

impl Scalar for f64 {
    const DTYPE: DType = DType::F64;
}

impl Numeric for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

impl Float for f64 {}

impl Scalar for i64 {
    const DTYPE: DType = DType::I64;
}

impl Numeric for i64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
}

// =============================================================================
// Tests
// =============================================================================
