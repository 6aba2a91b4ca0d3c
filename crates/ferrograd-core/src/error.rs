//! Error Types - Ferrograd Core Error Handling
//!
//! Provides the unified error type shared by every crate in the workspace,
//! covering tensor shape disagreements, optimizer configuration problems,
//! and state persistence failures.
//!
//! # Key Features
//! - Unified error type for all Ferrograd operations
//! - Detailed error context for debugging
//! - Integration with `std::error::Error`
//!
//! @version 0.1.0
//! @author Ferrograd Development Team

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// The main error type for Ferrograd operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Shape mismatch between tensors.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// The expected shape.
        expected: Vec<usize>,
        /// The actual shape.
        actual: Vec<usize>,
    },

    /// Rejected hyperparameters at optimizer construction.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of the rejected configuration.
        message: String,
    },

    /// Persisted optimizer state incompatible with the live parameter set.
    #[error("State shape mismatch: {message}")]
    StateShapeMismatch {
        /// Description of the incompatibility.
        message: String,
    },

    /// Index out of bounds.
    #[error("Index out of bounds: index {index} for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index.
        index: usize,
        /// The size of the dimension.
        size: usize,
    },

    /// Invalid operation for the given tensor.
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of why the operation is invalid.
        message: String,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization error.
        message: String,
    },
}

// =============================================================================
// Result Type
// =============================================================================

/// A specialized Result type for Ferrograd operations.
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// Helper Functions
// =============================================================================

impl Error {
    /// Creates a new shape mismatch error.
    #[must_use]
    pub fn shape_mismatch(expected: &[usize], actual: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }

    /// Creates a new invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Creates a new state shape mismatch error.
    #[must_use]
    pub fn state_shape_mismatch(message: impl Into<String>) -> Self {
        Self::StateShapeMismatch {
            message: message.into(),
        }
    }

    /// Creates a new invalid operation error.
    #[must_use]
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    /// Creates a new serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
