//! Ferrograd Core - Foundation Layer for the Ferrograd Optimization Library
//!
//! This crate provides the abstractions that underpin the rest of the
//! workspace: the unified error type, the scalar type system, and the
//! reference-counted storage that tensors mutate in place.
//!
//! # Key Features
//! - Unified `Error`/`Result` types for all Ferrograd operations
//! - Type-safe scalar traits (f32, f64, i64)
//! - Reference-counted, interior-mutable memory storage
//!
//! # Example
//! ```rust
//! use ferrograd_core::Storage;
//!
//! let storage = Storage::<f64>::zeros(1024);
//! assert_eq!(storage.len(), 1024);
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
#![allow(clippy::uninlined_format_args)]

// =============================================================================
// Modules
// =============================================================================

pub mod dtype;
pub mod error;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use dtype::{DType, Float, Numeric, Scalar};
pub use error::{Error, Result};
pub use storage::Storage;

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    pub use crate::dtype::{DType, Float, Numeric, Scalar};
    pub use crate::error::{Error, Result};
    pub use crate::storage::Storage;
}
