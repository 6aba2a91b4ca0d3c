//! Ferrograd Serialize - State Persistence for Training Resumption
//!
//! This crate provides the persistence layer for the workspace: a
//! serializable tensor exchange type and file-level helpers for saving and
//! restoring state records (such as an optimizer's state dictionary).
//!
//! # Supported Formats
//!
//! - **Binary** (default) - Efficient bincode encoding
//! - **JSON** (`.json`) - Human-readable format for debugging
//!
//! # Example
//!
//! ```ignore
//! use ferrograd_serialize::{load_state, save_state};
//!
//! let state = optimizer.state_dict();
//! save_state(&state, "optim.fgd")?;
//!
//! let restored = load_state("optim.fgd")?;
//! optimizer.load_state_dict(&restored)?;
//! ```
//!
//! @version 0.1.0
//! @author Ferrograd Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]

// =============================================================================
// Modules
// =============================================================================

mod format;
mod tensor_data;

// =============================================================================
// Re-exports
// =============================================================================

pub use format::{detect_format, Format};
pub use tensor_data::TensorData;

// =============================================================================
// Imports
// =============================================================================

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use ferrograd_core::{Error, Result};

// =============================================================================
// High-Level API
// =============================================================================

/// Save a serializable state record to a file.
///
/// The format is determined from the file extension.
pub fn save_state<S: Serialize, P: AsRef<Path>>(state: &S, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = detect_format(path);

    let file = File::create(path).map_err(|e| Error::serialization(e.to_string()))?;
    let mut writer = BufWriter::new(file);

    match format {
        Format::Binary => bincode::serialize_into(&mut writer, state)
            .map_err(|e| Error::serialization(e.to_string())),
        Format::Json => serde_json::to_writer_pretty(&mut writer, state)
            .map_err(|e| Error::serialization(e.to_string())),
    }
}

/// Load a state record from a file.
///
/// The format is determined from the file extension.
pub fn load_state<S: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<S> {
    let path = path.as_ref();
    let format = detect_format(path);

    let file = File::open(path).map_err(|e| Error::serialization(e.to_string()))?;
    let reader = BufReader::new(file);

    match format {
        Format::Binary => {
            bincode::deserialize_from(reader).map_err(|e| Error::serialization(e.to_string()))
        }
        Format::Json => {
            serde_json::from_reader(reader).map_err(|e| Error::serialization(e.to_string()))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
