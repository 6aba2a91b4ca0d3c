//! Format - Persistence file formats
//!
//! Detects and names the on-disk encodings supported for persisted state.

use std::path::Path;

// =============================================================================
// Format
// =============================================================================

/// On-disk encoding for persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Efficient binary encoding (bincode). The native format.
    Binary,
    /// Human-readable JSON, for debugging and inspection.
    Json,
}

/// Determines the format from a file extension.
///
/// `.json` selects [`Format::Json`]; everything else uses the native
/// binary encoding.
#[must_use]
pub fn detect_format<P: AsRef<Path>>(path: P) -> Format {
    match path.as_ref().extension().and_then(|e| e.to_str()) {
        Some("json") => Format::Json,
        _ => Format::Binary,
    }
}

// =============================================================================
// Tests
// =============================================================================
